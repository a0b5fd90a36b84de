use super::SettingsError;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const DEFAULT_SAMPLE_FRACTION_MIN: f64 = 0.7;
const DEFAULT_SAMPLE_FRACTION_MAX: f64 = 0.9;

/// Settings for [`ChordalSolver`](super::ChordalSolver) and
/// [`make_chordal`](super::make_chordal).
///
/// The random sampling fallback used to bound the size of a graph before
/// and during triangulation is controlled here, so that exact runs on
/// small graphs can disable it and large runs can fix a seed.

#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChordalSettings {
    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///triangulate a non-chordal input before analysing it.  If false,
    ///solving a non-chordal graph stops with status `NotChordal`
    #[builder(default = "true")]
    pub force_chordal: bool,

    ///triangulation method ("fill_in" or "clique_cover")
    #[builder(default = r#""fill_in".to_string()"#)]
    pub triangulation_method: String,

    ///maximum number of fill-in passes before giving up
    #[builder(default = "10_000")]
    pub max_passes: u32,

    ///enable random vertex sampling of oversized graphs
    #[builder(default = "true")]
    pub sampling_enable: bool,

    ///vertex count above which a graph is sampled down
    #[builder(default = "10_000")]
    pub max_vertices: usize,

    ///edge count above which a graph is sampled down
    #[builder(default = "50_000")]
    pub max_edges: usize,

    ///smallest fraction of vertices kept by one sampling step
    #[builder(default = "DEFAULT_SAMPLE_FRACTION_MIN")]
    pub sample_fraction_min: f64,

    ///largest fraction of vertices kept by one sampling step
    #[builder(default = "DEFAULT_SAMPLE_FRACTION_MAX")]
    pub sample_fraction_max: f64,

    ///seed for the sampling generator.  A fresh seed is drawn when None
    #[builder(default = "None")]
    pub seed: Option<u64>,
}

impl Default for ChordalSettings {
    fn default() -> ChordalSettings {
        ChordalSettingsBuilder::default().build().unwrap()
    }
}

impl ChordalSettings {
    /// Checks that string options are recognized and that the sampling
    /// fractions form a valid range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        validate_triangulation_method(&self.triangulation_method)?;
        validate_fraction("sample_fraction_min", self.sample_fraction_min)?;
        validate_fraction("sample_fraction_max", self.sample_fraction_max)?;

        if self.sample_fraction_min > self.sample_fraction_max {
            return Err(SettingsError::BadFieldValue("sample_fraction_min"));
        }
        if self.max_passes == 0 {
            return Err(SettingsError::BadFieldValue("max_passes"));
        }
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for ChordalSettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        ChordalSettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl ChordalSettingsBuilder {
    /// check the fields that have been set explicitly
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(ref method) = self.triangulation_method {
            validate_triangulation_method(method)?;
        }
        if let Some(f) = self.sample_fraction_min {
            validate_fraction("sample_fraction_min", f)?;
        }
        if let Some(f) = self.sample_fraction_max {
            validate_fraction("sample_fraction_max", f)?;
        }
        let lo = self.sample_fraction_min.unwrap_or(DEFAULT_SAMPLE_FRACTION_MIN);
        let hi = self.sample_fraction_max.unwrap_or(DEFAULT_SAMPLE_FRACTION_MAX);
        if lo > hi {
            return Err(SettingsError::BadFieldValue("sample_fraction_min"));
        }
        if self.max_passes == Some(0) {
            return Err(SettingsError::BadFieldValue("max_passes"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------
// individual validation functions go here
// ---------------------------------------------------------

fn validate_triangulation_method(method: &str) -> Result<(), SettingsError> {
    match method {
        "fill_in" | "clique_cover" => Ok(()),
        _ => Err(SettingsError::UnknownOption {
            field: "triangulation_method",
            value: method.to_string(),
        }),
    }
}

fn validate_fraction(field: &'static str, f: f64) -> Result<(), SettingsError> {
    if f > 0.0 && f <= 1.0 {
        Ok(())
    } else {
        Err(SettingsError::BadFieldValue(field))
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    assert!(ChordalSettingsBuilder::default().build().is_ok());
    assert!(ChordalSettings::default().validate().is_ok());

    assert!(ChordalSettingsBuilder::default()
        .triangulation_method("clique_cover".to_string())
        .build()
        .is_ok());

    // fail on unknown triangulation method
    assert!(ChordalSettingsBuilder::default()
        .triangulation_method("foo".to_string())
        .build()
        .is_err());

    // fail on bad sampling fractions
    assert!(ChordalSettingsBuilder::default()
        .sample_fraction_min(0.0)
        .build()
        .is_err());
    assert!(ChordalSettingsBuilder::default()
        .sample_fraction_max(1.5)
        .build()
        .is_err());
    assert!(ChordalSettingsBuilder::default()
        .sample_fraction_min(0.9)
        .sample_fraction_max(0.5)
        .build()
        .is_err());

    // a minimum above the default maximum
    assert!(ChordalSettingsBuilder::default()
        .sample_fraction_min(0.95)
        .build()
        .is_err());

    assert!(ChordalSettingsBuilder::default().max_passes(0).build().is_err());

    // directly construct bad settings and manually check
    let settings = ChordalSettings {
        triangulation_method: "foo".to_string(),
        ..ChordalSettings::default()
    };
    assert!(matches!(
        settings.validate(),
        Err(SettingsError::UnknownOption { .. })
    ));
}
