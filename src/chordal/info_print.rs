use super::{ChordalSettings, SolveInfo};
use crate::graph::Graph;
use crate::io::ConfigurablePrintTarget;
use crate::timers::Timers;
use std::io::Write;
use std::time::Duration;

impl ConfigurablePrintTarget for SolveInfo {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}

const RULE: &str = "-------------------------------------------------------------";

impl SolveInfo {
    pub(crate) fn print_banner(&mut self, settings: &ChordalSettings) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        writeln!(out, "{}", RULE)?;
        writeln!(
            out,
            "        chordal v{}  -  Chordal Graph Recognition",
            crate::VERSION
        )?;
        writeln!(out, "{}", RULE)?;
        std::io::Result::Ok(())
    }

    pub(crate) fn print_configuration(
        &mut self,
        settings: &ChordalSettings,
        graph: &Graph,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "\nproblem:")?;
        writeln!(out, "  vertices      = {}", graph.vertex_count())?;
        writeln!(out, "  edges         = {}", graph.edge_count())?;
        writeln!(out,)?;

        let set = settings;
        writeln!(out, "settings:")?;
        writeln!(
            out,
            "  force chordal = {}, method = {}, max passes = {}",
            set.force_chordal, set.triangulation_method, set.max_passes
        )?;

        if set.sampling_enable {
            write!(
                out,
                "  sampling      = on, max vertices = {}, max edges = {}, ",
                set.max_vertices, set.max_edges
            )?;
            write!(
                out,
                "fraction = [{:.2}, {:.2}]",
                set.sample_fraction_min, set.sample_fraction_max
            )?;
            match set.seed {
                Some(seed) => writeln!(out, ", seed = {}", seed)?,
                None => writeln!(out, ", seed = random")?,
            }
        } else {
            writeln!(out, "  sampling      = off")?;
        }
        writeln!(out,)?;
        out.flush()?;

        std::io::Result::Ok(())
    }

    pub(crate) fn print_status_header(
        &mut self,
        settings: &ChordalSettings,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        writeln!(out, "pass    vertices    edges       fill")?;
        writeln!(out, "{}", RULE)?;
        std::io::Result::Ok(())
    }

    pub(crate) fn print_pass(
        &mut self,
        settings: &ChordalSettings,
        graph: &Graph,
        nfill: usize,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        writeln!(
            out,
            "{:>4}    {:>8}    {:>8}    {:>7}",
            self.passes,
            graph.vertex_count(),
            graph.edge_count(),
            nfill
        )?;
        std::io::Result::Ok(())
    }

    pub(crate) fn print_sampling(
        &mut self,
        settings: &ChordalSettings,
        from: usize,
        to: usize,
        fraction: f64,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;
        writeln!(
            out,
            "  sampled {} of {} vertices (fraction {:.3})",
            to, from, fraction
        )?;
        std::io::Result::Ok(())
    }

    pub(crate) fn print_footer(
        &mut self,
        settings: &ChordalSettings,
        timers: &Timers,
    ) -> std::io::Result<()> {
        if !settings.verbose {
            return std::io::Result::Ok(());
        }

        let out = &mut self.stream;

        writeln!(out, "{}", RULE)?;
        writeln!(out, "Terminated with status = {}", self.status)?;
        writeln!(
            out,
            "graph: {} vertices, {} edges (from {} vertices, {} edges)",
            self.final_vertices, self.final_edges, self.initial_vertices, self.initial_edges
        )?;
        if self.passes > 0 || self.samplings > 0 {
            writeln!(
                out,
                "fill edges = {}, passes = {}, samplings = {}",
                self.fill_edges_added, self.passes, self.samplings
            )?;
        }
        writeln!(
            out,
            "solve time = {:?}",
            Duration::from_secs_f64(self.solve_time)
        )?;
        timers.write_to(out)?;
        out.flush()?;

        std::io::Result::Ok(())
    }
}

#[test]
fn test_quiet_info_prints_nothing() {
    let mut info = SolveInfo::new();
    info.print_to_buffer();
    let settings = ChordalSettings::default();
    let g = Graph::from_edges([(0, 1)]);

    info.print_banner(&settings).unwrap();
    info.print_configuration(&settings, &g).unwrap();
    info.print_pass(&settings, &g, 3).unwrap();
    assert!(info.get_print_buffer().unwrap().is_empty());
}

#[test]
fn test_verbose_configuration() {
    let mut info = SolveInfo::new();
    info.print_to_buffer();
    let settings = ChordalSettings {
        verbose: true,
        seed: Some(11),
        ..ChordalSettings::default()
    };
    let g = Graph::from_edges([(0, 1), (1, 2)]);

    info.print_configuration(&settings, &g).unwrap();
    let text = info.get_print_buffer().unwrap();
    assert!(text.contains("vertices      = 3"));
    assert!(text.contains("edges         = 2"));
    assert!(text.contains("seed = 11"));
}
