//! Nested wall-clock timers for the solver pipeline.
//!
//! Timers are keyed by static names and nest according to the order in
//! which they are started, so that e.g. "ordering" started inside "solve"
//! is reported as a child of "solve".

use indexmap::IndexMap;
use std::io::Write;

cfg_if::cfg_if! {
    if #[cfg(target_family = "wasm")] {
        use web_time::{Duration, Instant};
    } else {
        use std::time::{Duration, Instant};
    }
}

#[derive(Debug, Default)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    children: IndexMap<&'static str, InnerTimer>,
}

impl InnerTimer {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }

    fn suspend(&mut self) {
        // bank the running time but stay marked as active
        if let Some(instant) = self.start {
            self.elapsed += instant.elapsed();
            self.children.values_mut().for_each(InnerTimer::suspend);
        }
    }

    fn resume(&mut self) {
        if self.start.is_some() {
            self.start = Some(Instant::now());
            self.children.values_mut().for_each(InnerTimer::resume);
        }
    }

    fn write(&self, out: &mut dyn Write, key: &str, depth: usize) -> std::io::Result<()> {
        let indent = 4 * depth;
        writeln!(out, "{:indent$}{} : {:?}", "", key, self.elapsed)?;
        for (k, t) in &self.children {
            t.write(out, k, depth + 1)?;
        }
        Ok(())
    }
}

/// Collection of nested named timers.
#[derive(Debug, Default)]
pub struct Timers {
    stack: Vec<&'static str>,
    roots: IndexMap<&'static str, InnerTimer>,
}

impl Timers {
    fn active_children(&mut self) -> &mut IndexMap<&'static str, InnerTimer> {
        let mut children = &mut self.roots;
        for key in &self.stack {
            children = &mut children.entry(*key).or_default().children;
        }
        children
    }

    /// Clear a root timer and everything nested below it.
    pub fn reset_timer(&mut self, key: &'static str) {
        self.roots.insert(key, InnerTimer::default());
    }

    /// Start the timer `key` nested inside the currently running one.
    pub fn start_as_current(&mut self, key: &'static str) {
        self.active_children().entry(key).or_default().start();
        self.stack.push(key);
    }

    /// Stop the most recently started timer.
    pub fn stop_current(&mut self) {
        let Some(key) = self.stack.pop() else {
            return;
        };
        if let Some(t) = self.active_children().get_mut(key) {
            t.stop();
        }
    }

    pub fn suspend(&mut self) {
        self.roots.values_mut().for_each(InnerTimer::suspend);
    }

    pub fn resume(&mut self) {
        self.roots.values_mut().for_each(InnerTimer::resume);
    }

    /// Sum of the root timers.
    pub fn total_time(&self) -> Duration {
        self.roots.values().map(|t| t.elapsed).sum()
    }

    /// Elapsed time of the timer reached by following `path` from the roots.
    pub fn elapsed(&self, path: &[&str]) -> Option<Duration> {
        let (first, rest) = path.split_first()?;
        let mut timer = self.roots.get(first)?;
        for key in rest {
            timer = timer.children.get(key)?;
        }
        Some(timer.elapsed)
    }

    pub fn write_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for (key, t) in &self.roots {
            t.write(out, key, 0)?;
        }
        Ok(())
    }
}

macro_rules! timeit {
    ($timer:ident => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;

macro_rules! notimeit {
    ($timer:ident; $($tt:tt)+) => {

        $timer.suspend();
        $(
            $tt
        )+
        $timer.resume();
    }
}
pub(crate) use notimeit;

#[test]
fn test_nested_timers() {
    let mut timers = Timers::default();
    timeit! {timers => "outer"; {
        timeit!{timers => "inner"; {
            std::thread::sleep(Duration::from_millis(2));
        }}
        notimeit!{timers; {
            std::thread::sleep(Duration::from_millis(2));
        }}
    }}

    let outer = timers.elapsed(&["outer"]).unwrap();
    let inner = timers.elapsed(&["outer", "inner"]).unwrap();
    assert!(inner >= Duration::from_millis(2));
    assert!(outer >= inner);
    assert_eq!(timers.total_time(), outer);
    assert!(timers.elapsed(&["inner"]).is_none());

    let mut buf = Vec::new();
    timers.write_to(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("outer"));
    assert!(text.contains("    inner"));
}
