//! Solver output targets and graph input.
//!

use std::fs::File;
use std::io::{Error, ErrorKind, Result, Write};

mod edgelist;
pub use edgelist::*;

/// Destination of verbose solver output.  Every variant owns a writer, so
/// writes and flushes go through [`PrintTarget::writer`].
pub(crate) enum PrintTarget {
    Stdout(std::io::Stdout),
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    Sink(std::io::Sink),
}

impl PrintTarget {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            PrintTarget::Stdout(w) => w,
            PrintTarget::File(w) => w,
            PrintTarget::Buffer(w) => w,
            PrintTarget::Stream(w) => w,
            PrintTarget::Sink(w) => w,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PrintTarget::Stdout(_) => "stdout",
            PrintTarget::File(_) => "file",
            PrintTarget::Buffer(_) => "buffer",
            PrintTarget::Stream(_) => "stream",
            PrintTarget::Sink(_) => "sink",
        }
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrintTarget({})", self.name())
    }
}

impl Default for PrintTarget {
    fn default() -> Self {
        PrintTarget::Stdout(std::io::stdout())
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer().flush()
    }
}

/// Redirection of verbose output, implemented by [`SolveInfo`](crate::SolveInfo)
/// and [`ChordalSolver`](crate::ChordalSolver).
pub trait ConfigurablePrintTarget {
    /// write to standard output (the default)
    fn print_to_stdout(&mut self);
    /// write to an open file
    fn print_to_file(&mut self, file: File);
    /// write to any boxed writer
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// drop all output
    fn print_to_sink(&mut self);
    /// collect output in memory, see `get_print_buffer`
    fn print_to_buffer(&mut self);
    /// output collected since the last `print_to_buffer`
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::default();
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink(std::io::sink());
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        let PrintTarget::Buffer(buffer) = self else {
            return Err(Error::new(
                ErrorKind::Other,
                format!("output goes to {}, not to a buffer", self.name()),
            ));
        };
        Ok(String::from_utf8_lossy(buffer).into_owned())
    }
}

#[test]
fn test_buffer_target() {
    let mut target = PrintTarget::default();
    assert!(target.get_print_buffer().is_err());
    assert_eq!(format!("{:?}", target), "PrintTarget(stdout)");

    target.print_to_buffer();
    write!(target, "{} + {}", 2, 3).unwrap();
    assert_eq!(target.get_print_buffer().unwrap(), "2 + 3");

    target.print_to_sink();
    writeln!(target, "dropped").unwrap();
    target.flush().unwrap();
    assert!(target.get_print_buffer().is_err());
}
