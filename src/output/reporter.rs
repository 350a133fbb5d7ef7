#![forbid(unsafe_code)]

//! Progress and diagnostic reporting
//!
//! Progress lines and console output go to stdout uncolored. Diagnostics go to
//! stderr with a colored severity prefix.

use std::error::Error;
use std::io::{self, Stdout, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes progress to `out` and diagnostics to `err`
pub struct Reporter<O, E> {
    out: O,
    err: E,
}

impl Reporter<Stdout, StandardStream> {
    /// Reporter bound to the process's stdout and stderr
    pub fn stdio(color_choice: ColorChoice) -> Self {
        Reporter::new(io::stdout(), StandardStream::stderr(color_choice))
    }
}

impl<O: Write, E: WriteColor> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Reporter { out, err }
    }

    /// `Highlighting : [source] to [destination]`
    pub fn progress(&mut self, source: &str, destination: &str) -> io::Result<()> {
        writeln!(self.out, "Highlighting : [{}] to [{}]", source, destination)
    }

    /// Writes a line of plain output (usage, style list)
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Writes rendered terminal output verbatim
    pub fn console(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.diagnostic(Color::Yellow, "warning", message)
    }

    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.diagnostic(Color::Red, "error", message)
    }

    /// Logs an error with its kind and every `source()` in its chain
    ///
    /// ```text
    /// error: failed to read 'missing.rs' [ReadError]
    ///   caused by: No such file or directory (os error 2)
    /// ```
    pub fn failure(&mut self, kind: &str, err: &dyn Error) -> io::Result<()> {
        self.error(&format!("{} [{}]", err, kind))?;
        let mut source = err.source();
        while let Some(cause) = source {
            writeln!(self.err, "  caused by: {}", cause)?;
            source = cause.source();
        }
        Ok(())
    }

    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }

    fn diagnostic(&mut self, color: Color, label: &str, message: &str) -> io::Result<()> {
        self.err
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(self.err, "{}:", label)?;
        self.err.reset()?;
        writeln!(self.err, " {}", message)
    }
}
