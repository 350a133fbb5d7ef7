#![forbid(unsafe_code)]

//! Per-output-kind dispatch of files to the highlighting engine
//!
//! Output kinds run in the order requested; files within a kind run in
//! command-line order. How far a failure reaches depends on the kind, see
//! [`OutputKind::isolation`].

use super::output_kind::{Isolation, OutputKind};
use crate::console::{self, AnsiConsole};
use crate::engine::{FormatOptions, HighlightError, Highlighter, RenderRequest, RenderTarget};
use crate::output::Reporter;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use termcolor::WriteColor;
use thiserror::Error;

/// CSS font-family hint for HTML output
pub const DEFAULT_HTML_FONT: &str = "consolas, courier";
/// Font face for RTF output
pub const DEFAULT_RTF_FONT: &str = "consolas";

/// Everything one run needs, resolved from flags and configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub files: Vec<String>,
    /// Language override; `None` lets the engine detect it
    pub language: Option<String>,
    pub style: String,
    /// De-duplicated, in request order
    pub outputs: Vec<OutputKind>,
    /// Write terminal kinds to stdout instead of `<file>.ans`
    pub console: bool,
    pub html_font: String,
    pub rtf_font: String,
}

/// Errors raised while processing one file for one output kind
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to read '{path}'")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to highlight '{path}'")]
    Highlight {
        path: String,
        #[source]
        source: HighlightError,
    },

    #[error("failed to write to the terminal")]
    Output(#[from] io::Error),
}

impl DispatchError {
    /// Stable name of the error kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            DispatchError::Read { .. } => "ReadError",
            DispatchError::Write { .. } => "WriteError",
            DispatchError::Highlight { source, .. } => source.kind(),
            DispatchError::Output(_) => "OutputError",
        }
    }
}

/// What happened to one requested output kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KindStatus {
    /// Every file was attempted
    Completed,
    /// A failure stopped the remaining files of this kind
    Aborted { file: String },
    /// Accepted kind that produces nothing yet
    Reserved,
    /// Unrecognized kind, reported and skipped
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindReport {
    pub kind: OutputKind,
    pub status: KindStatus,
    /// Sibling files written, in order
    pub written: Vec<PathBuf>,
    /// Files whose failure was logged
    pub failed: Vec<String>,
}

impl KindReport {
    fn new(kind: &OutputKind, status: KindStatus) -> Self {
        KindReport {
            kind: kind.clone(),
            status,
            written: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Outcome of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub kinds: Vec<KindReport>,
    /// Console state, if terminal output went to the console
    pub console: Option<AnsiConsole>,
}

/// Sends every file through the engine once per requested output kind
pub struct Pipeline<H> {
    engine: H,
    console: Option<AnsiConsole>,
    acquire_console: fn() -> AnsiConsole,
}

impl<H: Highlighter> Pipeline<H> {
    pub fn new(engine: H) -> Self {
        Pipeline {
            engine,
            console: None,
            acquire_console: AnsiConsole::acquire,
        }
    }

    /// Replaces the console negotiation, mainly for tests
    pub fn with_console(mut self, acquire: fn() -> AnsiConsole) -> Self {
        self.acquire_console = acquire;
        self
    }

    /// Runs every output kind of `plan`
    ///
    /// Only failures of kinds with [`Isolation::Propagate`] are returned;
    /// everything else is logged through `reporter` and recorded in the report.
    pub fn run<O: Write, E: WriteColor>(
        &mut self,
        plan: &Plan,
        reporter: &mut Reporter<O, E>,
    ) -> Result<RunReport, DispatchError> {
        let mut kinds = Vec::with_capacity(plan.outputs.len());

        for kind in &plan.outputs {
            let report = match (kind, kind.target()) {
                (_, Some(target)) => self.run_kind(kind, target, plan, reporter)?,
                (OutputKind::Unknown(name), None) => {
                    reporter.error(&format!("Unknown output type '{}' -- skipping", name))?;
                    KindReport::new(kind, KindStatus::Unknown)
                }
                (_, None) => KindReport::new(kind, KindStatus::Reserved),
            };
            kinds.push(report);
        }

        Ok(RunReport {
            kinds,
            console: self.console,
        })
    }

    fn run_kind<O: Write, E: WriteColor>(
        &mut self,
        kind: &OutputKind,
        target: RenderTarget,
        plan: &Plan,
        reporter: &mut Reporter<O, E>,
    ) -> Result<KindReport, DispatchError> {
        let mut report = KindReport::new(kind, KindStatus::Completed);

        for file in &plan.files {
            match self.process_file(kind, target, file, plan, reporter) {
                Ok(written) => report.written.extend(written),
                Err(err) => match kind.isolation() {
                    Isolation::Propagate => return Err(err),
                    Isolation::PerKind => {
                        reporter.failure(err.kind(), &err)?;
                        report.failed.push(file.clone());
                        report.status = KindStatus::Aborted { file: file.clone() };
                        break;
                    }
                    Isolation::PerFile => {
                        reporter.failure(err.kind(), &err)?;
                        report.failed.push(file.clone());
                    }
                },
            }
        }

        Ok(report)
    }

    /// Renders one file; returns the sibling file written, if any
    fn process_file<O: Write, E: WriteColor>(
        &mut self,
        kind: &OutputKind,
        target: RenderTarget,
        file: &str,
        plan: &Plan,
        reporter: &mut Reporter<O, E>,
    ) -> Result<Option<PathBuf>, DispatchError> {
        if kind.is_terminal() && plan.console {
            self.ensure_console(reporter)?;
            let rendered = self.render(target, file, plan)?;
            reporter.console(&console::normalize_newlines(&rendered, console::LINE_ENDING))?;
            return Ok(None);
        }

        let destination = format!("{}{}", file, kind.suffix().unwrap_or_default());
        reporter.progress(file, &destination)?;
        let rendered = self.render(target, file, plan)?;
        fs::write(&destination, rendered).map_err(|source| DispatchError::Write {
            path: destination.clone(),
            source,
        })?;
        Ok(Some(PathBuf::from(destination)))
    }

    fn render(&self, target: RenderTarget, file: &str, plan: &Plan) -> Result<String, DispatchError> {
        let bytes = fs::read(file).map_err(|source| DispatchError::Read {
            path: file.to_string(),
            source,
        })?;
        let source = String::from_utf8_lossy(&bytes);

        let font = match target {
            RenderTarget::Html => Some(plan.html_font.as_str()),
            RenderTarget::Rtf => Some(plan.rtf_font.as_str()),
            RenderTarget::Terminal(_) => None,
        };
        let request = RenderRequest {
            target,
            source: &source,
            language: plan.language.as_deref(),
            style: &plan.style,
            title: file,
            options: FormatOptions {
                font,
                inline_styles: true,
            },
        };

        self.engine
            .render(&request)
            .map_err(|source| DispatchError::Highlight {
                path: file.to_string(),
                source,
            })
    }

    /// Negotiates ANSI mode on the first console write of the run
    fn ensure_console<O: Write, E: WriteColor>(
        &mut self,
        reporter: &mut Reporter<O, E>,
    ) -> io::Result<()> {
        if self.console.is_some() {
            return Ok(());
        }

        let console = (self.acquire_console)();
        if let AnsiConsole::Unavailable { code } = console {
            let code = code.map_or_else(|| "unknown".to_string(), |c| c.to_string());
            reporter.warning(&format!(
                "failed to set output console mode, error code: {}",
                code
            ))?;
        }
        self.console = Some(console);
        Ok(())
    }
}
