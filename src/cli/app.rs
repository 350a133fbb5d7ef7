#![forbid(unsafe_code)]

//! Application entry: mode selection, plan resolution and exit status

use super::args::{OptionBag, ParsedArgs, parse_args};
use super::usage::usage;
use crate::config::{ColorOption, Config, ConfigError};
use crate::dispatch::{
    DEFAULT_HTML_FONT, DEFAULT_OUTPUT, DEFAULT_RTF_FONT, DispatchError, OutputKind, Pipeline, Plan,
};
use crate::engine::{HighlightError, Highlighter, SCITE, SyntectEngine};
use crate::output::Reporter;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use termcolor::WriteColor;
use thiserror::Error;

const HELP_FLAGS: &[&str] = &["help", "?", "h"];
const CONSOLE_FLAGS: &[&str] = &["console", "c"];
const LIST_STYLES_FLAG: &str = "liststyles";

/// What an invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print the engine's style names
    ListStyles,
    /// Print usage text
    Usage,
    /// Run the dispatch pipeline
    Highlight,
}

impl Mode {
    /// Listing styles needs zero files and is checked before help
    pub fn detect(parsed: &ParsedArgs) -> Self {
        let no_files = parsed.files.is_empty();
        if no_files && parsed.options.contains_any(&[LIST_STYLES_FLAG]) {
            Mode::ListStyles
        } else if no_files || parsed.options.contains_any(HELP_FLAGS) {
            Mode::Usage
        } else {
            Mode::Highlight
        }
    }
}

/// Errors that end a run with a failure status
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to start the highlighting engine")]
    Engine(#[from] HighlightError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("failed to write output")]
    Io(#[from] io::Error),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Config(_) => "ConfigError",
            AppError::Engine(err) => err.kind(),
            AppError::Dispatch(err) => err.kind(),
            AppError::Io(_) => "OutputError",
        }
    }
}

/// Runs the command line (without the program name) against the process's stdio
pub fn run<I, S>(args: I) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = parse_args(args);
    let mode = Mode::detect(&parsed);
    let flag_color = color_flag(&parsed.options);

    let config = match mode {
        Mode::Highlight => load_config(&parsed.options),
        Mode::ListStyles | Mode::Usage => Ok(Config::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            let color = flag_color.flatten().unwrap_or_default();
            let mut reporter = Reporter::stdio(color.to_color_choice());
            let err = AppError::from(err);
            let _ = reporter.failure(err.kind(), &err);
            return ExitCode::FAILURE;
        }
    };

    let color = flag_color.flatten().unwrap_or(config.output.color);
    let mut reporter = Reporter::stdio(color.to_color_choice());
    if let Some(None) = flag_color
        && let Some(value) = parsed.options.value("color")
    {
        let _ = reporter.warning(&format!("unknown color choice '{}', using {:?}", value, color));
    }

    match execute(mode, &parsed, &config, SyntectEngine::new, &mut reporter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = reporter.failure(err.kind(), &err);
            ExitCode::FAILURE
        }
    }
}

/// Carries out `mode`, building the engine only when it is needed
pub fn execute<H, F, O, E>(
    mode: Mode,
    parsed: &ParsedArgs,
    config: &Config,
    make_engine: F,
    reporter: &mut Reporter<O, E>,
) -> Result<(), AppError>
where
    H: Highlighter,
    F: FnOnce() -> Result<H, HighlightError>,
    O: Write,
    E: WriteColor,
{
    match mode {
        Mode::Usage => reporter.line(usage().trim_end())?,
        Mode::ListStyles => {
            let engine = make_engine()?;
            reporter.line(&engine.styles().join(", "))?;
        }
        Mode::Highlight => {
            let plan = resolve_plan(parsed, config);
            let engine = make_engine()?;
            Pipeline::new(engine).run(&plan, reporter)?;
        }
    }
    Ok(())
}

/// Merges flags over config over built-in defaults
pub fn resolve_plan(parsed: &ParsedArgs, config: &Config) -> Plan {
    let options = &parsed.options;
    let defaults = &config.defaults;

    let style = options
        .value("style")
        .or(defaults.style.as_deref())
        .unwrap_or(SCITE);
    let language = options.value("language").or(defaults.language.as_deref());

    let configured: Vec<String> = defaults.outputs.iter().map(|o| o.to_lowercase()).collect();
    let requested = options.values("output");
    let outputs = if requested.is_empty() && !configured.is_empty() {
        OutputKind::parse_all(configured.iter().map(String::as_str))
    } else {
        OutputKind::parse_all(options.values_or("output", DEFAULT_OUTPUT))
    };

    Plan {
        files: parsed.files.clone(),
        language: language.map(str::to_string),
        style: style.to_string(),
        outputs,
        console: options.contains_any(CONSOLE_FLAGS) || defaults.console,
        html_font: config
            .fonts
            .html
            .clone()
            .unwrap_or_else(|| DEFAULT_HTML_FONT.to_string()),
        rtf_font: config
            .fonts
            .rtf
            .clone()
            .unwrap_or_else(|| DEFAULT_RTF_FONT.to_string()),
    }
}

/// `--config=<path>` if given, otherwise `shade.toml` in the working directory
fn load_config(options: &OptionBag) -> Result<Config, ConfigError> {
    match options.raw_value("config") {
        Some(path) => Config::load(Path::new(path)),
        None => Config::discover(Path::new(".")),
    }
}

/// `None` if no `--color=` was given, `Some(None)` if its value is unrecognized
fn color_flag(options: &OptionBag) -> Option<Option<ColorOption>> {
    options.value("color").map(ColorOption::parse)
}
