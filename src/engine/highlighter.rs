#![forbid(unsafe_code)]

//! The highlighting capability the dispatch pipeline depends on
//!
//! Anything that can turn source text into a rendered document implements
//! [`Highlighter`]. Calls are synchronous and must be deterministic for a
//! fixed request.

use thiserror::Error;

/// Representation requested from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTarget {
    /// Standalone HTML document
    Html,
    /// Rich Text Format document
    Rtf,
    /// ANSI escape sequences for a terminal
    Terminal(ColorDepth),
}

/// Color depth of terminal output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorDepth {
    /// xterm 256-color palette (`38;5;n`)
    Ansi256,
    /// 24-bit color (`38;2;r;g;b`)
    TrueColor,
}

/// Target-specific formatting knobs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions<'a> {
    /// Font hint: a CSS font-family list for HTML, a font face for RTF
    pub font: Option<&'a str>,
    /// Emit `style=` attributes instead of class names plus a stylesheet (HTML only)
    pub inline_styles: bool,
}

/// One highlight call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderRequest<'a> {
    pub target: RenderTarget,
    pub source: &'a str,
    /// Language name or extension; `None` means detect from `title` and content
    pub language: Option<&'a str>,
    pub style: &'a str,
    /// Display title, normally the input file name
    pub title: &'a str,
    pub options: FormatOptions<'a>,
}

/// Errors raised by a highlighting engine
#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("no lexer for language '{0}'")]
    UnknownLanguage(String),

    #[error("unknown style '{0}'")]
    UnknownStyle(String),

    #[error("highlighting failed")]
    Engine(#[from] syntect::Error),

    #[error("formatting failed")]
    Format(#[from] std::fmt::Error),
}

impl HighlightError {
    /// Stable name of the error kind, used in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            HighlightError::UnknownLanguage(_) => "UnknownLanguage",
            HighlightError::UnknownStyle(_) => "UnknownStyle",
            HighlightError::Engine(_) => "EngineError",
            HighlightError::Format(_) => "FormatError",
        }
    }
}

/// A syntax-highlighting engine
pub trait Highlighter {
    /// Renders `request.source` into the requested target representation
    fn render(&self, request: &RenderRequest<'_>) -> Result<String, HighlightError>;

    /// Names accepted as `style`, in display order
    fn styles(&self) -> Vec<String>;
}

impl<H: Highlighter + ?Sized> Highlighter for &H {
    fn render(&self, request: &RenderRequest<'_>) -> Result<String, HighlightError> {
        (**self).render(request)
    }

    fn styles(&self) -> Vec<String> {
        (**self).styles()
    }
}
