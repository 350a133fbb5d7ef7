#![forbid(unsafe_code)]

//! Output kinds accepted by `--output=`

use crate::engine::{ColorDepth, RenderTarget};
use std::fmt;

/// Output kind used when none is requested
pub const DEFAULT_OUTPUT: &str = "html";

/// How far a failure inside one output kind reaches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Isolation {
    /// The first failure stops the remaining files of this kind only
    PerKind,
    /// A failure skips the file; the next file proceeds
    PerFile,
    /// A failure ends the whole run
    Propagate,
}

/// A rendering target requested on the command line
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Html,
    Rtf,
    Terminal(ColorDepth),
    /// Accepted but not produced yet
    BbCode,
    /// Accepted but not produced yet
    Latex,
    Unknown(String),
}

impl OutputKind {
    /// Parses an already case-folded kind name; never fails
    pub fn parse(name: &str) -> Self {
        match name {
            "html" => OutputKind::Html,
            "rtf" => OutputKind::Rtf,
            "terminal256" | "console256" | "256" => OutputKind::Terminal(ColorDepth::Ansi256),
            "terminal16" | "console16" | "16m" => OutputKind::Terminal(ColorDepth::TrueColor),
            "bbcode" => OutputKind::BbCode,
            "latex" => OutputKind::Latex,
            other => OutputKind::Unknown(other.to_string()),
        }
    }

    /// Parses a list of names, keeping the first occurrence of each kind
    ///
    /// Aliases collapse: `terminal256` followed by `256` yields one kind.
    pub fn parse_all<'a, I>(names: I) -> Vec<OutputKind>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut kinds = Vec::new();
        for name in names {
            let kind = OutputKind::parse(name);
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    /// Engine target, or `None` for kinds that produce nothing
    pub fn target(&self) -> Option<RenderTarget> {
        match self {
            OutputKind::Html => Some(RenderTarget::Html),
            OutputKind::Rtf => Some(RenderTarget::Rtf),
            OutputKind::Terminal(depth) => Some(RenderTarget::Terminal(*depth)),
            OutputKind::BbCode | OutputKind::Latex | OutputKind::Unknown(_) => None,
        }
    }

    /// Suffix appended to the input's full file name
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            OutputKind::Html => Some(".html"),
            OutputKind::Rtf => Some(".rtf"),
            OutputKind::Terminal(_) => Some(".ans"),
            OutputKind::BbCode | OutputKind::Latex | OutputKind::Unknown(_) => None,
        }
    }

    /// Failure reach of this kind
    ///
    /// HTML stops at the first failing file, RTF failures end the run, and
    /// terminal output skips only the failing file.
    pub fn isolation(&self) -> Isolation {
        match self {
            OutputKind::Html => Isolation::PerKind,
            OutputKind::Rtf => Isolation::Propagate,
            _ => Isolation::PerFile,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OutputKind::Terminal(_))
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputKind::Html => f.write_str("html"),
            OutputKind::Rtf => f.write_str("rtf"),
            OutputKind::Terminal(ColorDepth::Ansi256) => f.write_str("terminal256"),
            OutputKind::Terminal(ColorDepth::TrueColor) => f.write_str("16m"),
            OutputKind::BbCode => f.write_str("bbcode"),
            OutputKind::Latex => f.write_str("latex"),
            OutputKind::Unknown(name) => f.write_str(name),
        }
    }
}
