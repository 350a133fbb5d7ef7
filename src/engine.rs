//! Syntax-highlighting engines

pub mod ansi;
pub mod highlighter;
pub mod html;
pub mod rtf;
pub mod syntect_engine;

pub use highlighter::{
    ColorDepth, FormatOptions, HighlightError, Highlighter, RenderRequest, RenderTarget,
};
pub use syntect_engine::{SCITE, SyntectEngine};
