#![forbid(unsafe_code)]

//! shade: syntax-highlight source files into HTML, RTF and ANSI output
//!
//! Each file named on the command line is rendered once per requested output
//! kind and written next to the input (`<file>.html`, `<file>.rtf`,
//! `<file>.ans`), or sent straight to the terminal.

pub mod cli;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod engine;
pub mod output;
