#![forbid(unsafe_code)]

//! Rich Text Format serialization of styled regions

use std::fmt::{self, Write};
use syntect::highlighting::{Color, FontStyle, Style};

/// Font face used when the request carries none
pub const DEFAULT_FONT: &str = "Courier New";

/// Incrementally built RTF document
///
/// The color table is collected while regions are pushed, so the header is
/// only assembled in [`RtfDocument::finish`].
pub struct RtfDocument {
    font: String,
    colors: Vec<Color>,
    body: String,
}

impl RtfDocument {
    pub fn new(font: Option<&str>) -> Self {
        RtfDocument {
            font: font.unwrap_or(DEFAULT_FONT).to_string(),
            colors: Vec::new(),
            body: String::new(),
        }
    }

    /// Appends one styled run of text
    pub fn push(&mut self, style: Style, text: &str) -> fmt::Result {
        if text.is_empty() {
            return Ok(());
        }

        let index = self.color_index(style.foreground);
        write!(self.body, "{{\\cf{index}")?;
        if style.font_style.contains(FontStyle::BOLD) {
            self.body.push_str("\\b");
        }
        if style.font_style.contains(FontStyle::ITALIC) {
            self.body.push_str("\\i");
        }
        if style.font_style.contains(FontStyle::UNDERLINE) {
            self.body.push_str("\\ul");
        }
        self.body.push(' ');
        escape_into(&mut self.body, text)?;
        self.body.push('}');
        Ok(())
    }

    /// Assembles header, color table and body into the final document
    pub fn finish(self) -> Result<String, fmt::Error> {
        let mut doc = String::with_capacity(self.body.len() + 256);
        doc.push_str("{\\rtf1\\ansi\\deff0");
        doc.push_str("{\\fonttbl{\\f0\\fmodern\\fprq1\\fcharset0 ");
        escape_into(&mut doc, &self.font)?;
        doc.push_str(";}}");

        // Index 0 is the "auto" color, so real entries start at 1
        doc.push_str("{\\colortbl;");
        for color in &self.colors {
            write!(doc, "\\red{}\\green{}\\blue{};", color.r, color.g, color.b)?;
        }
        doc.push_str("}\n");

        doc.push_str("\\f0\\fs20 ");
        doc.push_str(&self.body);
        doc.push('}');
        Ok(doc)
    }

    fn color_index(&mut self, color: Color) -> usize {
        let opaque = Color { a: 0xff, ..color };
        match self.colors.iter().position(|c| *c == opaque) {
            Some(position) => position + 1,
            None => {
                self.colors.push(opaque);
                self.colors.len()
            }
        }
    }
}

/// Escapes RTF control characters; non-ASCII becomes `\uN?`
fn escape_into(out: &mut String, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '\n' => out.push_str("\\par\n"),
            '\r' => {}
            '\t' => out.push_str("\\tab "),
            c if c.is_ascii() => out.push(c),
            c => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    // RTF takes signed 16-bit code units
                    write!(out, "\\u{}?", *unit as i16)?;
                }
            }
        }
    }
    Ok(())
}
