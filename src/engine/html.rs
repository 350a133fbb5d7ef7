#![forbid(unsafe_code)]

//! HTML document assembly around highlighted markup

use std::fmt::{self, Write};
use syntect::highlighting::Color;

/// Pieces of a standalone HTML document
pub struct HtmlDocument<'a> {
    pub title: &'a str,
    pub background: Color,
    pub foreground: Color,
    /// CSS font-family list for the `<pre>` block
    pub font: Option<&'a str>,
    /// Stylesheet for class-based markup; empty for inline styles
    pub stylesheet: &'a str,
    /// Highlighted markup, already escaped
    pub body: &'a str,
}

impl HtmlDocument<'_> {
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::with_capacity(self.body.len() + self.stylesheet.len() + 512);

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html>")?;
        writeln!(out, "<head>")?;
        writeln!(out, "<meta charset=\"utf-8\">")?;
        writeln!(out, "<title>{}</title>", escape(self.title))?;
        if !self.stylesheet.is_empty() {
            writeln!(out, "<style>\n{}</style>", self.stylesheet)?;
        }
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;

        write!(
            out,
            "<pre style=\"background-color:{}; color:{};",
            hex(self.background),
            hex(self.foreground)
        )?;
        if let Some(font) = self.font {
            write!(out, " font-family: {};", escape(font))?;
        }
        writeln!(out, "\">")?;
        out.push_str(self.body);
        writeln!(out, "</pre>")?;

        writeln!(out, "</body>")?;
        writeln!(out, "</html>")?;
        Ok(out)
    }
}

fn hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Escapes text for use in element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}
