#![forbid(unsafe_code)]

//! [`Highlighter`] backed by syntect grammars and themes

use super::ansi;
use super::highlighter::{HighlightError, Highlighter, RenderRequest, RenderTarget};
use super::html::HtmlDocument;
use super::rtf::RtfDocument;
use std::io::Cursor;
use std::path::Path;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Color, Style, Theme, ThemeSet};
use syntect::html::{
    ClassStyle, ClassedHTMLGenerator, IncludeBackground, css_for_theme_with_class_style,
    styled_line_to_highlighted_html,
};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

/// Name of the bundled theme used as the default style
pub const SCITE: &str = "scite";

const SCITE_THEME: &str = include_str!("../../assets/themes/scite.tmTheme");

type Line<'s> = Vec<(Style, &'s str)>;

/// Syntax highlighter using syntect's default grammars and themes
///
/// The bundled `scite` theme is registered next to syntect's own themes.
pub struct SyntectEngine {
    syntaxes: SyntaxSet,
    themes: ThemeSet,
}

impl SyntectEngine {
    /// Loads the default grammars and every bundled theme
    pub fn new() -> Result<Self, HighlightError> {
        let mut themes = ThemeSet::load_defaults();
        let scite = ThemeSet::load_from_reader(&mut Cursor::new(SCITE_THEME))
            .map_err(syntect::Error::from)?;
        themes.themes.insert(SCITE.to_string(), scite);

        Ok(SyntectEngine {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            themes,
        })
    }

    /// Picks the grammar for a request
    ///
    /// An explicit language must resolve. Without one, the title's extension,
    /// then its full file name, then the first source line are tried before
    /// falling back to plain text.
    fn syntax_for(
        &self,
        language: Option<&str>,
        title: &str,
        source: &str,
    ) -> Result<&SyntaxReference, HighlightError> {
        if let Some(language) = language {
            return self
                .syntaxes
                .find_syntax_by_token(language)
                .ok_or_else(|| HighlightError::UnknownLanguage(language.to_string()));
        }

        let path = Path::new(title);
        let by_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.syntaxes.find_syntax_by_extension(ext));
        let by_file_name = || {
            path.file_name()
                .and_then(|name| name.to_str())
                .and_then(|name| self.syntaxes.find_syntax_by_extension(name))
        };

        Ok(by_extension
            .or_else(by_file_name)
            .or_else(|| self.syntaxes.find_syntax_by_first_line(source))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text()))
    }

    /// Looks up a theme by exact name, then case-insensitively
    fn theme(&self, style: &str) -> Result<&Theme, HighlightError> {
        let themes = &self.themes.themes;
        themes
            .get(style)
            .or_else(|| {
                themes
                    .iter()
                    .find(|(name, _)| name.eq_ignore_ascii_case(style))
                    .map(|(_, theme)| theme)
            })
            .ok_or_else(|| HighlightError::UnknownStyle(style.to_string()))
    }

    fn highlight<'s>(
        &self,
        syntax: &SyntaxReference,
        theme: &Theme,
        source: &'s str,
    ) -> Result<Vec<Line<'s>>, HighlightError> {
        let mut highlighter = HighlightLines::new(syntax, theme);
        LinesWithEndings::from(source)
            .map(|line| {
                highlighter
                    .highlight_line(line, &self.syntaxes)
                    .map_err(HighlightError::from)
            })
            .collect()
    }

    fn render_html(
        &self,
        request: &RenderRequest<'_>,
        syntax: &SyntaxReference,
        theme: &Theme,
    ) -> Result<String, HighlightError> {
        let mut body = String::new();
        let mut stylesheet = String::new();

        if request.options.inline_styles {
            for line in self.highlight(syntax, theme, request.source)? {
                body.push_str(&styled_line_to_highlighted_html(&line, IncludeBackground::No)?);
            }
        } else {
            let mut generator = ClassedHTMLGenerator::new_with_class_style(
                syntax,
                &self.syntaxes,
                ClassStyle::Spaced,
            );
            for line in LinesWithEndings::from(request.source) {
                generator.parse_html_for_line_which_includes_newline(line)?;
            }
            body = generator.finalize();
            stylesheet = css_for_theme_with_class_style(theme, ClassStyle::Spaced)?;
        }

        let document = HtmlDocument {
            title: request.title,
            background: theme.settings.background.unwrap_or(Color::WHITE),
            foreground: theme.settings.foreground.unwrap_or(Color::BLACK),
            font: request.options.font,
            stylesheet: &stylesheet,
            body: &body,
        };
        Ok(document.render()?)
    }

    fn render_rtf(
        &self,
        request: &RenderRequest<'_>,
        syntax: &SyntaxReference,
        theme: &Theme,
    ) -> Result<String, HighlightError> {
        let mut document = RtfDocument::new(request.options.font);
        for line in self.highlight(syntax, theme, request.source)? {
            for (style, text) in line {
                document.push(style, text)?;
            }
        }
        Ok(document.finish()?)
    }
}

impl Highlighter for SyntectEngine {
    fn render(&self, request: &RenderRequest<'_>) -> Result<String, HighlightError> {
        let syntax = self.syntax_for(request.language, request.title, request.source)?;
        let theme = self.theme(request.style)?;

        match request.target {
            RenderTarget::Html => self.render_html(request, syntax, theme),
            RenderTarget::Rtf => self.render_rtf(request, syntax, theme),
            RenderTarget::Terminal(depth) => {
                let mut out = String::with_capacity(request.source.len() * 2);
                for line in self.highlight(syntax, theme, request.source)? {
                    ansi::push_regions(&mut out, &line, depth)?;
                }
                out.push_str(ansi::RESET);
                Ok(out)
            }
        }
    }

    fn styles(&self) -> Vec<String> {
        self.themes.themes.keys().cloned().collect()
    }
}
