//! Integration tests for the syntect-backed engine
//!
//! These exercise real grammars and themes against the fixtures in
//! `tests/fixtures`, checking the shape of every render target.

use shade::engine::{
    ColorDepth, FormatOptions, HighlightError, Highlighter, RenderRequest, RenderTarget, SCITE,
    SyntectEngine,
};

fn read_fixture(name: &str) -> String {
    let path = format!("tests/fixtures/{}", name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e))
}

fn render(engine: &SyntectEngine, target: RenderTarget, title: &str, style: &str) -> String {
    let source = read_fixture(title);
    let request = RenderRequest {
        target,
        source: &source,
        language: None,
        style,
        title,
        options: FormatOptions {
            font: Some("consolas"),
            inline_styles: true,
        },
    };
    engine
        .render(&request)
        .unwrap_or_else(|e| panic!("Failed to render {}: {}", title, e))
}

#[test]
fn test_every_listed_style_renders() {
    let engine = SyntectEngine::new().unwrap();
    let styles = engine.styles();
    assert!(styles.len() > 1);

    for style in &styles {
        let out = render(&engine, RenderTarget::Terminal(ColorDepth::TrueColor), "stats.py", style);
        assert!(out.contains("mean"), "style {} lost the source text", style);
    }
}

#[test]
fn test_html_keeps_every_source_line() {
    let engine = SyntectEngine::new().unwrap();
    let html = render(&engine, RenderTarget::Html, "greet.rs", SCITE);

    assert!(html.contains("<title>greet.rs</title>"));
    assert!(html.contains("font-family: consolas;"));
    assert!(html.matches('\n').count() > read_fixture("greet.rs").lines().count());
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_scite_colors_comments() {
    let engine = SyntectEngine::new().unwrap();
    let html = render(&engine, RenderTarget::Html, "stats.py", SCITE);

    // Comments in the scite theme are #007F00
    assert!(html.to_lowercase().contains("#007f00"));
}

#[test]
fn test_rtf_escapes_braces_and_backslashes() {
    let engine = SyntectEngine::new().unwrap();
    let rtf = render(&engine, RenderTarget::Rtf, "greet.rs", SCITE);

    assert!(rtf.starts_with("{\\rtf1\\ansi"));
    assert!(rtf.contains("\\{"));
    assert!(rtf.contains("\\}"));
    // The `\\` escape in the source becomes four backslashes
    assert!(rtf.contains("\\\\\\\\"));
    assert_eq!(
        rtf.matches("\\par").count(),
        read_fixture("greet.rs").lines().count()
    );
}

#[test]
fn test_terminal_depths_differ() {
    let engine = SyntectEngine::new().unwrap();
    let ansi256 = render(&engine, RenderTarget::Terminal(ColorDepth::Ansi256), "greet.rs", SCITE);
    let truecolor = render(&engine, RenderTarget::Terminal(ColorDepth::TrueColor), "greet.rs", SCITE);

    assert_ne!(ansi256, truecolor);
    assert!(ansi256.contains(";38;5;"));
    assert!(truecolor.contains(";38;2;"));
}

#[test]
fn test_same_request_same_bytes() {
    let engine = SyntectEngine::new().unwrap();

    for target in [
        RenderTarget::Html,
        RenderTarget::Rtf,
        RenderTarget::Terminal(ColorDepth::Ansi256),
    ] {
        assert_eq!(
            render(&engine, target, "greet.rs", SCITE),
            render(&engine, target, "greet.rs", SCITE)
        );
    }
}

#[test]
fn test_unknown_style_and_language() {
    let engine = SyntectEngine::new().unwrap();
    let mut request = RenderRequest {
        target: RenderTarget::Html,
        source: "x",
        language: None,
        style: "no-such-style",
        title: "x.rs",
        options: FormatOptions::default(),
    };

    assert!(matches!(engine.render(&request), Err(HighlightError::UnknownStyle(_))));

    request.style = SCITE;
    request.language = Some("no-such-language");
    assert!(matches!(engine.render(&request), Err(HighlightError::UnknownLanguage(_))));
}
