#![forbid(unsafe_code)]

//! ANSI escape serialization of styled regions

use super::highlighter::ColorDepth;
use std::fmt::{self, Write};
use syntect::highlighting::{Color, FontStyle, Style};

/// Resets every attribute
pub const RESET: &str = "\x1b[0m";

/// Appends `regions` to `out`, each prefixed by its SGR sequence
pub fn push_regions(out: &mut String, regions: &[(Style, &str)], depth: ColorDepth) -> fmt::Result {
    for (style, text) in regions {
        write!(out, "\x1b[0")?;
        if style.font_style.contains(FontStyle::BOLD) {
            out.push_str(";1");
        }
        if style.font_style.contains(FontStyle::ITALIC) {
            out.push_str(";3");
        }
        if style.font_style.contains(FontStyle::UNDERLINE) {
            out.push_str(";4");
        }
        push_foreground(out, style.foreground, depth)?;
        out.push('m');
        out.push_str(text);
    }
    Ok(())
}

fn push_foreground(out: &mut String, color: Color, depth: ColorDepth) -> fmt::Result {
    match depth {
        ColorDepth::TrueColor => write!(out, ";38;2;{};{};{}", color.r, color.g, color.b),
        ColorDepth::Ansi256 => write!(out, ";38;5;{}", xterm256(color.r, color.g, color.b)),
    }
}

const CUBE_STEPS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Nearest xterm-256 palette index for an RGB color
///
/// Only the 6x6x6 cube (16..=231) and the grayscale ramp (232..=255) are
/// considered; the 16 system colors vary between terminals.
pub fn xterm256(r: u8, g: u8, b: u8) -> u8 {
    let (ri, gi, bi) = (cube_index(r), cube_index(g), cube_index(b));
    let cube = (16 + 36 * ri + 6 * gi + bi) as u8;
    let cube_distance = distance(
        (r, g, b),
        (CUBE_STEPS[ri], CUBE_STEPS[gi], CUBE_STEPS[bi]),
    );

    let average = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    let gray_step = ((i32::from(average) - 3) / 10).clamp(0, 23) as u8;
    let level = 8 + 10 * gray_step;
    let gray_distance = distance((r, g, b), (level, level, level));

    if gray_distance < cube_distance {
        232 + gray_step
    } else {
        cube
    }
}

fn cube_index(value: u8) -> usize {
    match value {
        0..=47 => 0,
        48..=114 => 1,
        _ => usize::from(value - 35) / 40,
    }
}

fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let d = |x: u8, y: u8| {
        let diff = i32::from(x) - i32::from(y);
        (diff * diff) as u32
    };
    d(a.0, b.0) + d(a.1, b.1) + d(a.2, b.2)
}
