//! Bold foreground coloring for report fields.

use std::fmt::Display;

use console::{Color, Style};

use crate::lang::Rgb;

/// Foreground color of a styled report field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Magenta,
    White,
    Green,
    Blue,
    Cyan,
    Yellow,
    Rgb(Rgb),
}

impl Paint {
    fn color(self) -> Color {
        match self {
            Paint::Magenta => Color::Magenta,
            Paint::White => Color::White,
            Paint::Green => Color::Green,
            Paint::Blue => Color::Blue,
            Paint::Cyan => Color::Cyan,
            Paint::Yellow => Color::Yellow,
            Paint::Rgb(rgb) => Color::Color256(rgb.to_ansi256()),
        }
    }
}

/// Render `value` in bold `paint`, or as its plain `Display` output when
/// `apply_color` is false.
///
/// Styling is forced either way, so the result never depends on whether the
/// current process is attached to a terminal.
pub fn paint<T: Display>(value: T, paint: Paint, apply_color: bool) -> String {
    Style::new()
        .fg(paint.color())
        .bold()
        .force_styling(apply_color)
        .apply_to(value)
        .to_string()
}
