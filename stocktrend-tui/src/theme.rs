//! Theme tokens for the stock trend dashboard.
//!
//! # Color Palette
//! - **Accent**: electric cyan (focus, highlights)
//! - **Negative**: hot pink (errors)
//! - **Warning**: neon orange (alerts, input problems)
//! - **Neutral**: cool purple (secondary info)
//! - **Muted**: steel blue (hints, disabled text)
//!
//! Chart line colors are not themed; they come from the render model as hex
//! strings and go through [`hex`].

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

pub fn text_secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

/// Parse a `#rrggbb` color, falling back to plain text color.
pub fn hex(code: &str) -> Color {
    code.parse::<Color>().unwrap_or(TEXT)
}
