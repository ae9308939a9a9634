//! Terminal colors derived from the accent preference.

use crate::theme::AccentColor;
use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub accent: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub background: Color,
    pub display_background: Color,
    pub key_digit: Color,
    pub key_function: Color,
    pub error: Color,
}

impl Palette {
    pub fn new(accent: AccentColor) -> Self {
        let (r, g, b) = accent.rgb();
        Self {
            accent: Color::Rgb(r, g, b),
            text_primary: Color::Rgb(0xf5, 0xf5, 0xf5),
            text_secondary: Color::Rgb(0x9c, 0xa3, 0xaf),
            background: Color::Rgb(0x1c, 0x1c, 0x1e),
            display_background: Color::Rgb(0x2c, 0x2c, 0x2e),
            key_digit: Color::Rgb(0x3a, 0x3a, 0x3c),
            key_function: Color::Rgb(0x63, 0x63, 0x66),
            error: Color::Rgb(0xef, 0x6b, 0x4a),
        }
    }

    pub fn base(&self) -> Style {
        Style::new().fg(self.text_primary).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::new().fg(self.text_secondary)
    }

    pub fn highlight(&self) -> Style {
        Style::new()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::new().fg(self.accent)
        } else {
            self.muted()
        }
    }
}
