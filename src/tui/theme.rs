use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    /// Header bar and focused borders
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    /// Done marker and done titles
    pub green: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x1B, 0x1B, 0x1F),
            text: Color::Rgb(0xC4, 0xC4, 0xCC),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x82, 0x57, 0xE5),
            dim: Color::Rgb(0x66, 0x66, 0x6E),
            red: Color::Rgb(0xE8, 0x3F, 0x5B),
            green: Color::Rgb(0x1D, 0xB8, 0x63),
            selection_bg: Color::Rgb(0x2E, 0x27, 0x45),
        }
    }
}

/// Parse a hex color string like "#1DB863" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults.
    /// Unknown slots and malformed colors are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "green" => theme.green = color,
                "selection_bg" => theme.selection_bg = color,
                _ => {}
            }
        }

        theme
    }

    /// Title color for a task row
    pub fn title_color(&self, done: bool) -> Color {
        if done { self.green } else { self.text }
    }
}
