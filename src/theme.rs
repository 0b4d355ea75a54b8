//! Application-wide theme system.
//!
//! Semantic color slots for every UI element, with dark and light built-ins.
//! The config's `[theme]` table can override individual slots with hex values.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Complete application theme defining all UI colors.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub name: String,

    // Window colors
    pub window_border: Color,
    pub window_border_active: Color,
    pub window_title: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    // Status line colors
    pub status_info: Color,
    pub status_success: Color,
    pub status_warning: Color,
    pub status_error: Color,

    // Dialog colors
    pub dialog_border: Color,
    pub dialog_background: Color,
    pub dialog_field_background: Color,

    // Game panels
    pub puzzle_letter: Color,
    pub puzzle_placeholder: Color,
    pub balance: Color,
    pub wedge_cash: Color,
    pub wedge_bankrupt: Color,
    pub wedge_lose_turn: Color,
    pub gallows_frame: Color,
    pub gallows_body: Color,
    pub log_timestamp: Color,
}

/// Optional per-slot hex overrides from the config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeOverrides {
    pub window_border: Option<String>,
    pub window_border_active: Option<String>,
    pub text_primary: Option<String>,
    pub text_disabled: Option<String>,
    pub status_error: Option<String>,
    pub puzzle_letter: Option<String>,
    pub balance: Option<String>,
    pub gallows_body: Option<String>,
}

impl AppTheme {
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            window_border: Color::Rgb(0x44, 0x44, 0x55),
            window_border_active: Color::Rgb(0xff, 0x55, 0x55),
            window_title: Color::Rgb(0xcc, 0xcc, 0xdd),
            text_primary: Color::Rgb(0xee, 0xee, 0xee),
            text_secondary: Color::Rgb(0xaa, 0xaa, 0xbb),
            text_disabled: Color::Rgb(0x55, 0x55, 0x5f),
            status_info: Color::Rgb(0x88, 0xaa, 0xff),
            status_success: Color::Rgb(0x55, 0xcc, 0x66),
            status_warning: Color::Rgb(0xdd, 0xaa, 0x33),
            status_error: Color::Rgb(0xee, 0x44, 0x44),
            dialog_border: Color::Rgb(0x88, 0x88, 0xaa),
            dialog_background: Color::Rgb(0x1a, 0x1a, 0x22),
            dialog_field_background: Color::Rgb(0x2a, 0x2a, 0x33),
            puzzle_letter: Color::Rgb(0xff, 0xd7, 0x5f),
            puzzle_placeholder: Color::Rgb(0x66, 0x66, 0x77),
            balance: Color::Rgb(0x55, 0xcc, 0x66),
            wedge_cash: Color::Rgb(0x55, 0xcc, 0x66),
            wedge_bankrupt: Color::Rgb(0xee, 0x44, 0x44),
            wedge_lose_turn: Color::Rgb(0xdd, 0xaa, 0x33),
            gallows_frame: Color::Rgb(0x99, 0x77, 0x44),
            gallows_body: Color::Rgb(0xdd, 0xdd, 0xee),
            log_timestamp: Color::Rgb(0x66, 0x66, 0x77),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            window_border: Color::Rgb(0x99, 0x99, 0xaa),
            window_border_active: Color::Rgb(0xcc, 0x22, 0x22),
            window_title: Color::Rgb(0x33, 0x33, 0x44),
            text_primary: Color::Rgb(0x22, 0x22, 0x22),
            text_secondary: Color::Rgb(0x55, 0x55, 0x66),
            text_disabled: Color::Rgb(0xaa, 0xaa, 0xb4),
            status_info: Color::Rgb(0x22, 0x44, 0xcc),
            status_success: Color::Rgb(0x11, 0x77, 0x22),
            status_warning: Color::Rgb(0xaa, 0x77, 0x00),
            status_error: Color::Rgb(0xbb, 0x11, 0x11),
            dialog_border: Color::Rgb(0x55, 0x55, 0x77),
            dialog_background: Color::Rgb(0xf2, 0xf2, 0xf6),
            dialog_field_background: Color::Rgb(0xe2, 0xe2, 0xea),
            puzzle_letter: Color::Rgb(0x99, 0x66, 0x00),
            puzzle_placeholder: Color::Rgb(0x99, 0x99, 0xa4),
            balance: Color::Rgb(0x11, 0x77, 0x22),
            wedge_cash: Color::Rgb(0x11, 0x77, 0x22),
            wedge_bankrupt: Color::Rgb(0xbb, 0x11, 0x11),
            wedge_lose_turn: Color::Rgb(0xaa, 0x77, 0x00),
            gallows_frame: Color::Rgb(0x77, 0x55, 0x22),
            gallows_body: Color::Rgb(0x22, 0x22, 0x33),
            log_timestamp: Color::Rgb(0x88, 0x88, 0x99),
        }
    }

    /// Resolve a theme by name, falling back to dark for anything unknown.
    pub fn by_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Apply config overrides on top of the built-in values. Unparseable hex
    /// strings leave the slot unchanged.
    pub fn with_overrides(mut self, overrides: &ThemeOverrides) -> Self {
        let apply = |slot: &mut Color, value: &Option<String>| {
            if let Some(color) = value.as_deref().and_then(parse_hex_color) {
                *slot = color;
            }
        };
        apply(&mut self.window_border, &overrides.window_border);
        apply(
            &mut self.window_border_active,
            &overrides.window_border_active,
        );
        apply(&mut self.text_primary, &overrides.text_primary);
        apply(&mut self.text_disabled, &overrides.text_disabled);
        apply(&mut self.status_error, &overrides.status_error);
        apply(&mut self.puzzle_letter, &overrides.puzzle_letter);
        apply(&mut self.balance, &overrides.balance);
        apply(&mut self.gallows_body, &overrides.gallows_body);
        self
    }
}

/// Parse a `#rrggbb` hex string to a ratatui Color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    if !hex.starts_with('#') || hex.len() != 7 {
        return None;
    }

    let r = u8::from_str_radix(&hex[1..3], 16).ok()?;
    let g = u8::from_str_radix(&hex[3..5], 16).ok()?;
    let b = u8::from_str_radix(&hex[5..7], 16).ok()?;

    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color("#0a0b0c"), Some(Color::Rgb(10, 11, 12)));
        assert_eq!(parse_hex_color("ff0000"), None);
        assert_eq!(parse_hex_color("#ff00"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
    }

    #[test]
    fn unknown_theme_falls_back_to_dark() {
        assert_eq!(AppTheme::by_name("solarized").name, "dark");
        assert_eq!(AppTheme::by_name("light").name, "light");
    }

    #[test]
    fn overrides_replace_only_valid_slots() {
        let overrides = ThemeOverrides {
            status_error: Some("#123456".to_string()),
            balance: Some("not-a-color".to_string()),
            ..Default::default()
        };
        let theme = AppTheme::dark().with_overrides(&overrides);
        assert_eq!(theme.status_error, Color::Rgb(0x12, 0x34, 0x56));
        assert_eq!(theme.balance, AppTheme::dark().balance);
    }
}
