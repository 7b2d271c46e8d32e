use ratatui::style::Color;
use std::str::FromStr;

use crate::engine::config::ThemeConfig;

/// Terminal colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::midnight()
    }
}

impl Theme {
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(26, 27, 38), // #1A1B26 Stormy Dark
            text: Color::Rgb(169, 177, 214),    // #A9B1D6 Light Blue
            accent: Color::Rgb(255, 158, 100),  // #FF9E64 Orange
            dimmed: Color::Rgb(100, 110, 150),  // #646E96 Dimmed Blue
        }
    }

    /// Build a theme from config; unparsable colors keep the midnight value
    pub fn from_config(config: &ThemeConfig) -> Self {
        let fallback = Self::midnight();
        Self {
            background: parse_color(&config.background_color, fallback.background),
            text: parse_color(&config.text_color, fallback.text),
            accent: parse_color(&config.accent_color, fallback.accent),
            dimmed: parse_color(&config.dimmed_color, fallback.dimmed),
        }
    }
}

fn parse_color(value: &str, fallback: Color) -> Color {
    Color::from_str(value).unwrap_or_else(|_| {
        tracing::warn!(value, "invalid theme color, using default");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_midnight() {
        assert_eq!(Theme::from_config(&ThemeConfig::default()), Theme::midnight());
    }

    #[test]
    fn test_custom_color() {
        let config = ThemeConfig {
            accent_color: "#00FF00".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&config).accent, Color::Rgb(0, 255, 0));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let config = ThemeConfig {
            text_color: "not-a-color".to_string(),
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&config).text, Theme::midnight().text);
    }
}
