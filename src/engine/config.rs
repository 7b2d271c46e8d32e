// Configuration for the calculator UI
// Every field has a default so a partial or missing config file is fine

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::DentakuError;

/// Terminal colors as `#RRGGBB` strings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Background color (default #1A1B26 - Stormy Dark)
    pub background_color: String,

    /// Display and key label color (default #A9B1D6 - Light Blue)
    pub text_color: String,

    /// Pressed key highlight (default #FF9E64 - Orange)
    pub accent_color: String,

    /// Trace line and idle key borders (default #646E96 - Dimmed Blue)
    pub dimmed_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#1A1B26".to_string(),
            text_color: "#A9B1D6".to_string(),
            accent_color: "#FF9E64".to_string(),
            dimmed_color: "#646E96".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the formula trace under the keypad
    pub show_trace: bool,

    /// Heading above the display
    pub title: String,

    /// Capture the mouse so keypad buttons are clickable. Turning it off keeps the
    /// terminal's own text selection.
    pub mouse: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_trace: true,
            title: "電卓".to_string(),
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub display: DisplayConfig,
}

impl Config {
    /// `$XDG_CONFIG_HOME/dentaku/config.toml` or the platform equivalent
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dentaku").join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self, DentakuError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(path, &content)
    }

    /// Load the default config file, falling back to defaults when there is none.
    pub fn load_default() -> Result<Self, DentakuError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn parse(path: &Path, content: &str) -> Result<Self, DentakuError> {
        let config: Config =
            toml::from_str(content).map_err(|e| DentakuError::config(path, e.to_string()))?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.display.show_trace);
        assert_eq!(config.display.title, "電卓");
        assert!(config.display.mouse);
        assert_eq!(config.theme.background_color, "#1A1B26");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let content = "[display]\nshow_trace = false\n";
        let config = Config::parse(Path::new("inline.toml"), content).unwrap();
        assert!(!config.display.show_trace);
        assert_eq!(config.display.title, "電卓");
        assert_eq!(config.theme, ThemeConfig::default());
    }

    #[test]
    fn test_mouse_can_be_disabled() {
        let content = "[display]\nmouse = false\n";
        let config = Config::parse(Path::new("inline.toml"), content).unwrap();
        assert!(!config.display.mouse);
        assert!(config.display.show_trace);
    }

    #[test]
    fn test_theme_override() {
        let content = "[theme]\naccent_color = \"#00FF00\"\n";
        let config = Config::parse(Path::new("inline.toml"), content).unwrap();
        assert_eq!(config.theme.accent_color, "#00FF00");
        assert_eq!(config.theme.text_color, "#A9B1D6");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = Config::parse(Path::new("broken.toml"), "[display\n");
        match result {
            Err(DentakuError::Config { path, .. }) => assert_eq!(path, Path::new("broken.toml")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let test_file = "test_dentaku_config.toml";
        let mut file = File::create(test_file).unwrap();
        file.write_all(b"[display]\ntitle = \"Calc\"\n").unwrap();

        let config = Config::load(Path::new(test_file)).unwrap();
        assert_eq!(config.display.title, "Calc");

        fs::remove_file(test_file).unwrap();
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Config::load(Path::new("nonexistent_dentaku_12345.toml"));
        assert!(matches!(result, Err(DentakuError::Io(_))));
    }
}
