//! Configuration loader plus strongly typed settings structures.
//!
//! Deserializes the TOML config (game tunables, UI options, theme overrides),
//! resolves the per-user data directory, and writes the embedded default file
//! on first run so there is always something to edit.

use crate::game::Wheel;
use crate::theme::{AppTheme, ThemeOverrides};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embedded at compile time; written out on first run.
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeOverrides,
    #[serde(default = "default_theme_name")]
    pub active_theme: String,
}

/// Game tunables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Price of a vowel purchase.
    #[serde(default = "default_vowel_cost")]
    pub vowel_cost: i64,
    /// Cash wedges on the wheel.
    #[serde(default = "default_cash_wedges")]
    pub cash_wedges: Vec<i64>,
    #[serde(default = "default_one")]
    pub bankrupt_wedges: usize,
    #[serde(default = "default_one")]
    pub lose_turn_wedges: usize,
}

/// Presentation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Widget border style: single, double, rounded, thick
    #[serde(default = "default_border_style")]
    pub border_style: String,
    /// Event poll timeout - lower = snappier, higher CPU
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64,
    /// Placeholder drawn for unrevealed puzzle letters
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_true")]
    pub show_timestamps: bool,
    /// Number of entries kept in the game log
    #[serde(default = "default_log_buffer")]
    pub log_buffer: usize,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_vowel_cost() -> i64 {
    250
}

fn default_cash_wedges() -> Vec<i64> {
    vec![100, 250, 500, 750]
}

fn default_one() -> usize {
    1
}

fn default_border_style() -> String {
    "rounded".to_string()
}

fn default_poll_timeout_ms() -> u64 {
    33
}

fn default_placeholder() -> String {
    "-".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_buffer() -> usize {
    200
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vowel_cost: default_vowel_cost(),
            cash_wedges: default_cash_wedges(),
            bankrupt_wedges: default_one(),
            lose_turn_wedges: default_one(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            border_style: default_border_style(),
            poll_timeout_ms: default_poll_timeout_ms(),
            placeholder: default_placeholder(),
            show_timestamps: default_true(),
            log_buffer: default_log_buffer(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        // Parse from the embedded default config.toml
        toml::from_str(DEFAULT_CONFIG).unwrap_or_else(|e| {
            eprintln!("Failed to parse embedded config.toml: {}", e);
            Self {
                game: GameConfig::default(),
                ui: UiConfig::default(),
                theme: ThemeOverrides::default(),
                active_theme: default_theme_name(),
            }
        })
    }
}

impl Config {
    /// Resolve the data directory: `HANGWHEEL_DIR` if set, `~/.hangwheel`
    /// otherwise.
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("HANGWHEEL_DIR") {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".hangwheel"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Load the user config, writing the embedded default file on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, DEFAULT_CONFIG)
                .with_context(|| format!("Failed to write default config to {}", path.display()))?;
            tracing::info!("Wrote default config to {}", path.display());
        }
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// The placeholder as a single char; anything unusable collapses to `-`.
    pub fn placeholder_char(&self) -> char {
        let mut chars = self.ui.placeholder.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => ch,
            _ => '-',
        }
    }

    /// Build the wheel described by the game section.
    pub fn wheel(&self) -> Wheel {
        Wheel::from_parts(
            &self.game.cash_wedges,
            self.game.bankrupt_wedges,
            self.game.lose_turn_wedges,
        )
    }

    /// Resolve the active theme with overrides applied.
    pub fn theme(&self) -> AppTheme {
        AppTheme::by_name(&self.active_theme).with_overrides(&self.theme)
    }

    /// Sanity-check the loaded values. Returns one message per problem.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.game.vowel_cost < 0 {
            problems.push(format!(
                "game.vowel_cost must not be negative (got {})",
                self.game.vowel_cost
            ));
        }
        if self.game.cash_wedges.iter().any(|amount| *amount <= 0) {
            problems.push("game.cash_wedges must all be positive".to_string());
        }
        if self.game.cash_wedges.is_empty() {
            problems.push("game.cash_wedges must contain at least one value".to_string());
        }
        if self.ui.placeholder.chars().count() != 1 {
            problems.push(format!(
                "ui.placeholder must be a single character (got {:?})",
                self.ui.placeholder
            ));
        }
        if self.ui.poll_timeout_ms == 0 {
            problems.push("ui.poll_timeout_ms must be greater than zero".to_string());
        }
        if !matches!(
            self.ui.border_style.as_str(),
            "single" | "double" | "rounded" | "thick"
        ) {
            problems.push(format!(
                "ui.border_style must be one of single/double/rounded/thick (got {:?})",
                self.ui.border_style
            ));
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_parses_cleanly() {
        let config = Config::default();
        assert_eq!(config.game.vowel_cost, 250);
        assert_eq!(config.game.cash_wedges, vec![100, 250, 500, 750]);
        assert_eq!(config.active_theme, "dark");
        assert!(config.validate().is_empty());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.game.vowel_cost, 250);
        assert_eq!(config.ui.placeholder, "-");
        assert!(config.ui.show_timestamps);
    }

    #[test]
    fn validate_flags_bad_values() {
        let mut config = Config::default();
        config.game.vowel_cost = -5;
        config.ui.placeholder = "--".to_string();
        config.ui.border_style = "dotted".to_string();
        let problems = config.validate();
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn placeholder_char_collapses_bad_input() {
        let mut config = Config::default();
        config.ui.placeholder = "_".to_string();
        assert_eq!(config.placeholder_char(), '_');
        config.ui.placeholder = String::new();
        assert_eq!(config.placeholder_char(), '-');
    }

    #[test]
    fn wheel_composition_follows_game_section() {
        let config = Config::default();
        assert_eq!(config.wheel().wedges().len(), 6);
    }
}
