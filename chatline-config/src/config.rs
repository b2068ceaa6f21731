//! Chat-line configuration management.
//!
//! Covers:
//! - The `Config` struct and its defaults
//! - `load` / `load_from` / `save_to` (YAML file I/O with atomic write)
//! - Semantic validation of loaded values

use crate::error::ConfigError;
use crate::types::{GlyphOverride, MissingGlyph};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Geometry of the chat line and the glyph width model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Pixel budget for one side of a centered line
    #[serde(default = "crate::defaults::half_line_width")]
    pub half_line_width: u32,

    /// Width of every character rendered with strikethrough
    #[serde(default = "crate::defaults::strikethrough_width")]
    pub strikethrough_width: u16,

    /// Pixels between two glyphs, added to the padding width when centering
    #[serde(default = "crate::defaults::glyph_spacing")]
    pub glyph_spacing: u16,

    /// Width reported for characters missing from the glyph table
    #[serde(default = "crate::defaults::missing_glyph")]
    pub missing_glyph: MissingGlyph,

    /// Padding character used when none is given explicitly
    #[serde(default = "crate::defaults::padding")]
    pub padding: char,

    /// Per-character width overrides applied on top of the built-in table
    #[serde(default = "crate::defaults::glyph_overrides")]
    pub glyph_overrides: Vec<GlyphOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            half_line_width: crate::defaults::half_line_width(),
            strikethrough_width: crate::defaults::strikethrough_width(),
            glyph_spacing: crate::defaults::glyph_spacing(),
            missing_glyph: crate::defaults::missing_glyph(),
            padding: crate::defaults::padding(),
            glyph_overrides: crate::defaults::glyph_overrides(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the half-line width
    pub fn with_half_line_width(mut self, width: u32) -> Self {
        self.half_line_width = width;
        self
    }

    /// Set the strikethrough width
    pub fn with_strikethrough_width(mut self, width: u16) -> Self {
        self.strikethrough_width = width;
        self
    }

    /// Set the missing-glyph policy
    pub fn with_missing_glyph(mut self, policy: MissingGlyph) -> Self {
        self.missing_glyph = policy;
        self
    }

    /// Add a glyph override
    pub fn with_glyph_override(mut self, glyph: GlyphOverride) -> Self {
        self.glyph_overrides.push(glyph);
        self
    }

    /// Default config directory (`~/.config/chatline` on Linux).
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chatline")
    }

    /// Default config file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load configuration from the default path, or defaults if the file is absent.
    ///
    /// Unlike `load_from`, a missing file is not an error and nothing is written.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("Config file not found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        log::debug!(
            "Loaded config: half_line_width={} strikethrough_width={} overrides={}",
            config.half_line_width,
            config.strikethrough_width,
            config.glyph_overrides.len()
        );
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not a mapping.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    /// Check field values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.half_line_width == 0 {
            return Err(ConfigError::Validation(
                "half_line_width must be greater than zero".to_string(),
            ));
        }
        if self.padding.is_control() {
            return Err(ConfigError::Validation(format!(
                "padding must be a printable character, got {:?}",
                self.padding
            )));
        }
        for glyph in &self.glyph_overrides {
            if glyph.character.is_control() {
                return Err(ConfigError::Validation(format!(
                    "glyph override for control character {:?} is not allowed",
                    glyph.character
                )));
            }
        }
        Ok(())
    }
}
