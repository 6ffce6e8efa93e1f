//! Runtime configuration.
//!
//! Every field has a default, so an absent or partial JSON file is fine.
//! The file is named by the `LIFE_CONFIG` environment variable.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::Algorithm;

pub const CONFIG_ENV: &str = "LIFE_CONFIG";
pub const MAX_PALETTE: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How many cells span the surface width
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Density {
    pub cells_across: u32,
    pub cells_across_wide: u32,
    /// Surfaces at least this many pixels wide use `cells_across_wide`
    pub wide_threshold_px: u32,
}

impl Default for Density {
    fn default() -> Self {
        Self {
            cells_across: 80,
            cells_across_wide: 120,
            wide_threshold_px: 1200,
        }
    }
}

impl Density {
    pub fn cells_across_for(&self, surface_width: u32) -> u32 {
        if surface_width >= self.wide_threshold_px {
            self.cells_across_wide
        } else {
            self.cells_across
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmChoice {
    Serial,
    #[default]
    Parallel,
}

impl From<AlgorithmChoice> for Algorithm {
    fn from(choice: AlgorithmChoice) -> Self {
        match choice {
            AlgorithmChoice::Serial => Algorithm::Serial,
            AlgorithmChoice::Parallel => Algorithm::Parallel,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Chance that a cell starts alive under the `random` seed
    pub live_probability: f64,
    /// Keep the overlapping top-left cells when the surface is resized
    pub preserve_on_resize: bool,
    /// `#RRGGBB` colors; a live cell in state k is drawn with entry k-1
    pub palette: Vec<String>,
    pub density: Density,
    pub algorithm: AlgorithmChoice,
    /// Fixed RNG seed for reproducible runs
    pub seed: Option<u64>,
    pub initial_pattern: String,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            live_probability: 0.15,
            preserve_on_resize: true,
            palette: ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            density: Density::default(),
            algorithm: AlgorithmChoice::default(),
            seed: None,
            initial_pattern: "random".to_string(),
        }
    }
}

impl SimConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Load from `LIFE_CONFIG` if set. Any failure falls back to defaults
    /// with a warning; the simulation never refuses to start over config.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {path}");
                config
            }
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(ConfigError::Invalid(format!(
                "live_probability {} outside [0, 1]",
                self.live_probability
            )));
        }
        if self.palette.is_empty() || self.palette.len() > MAX_PALETTE {
            return Err(ConfigError::Invalid(format!(
                "palette needs 1..={MAX_PALETTE} colors, got {}",
                self.palette.len()
            )));
        }
        if let Some(bad) = self.palette.iter().find(|c| parse_hex_color(c).is_none()) {
            return Err(ConfigError::Invalid(format!("bad color {bad:?}")));
        }
        if self.density.cells_across == 0 || self.density.cells_across_wide == 0 {
            return Err(ConfigError::Invalid("density must be positive".into()));
        }
        Ok(())
    }

    pub fn palette_size(&self) -> u8 {
        self.palette.len().clamp(1, MAX_PALETTE) as u8
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into RGB bytes
pub fn parse_hex_color(text: &str) -> Option<[u8; 3]> {
    let hex = text.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}
