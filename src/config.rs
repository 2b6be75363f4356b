//! Grid and unit configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::grid::{cells_needed, MAX_CELLS};
use crate::units::UnitScale;

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Shape of the spatial index, in simulation units (tiles).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub world_width: f32,
    pub world_height: f32,
    /// Typically the largest common query radius (vision or attack range).
    pub cell_size: f32,
    /// Entries preallocated per bucket.
    pub bucket_capacity: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { world_width: 50.0, world_height: 50.0, cell_size: 4.0, bucket_capacity: 8 }
    }
}

impl GridConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("world_width", self.world_width)?;
        positive("world_height", self.world_height)?;
        positive("cell_size", self.cell_size)?;
        let longest = self.world_width.max(self.world_height);
        if self.cell_size > longest {
            return Err(ConfigError::Invalid {
                field: "cell_size",
                reason: format!("{} exceeds the world extent {}", self.cell_size, longest),
            });
        }
        let needed = cells_needed(self.world_width, self.world_height, self.cell_size);
        if needed > MAX_CELLS as f64 {
            return Err(ConfigError::Invalid {
                field: "cell_size",
                reason: format!("{} needs {needed} cells, more than the {MAX_CELLS} limit", self.cell_size),
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: format!("must be finite and > 0, got {v}") })
    }
}

/// Top-level file layout: a `[grid]` table and an optional `[units]` table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub grid: GridConfig,
    pub units: UnitScale,
}

impl SimConfig {
    /// Parse and validate.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: SimConfig = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&contents)?;
        log::debug!("loaded grid config from {}: {:?}", path.display(), cfg.grid);
        Ok(cfg)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.grid.validate()?;
        positive("pixels_per_tile", self.units.pixels_per_tile)
    }
}
