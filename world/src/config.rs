//! Session configuration loaded from TOML.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Parameters a simulation session starts from.
///
/// Missing keys fall back to [`SimulatorConfig::default`]; unknown keys are
/// rejected.
///
/// ```toml
/// grid_width = 8
/// grid_height = 8
/// battery_level = 100
/// expandable_grid = true
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulatorConfig {
    /// Initial number of grid columns.
    pub grid_width: u32,
    /// Initial number of grid rows.
    pub grid_height: u32,
    /// Initial battery level; clamped into `0..=100` when the world is built.
    pub battery_level: i32,
    /// Whether moves past the north or east edge grow the grid.
    pub expandable_grid: bool,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            grid_width: 5,
            grid_height: 5,
            battery_level: 100,
            expandable_grid: false,
        }
    }
}

impl SimulatorConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).context("failed to parse simulator config toml contents")?;
        if config.grid_width == 0 || config.grid_height == 0 {
            bail!(
                "grid dimensions must be positive; got {}x{}",
                config.grid_width,
                config.grid_height
            );
        }
        Ok(config)
    }

    /// Reads, parses, and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read simulator config at {}", path.display()))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("invalid simulator config at {}", path.display()))
    }
}
