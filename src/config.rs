use std::fs;
use std::path::Path;
use std::time::Duration;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::game_core::GridSize;
use crate::rng::SessionRng;

/// Host settings. The grid is derived from the canvas size in pixels and the
/// tile size; the game itself only ever sees the resulting [`GridSize`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub tile_size: u32,
    pub tick_interval_ms: u64,
    /// Fixed food seed; `None` draws a fresh one per run.
    pub seed: Option<u64>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            tile_size: 25,
            tick_interval_ms: 200,
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        self.level_filter()?;
        self.grid().map(|_| ())
    }

    pub fn grid(&self) -> Result<GridSize, ConfigError> {
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }
        let too_large = |_| ConfigError::GridTooLarge {
            width: self.canvas_width,
            height: self.canvas_height,
            tile_size: self.tile_size,
        };
        let columns = i32::try_from(self.canvas_width / self.tile_size).map_err(too_large)?;
        let rows = i32::try_from(self.canvas_height / self.tile_size).map_err(too_large)?;
        GridSize::new(columns, rows)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    pub fn rng(&self) -> SessionRng {
        match self.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_entropy(),
        }
    }
}
