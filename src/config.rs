//! Session configuration
//!
//! Everything is fixed at session start. Loaded from JSON; missing sections
//! fall back to the classic board.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::GameState;

/// Board extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundaryConfig {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            top: BOARD_TOP,
            left: BOARD_LEFT,
            bottom: BOARD_BOTTOM,
            right: BOARD_RIGHT,
        }
    }
}

/// Initial ball placement and velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BallConfig {
    pub x: f32,
    pub y: f32,
    pub diameter: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            x: BALL_X,
            y: BALL_Y,
            diameter: BALL_DIAMETER,
            dx: BALL_DX,
            dy: BALL_DY,
        }
    }
}

/// Initial paddle placement and step size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaddleConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            x: PADDLE_X,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub boundary: BoundaryConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
    /// Nominal tick interval in milliseconds
    pub tick_interval_ms: u64,
    /// Seed for the demo autopilot (None = fixed default)
    pub autopilot_seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            boundary: BoundaryConfig::default(),
            ball: BallConfig::default(),
            paddle: PaddleConfig::default(),
            tick_interval_ms: TICK_INTERVAL_MS,
            autopilot_seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every construction rule without keeping the built state
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_state().map(|_| ())
    }

    /// Check the timing, then build the initial simulation state
    pub fn build_state(&self) -> Result<GameState, ConfigError> {
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }
        GameState::new(self)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
