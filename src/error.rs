//! Session construction errors
//!
//! Ticking itself cannot fail; everything here is raised before a session
//! starts.

use thiserror::Error;

/// Errors raised while building a session from configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Boundary extents are inverted, empty or not finite.
    #[error("invalid boundary: top={top}, left={left}, bottom={bottom}, right={right}")]
    InvalidBoundary {
        top: f32,
        left: f32,
        bottom: f32,
        right: f32,
    },

    /// A size or speed that must be strictly positive was not.
    #[error("{field} must be positive and finite, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    /// A velocity component is not a finite number.
    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    /// The ball's bounding box does not start inside the boundary.
    #[error("ball at ({x}, {y}) with diameter {diameter} is outside the boundary")]
    BallOutsideBoundary { x: f32, y: f32, diameter: f32 },

    /// The ball cannot fit between opposite edges.
    #[error("ball diameter {diameter} does not fit a {width}x{height} boundary")]
    BallTooLarge {
        diameter: f32,
        width: f32,
        height: f32,
    },

    /// The paddle does not start inside the boundary.
    #[error("paddle at ({x}, {y}) of size {width}x{height} is outside the boundary")]
    PaddleOutsideBoundary {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },

    /// Tick interval of zero would spin the driver.
    #[error("tick interval must be at least 1 ms")]
    InvalidTickInterval,

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}
