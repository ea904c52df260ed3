//! Brick Breaker - a minimal paddle-and-ball arcade simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (boundary, ball, paddle, game state)
//! - `config`: Session configuration and validation
//! - `session`: Single-owner session driver and tick cadence
//! - `present`: Presentation seam (renderers consume snapshots only)
//! - `input`: Key identifier translation

pub mod autopilot;
pub mod config;
pub mod error;
pub mod input;
pub mod present;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use session::Session;

/// Game configuration constants
///
/// Defaults reproduce the classic 500x500 board.
pub mod consts {
    /// Board extents
    pub const BOARD_TOP: f32 = 0.0;
    pub const BOARD_LEFT: f32 = 0.0;
    pub const BOARD_BOTTOM: f32 = 500.0;
    pub const BOARD_RIGHT: f32 = 500.0;

    /// Ball defaults
    pub const BALL_X: f32 = 100.0;
    pub const BALL_Y: f32 = 100.0;
    pub const BALL_DIAMETER: f32 = 20.0;
    pub const BALL_DX: f32 = 2.0;
    pub const BALL_DY: f32 = 3.0;

    /// Paddle defaults - sits on the bottom edge, inside the board
    pub const PADDLE_X: f32 = 10.0;
    pub const PADDLE_Y: f32 = 490.0;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Nominal tick interval (ms). Not wall-clock corrected.
    pub const TICK_INTERVAL_MS: u64 = 30;
}
