//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick = one fixed step, no wall-clock input
//! - Entities mutate only through their own operations
//! - No rendering or platform dependencies

pub mod ball;
pub mod boundary;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallSnapshot, Reflection};
pub use boundary::Boundary;
pub use paddle::{Direction, Paddle, PaddleSnapshot};
pub use state::{BALL_ID, GameEvent, GamePhase, GameState, PADDLE_ID, SceneSnapshot, is_game_over};
pub use tick::{steer, tick};
