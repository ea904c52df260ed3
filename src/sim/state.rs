//! Game state and the game-over predicate
//!
//! One boundary, one ball, one paddle. Entities are built once from a
//! validated config and then only mutated through `tick`/`steer`.

use glam::Vec2;
use serde::Serialize;

use super::ball::{Ball, BallSnapshot};
use super::boundary::Boundary;
use super::paddle::{Direction, Paddle, PaddleSnapshot};
use crate::config::GameConfig;
use crate::error::ConfigError;

/// Entity ids handed to presenters
pub const BALL_ID: u32 = 1;
pub const PADDLE_ID: u32 = 2;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Ticks and paddle input are accepted
    Running,
    /// Ball got past the paddle (terminal)
    Over,
}

/// Things that happened during a tick or input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball advanced to `pos`
    BallMoved { pos: Vec2 },
    /// Ball touched one or more edges this tick
    WallBounce { horizontal: bool, vertical: bool },
    /// Paddle stepped in `direction`
    PaddleMoved { direction: Direction, x: f32 },
    /// Terminal transition; emitted exactly once per session
    GameOver { tick: u64 },
}

/// Read-only copy of everything a presenter may draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub boundary: Boundary,
    pub ball: BallSnapshot,
    pub paddle: PaddleSnapshot,
    pub tick: u64,
    pub phase: GamePhase,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    boundary: Boundary,
    pub(super) ball: Ball,
    pub(super) paddle: Paddle,
    /// Simulation tick counter
    pub(super) time_ticks: u64,
    pub(super) phase: GamePhase,
}

impl GameState {
    /// Build and validate a state from configuration
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let b = &config.boundary;
        let boundary = Boundary::new(b.top, b.left, b.bottom, b.right)?;

        let c = &config.ball;
        let ball = Ball::new(BALL_ID, Vec2::new(c.x, c.y), c.diameter, Vec2::new(c.dx, c.dy))?;

        let p = &config.paddle;
        let paddle = Paddle::new(PADDLE_ID, Vec2::new(p.x, p.y), p.width, p.height, p.speed)?;

        Self::from_parts(boundary, ball, paddle)
    }

    /// Assemble a state from already-built entities, checking placement
    pub fn from_parts(boundary: Boundary, ball: Ball, paddle: Paddle) -> Result<Self, ConfigError> {
        let d = ball.diameter();
        if d >= boundary.width() || d >= boundary.height() {
            return Err(ConfigError::BallTooLarge {
                diameter: d,
                width: boundary.width(),
                height: boundary.height(),
            });
        }
        if !boundary.contains(ball.pos()) || !boundary.contains(ball.trailing_corner()) {
            return Err(ConfigError::BallOutsideBoundary {
                x: ball.pos().x,
                y: ball.pos().y,
                diameter: d,
            });
        }

        // The paddle box must lie inside the field so the bottom edge is
        // never reachable without crossing the paddle plane.
        if !paddle.fits(&boundary) {
            return Err(ConfigError::PaddleOutsideBoundary {
                x: paddle.pos().x,
                y: paddle.pos().y,
                width: paddle.width(),
                height: paddle.height(),
            });
        }

        Ok(Self {
            boundary,
            ball,
            paddle,
            time_ticks: 0,
            phase: GamePhase::Running,
        })
    }

    #[inline]
    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    #[inline]
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn ball(&self) -> BallSnapshot {
        self.ball.snapshot()
    }

    pub fn paddle(&self) -> PaddleSnapshot {
        self.paddle.snapshot()
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            boundary: self.boundary,
            ball: self.ball.snapshot(),
            paddle: self.paddle.snapshot(),
            tick: self.time_ticks,
            phase: self.phase,
        }
    }

    /// Evaluate the game-over predicate against the current positions
    pub fn is_game_over(&self) -> bool {
        is_game_over(&self.ball.snapshot(), &self.paddle.snapshot())
    }
}

/// Ball has reached the paddle plane without horizontal overlap
///
/// Overlap only looks at the ball's leading x, strictly inside the paddle's
/// range.
pub fn is_game_over(ball: &BallSnapshot, paddle: &PaddleSnapshot) -> bool {
    let overlap = ball.pos.x > paddle.pos.x && ball.pos.x < paddle.right();
    ball.pos.y + ball.diameter >= paddle.pos.y && !overlap
}
