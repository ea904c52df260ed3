//! The player's paddle
//!
//! Horizontal motion only. Each move command is guarded up front: a step
//! that would push the paddle past the left or right extent is rejected
//! outright rather than applied and clipped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::boundary::Boundary;
use crate::error::ConfigError;

/// Horizontal move command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    /// Unmapped input; moving in this direction is a no-op
    #[default]
    None,
}

/// Read-only copy of the paddle's observable state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaddleSnapshot {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl PaddleSnapshot {
    /// Right end of the paddle's horizontal range
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }
}

/// The paddle entity
#[derive(Debug, Clone)]
pub struct Paddle {
    id: u32,
    /// Top-left corner; `y` never changes after construction
    pos: Vec2,
    width: f32,
    height: f32,
    /// Distance covered by one move command
    speed: f32,
}

impl Paddle {
    pub fn new(id: u32, pos: Vec2, width: f32, height: f32, speed: f32) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("paddle.width", width),
            ("paddle.height", height),
            ("paddle.speed", speed),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return Err(ConfigError::PaddleOutsideBoundary {
                x: pos.x,
                y: pos.y,
                width,
                height,
            });
        }
        Ok(Self {
            id,
            pos,
            width,
            height,
            speed,
        })
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn snapshot(&self) -> PaddleSnapshot {
        PaddleSnapshot {
            id: self.id,
            pos: self.pos,
            width: self.width,
            height: self.height,
            speed: self.speed,
        }
    }

    /// Whether the whole paddle box sits inside the boundary
    pub fn fits(&self, boundary: &Boundary) -> bool {
        self.pos.x >= boundary.left()
            && self.pos.x + self.width <= boundary.right()
            && self.pos.y >= boundary.top()
            && self.pos.y + self.height <= boundary.bottom()
    }

    /// Step once in `direction`; returns true if the paddle moved
    pub fn move_toward(&mut self, direction: Direction, boundary: &Boundary) -> bool {
        let next_x = match direction {
            Direction::Left => self.pos.x - self.speed,
            Direction::Right => self.pos.x + self.speed,
            Direction::None => return false,
        };
        if next_x < boundary.left() || next_x + self.width > boundary.right() {
            return false;
        }
        self.pos.x = next_x;
        true
    }
}
