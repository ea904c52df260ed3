//! Playing field extents
//!
//! The boundary is an axis-aligned rectangle in absolute coordinates. Edge
//! tests are inclusive: a point sitting exactly on an extent counts as
//! having reached it.

use glam::Vec2;
use serde::Serialize;

use crate::error::ConfigError;

/// The playable rectangle (immutable after creation)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Boundary {
    top: f32,
    left: f32,
    bottom: f32,
    right: f32,
}

impl Boundary {
    /// Create a boundary, rejecting inverted, empty or non-finite extents
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Result<Self, ConfigError> {
        let finite = [top, left, bottom, right].iter().all(|v| v.is_finite());
        if !finite || top >= bottom || left >= right {
            return Err(ConfigError::InvalidBoundary {
                top,
                left,
                bottom,
                right,
            });
        }
        Ok(Self {
            top,
            left,
            bottom,
            right,
        })
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.right
    }

    /// Horizontal span (right - left)
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Vertical span (bottom - top)
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn is_at_left_edge(&self, point: Vec2) -> bool {
        point.x <= self.left
    }

    #[inline]
    pub fn is_at_right_edge(&self, point: Vec2) -> bool {
        point.x >= self.right
    }

    #[inline]
    pub fn is_at_top_edge(&self, point: Vec2) -> bool {
        point.y <= self.top
    }

    #[inline]
    pub fn is_at_bottom_edge(&self, point: Vec2) -> bool {
        point.y >= self.bottom
    }

    /// Check if a point lies in the closed rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }
}
