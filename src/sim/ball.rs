//! Ball motion and edge reflection
//!
//! Discrete-time, post-hoc reflection: the ball is advanced by its full
//! velocity first, then its bounding box corners are tested against the
//! boundary and the velocity is corrected for the *next* tick. The position
//! is never pulled back inside, so the ball may overshoot an edge by up to
//! one tick of travel.

use glam::Vec2;
use serde::Serialize;

use super::boundary::Boundary;
use crate::error::ConfigError;

/// Which velocity components flipped during a move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reflection {
    /// Left or right edge contact (dx reversed)
    pub horizontal: bool,
    /// Top or bottom edge contact (dy reversed)
    pub vertical: bool,
}

impl Reflection {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// Read-only copy of a ball's observable state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallSnapshot {
    pub id: u32,
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub diameter: f32,
    pub vel: Vec2,
}

/// The ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    id: u32,
    /// Top-left corner of the square bounding box
    pos: Vec2,
    diameter: f32,
    vel: Vec2,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, diameter: f32, vel: Vec2) -> Result<Self, ConfigError> {
        if !(diameter.is_finite() && diameter > 0.0) {
            return Err(ConfigError::NonPositive {
                field: "ball.diameter",
                value: diameter,
            });
        }
        for (field, value) in [("ball.dx", vel.x), ("ball.dy", vel.y)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if !(pos.x.is_finite() && pos.y.is_finite()) {
            return Err(ConfigError::BallOutsideBoundary {
                x: pos.x,
                y: pos.y,
                diameter,
            });
        }
        Ok(Self {
            id,
            pos,
            diameter,
            vel,
        })
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Bottom-right corner of the bounding box
    #[inline]
    pub fn trailing_corner(&self) -> Vec2 {
        self.pos + Vec2::splat(self.diameter)
    }

    pub fn snapshot(&self) -> BallSnapshot {
        BallSnapshot {
            id: self.id,
            pos: self.pos,
            diameter: self.diameter,
            vel: self.vel,
        }
    }

    /// Advance one tick and reflect off any edge the ball has reached
    ///
    /// The move happens first; the edge tests then run on the new position
    /// and negate the matching velocity component. The position is not
    /// corrected, so the ball may sit past an edge by up to one step. A
    /// ball still touching an edge on the next tick is negated again.
    pub fn move_within(&mut self, boundary: &Boundary) -> Reflection {
        self.pos += self.vel;

        let leading = self.pos;
        let trailing = self.trailing_corner();
        let mut reflection = Reflection::default();

        if boundary.is_at_left_edge(leading) || boundary.is_at_right_edge(trailing) {
            self.vel.x = -self.vel.x;
            reflection.horizontal = true;
        }

        if boundary.is_at_top_edge(leading) || boundary.is_at_bottom_edge(trailing) {
            self.vel.y = -self.vel.y;
            reflection.vertical = true;
        }

        reflection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn board() -> Boundary {
        Boundary::new(0.0, 0.0, 500.0, 500.0).unwrap()
    }

    fn ball(x: f32, y: f32, dx: f32, dy: f32) -> Ball {
        Ball::new(1, Vec2::new(x, y), 20.0, Vec2::new(dx, dy)).unwrap()
    }

    #[test]
    fn test_free_flight_moves_by_velocity() {
        let mut b = ball(100.0, 100.0, 2.0, 3.0);
        let r = b.move_within(&board());
        assert!(!r.any());
        assert_eq!(b.pos(), Vec2::new(102.0, 103.0));
        assert_eq!(b.vel(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_right_edge_reflection_keeps_overshoot() {
        let mut b = ball(480.0, 100.0, 2.0, 0.0);
        let r = b.move_within(&board());
        assert!(r.horizontal);
        assert!(!r.vertical);
        // Position is not corrected for this tick
        assert_eq!(b.pos().x, 482.0);
        assert_eq!(b.vel().x, -2.0);

        // Back flush with the edge: the right test trips again
        let r = b.move_within(&board());
        assert!(r.horizontal);
        assert_eq!(b.pos().x, 480.0);
        assert_eq!(b.vel().x, 2.0);
    }

    #[test]
    fn test_ball_flush_with_left_edge_flips_every_tick() {
        let mut b = ball(0.0, 100.0, -2.0, 0.0);
        for expected in [-2.0, 0.0, -2.0, 0.0] {
            let r = b.move_within(&board());
            assert!(r.horizontal);
            assert_eq!(b.pos().x, expected);
        }
        assert_eq!(b.vel().x, -2.0);
    }

    #[test]
    fn test_left_and_top_edges() {
        let mut b = ball(1.0, 1.0, -2.0, -3.0);
        let r = b.move_within(&board());
        assert!(r.horizontal && r.vertical);
        assert_eq!(b.pos(), Vec2::new(-1.0, -2.0));
        assert_eq!(b.vel(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_corner_contact_flips_both() {
        let mut b = ball(479.0, 479.0, 2.0, 3.0);
        let r = b.move_within(&board());
        assert!(r.horizontal);
        assert!(r.vertical);
        assert_eq!(b.vel(), Vec2::new(-2.0, -3.0));
    }

    #[test]
    fn test_bottom_edge_reflects() {
        let mut b = ball(200.0, 478.0, 0.0, 3.0);
        let r = b.move_within(&board());
        assert!(r.vertical);
        assert_eq!(b.pos().y, 481.0);
        assert_eq!(b.vel().y, -3.0);
    }

    #[test]
    fn test_diameter_never_changes() {
        let mut b = ball(10.0, 10.0, -7.0, 5.0);
        for _ in 0..500 {
            b.move_within(&board());
            assert_eq!(b.diameter(), 20.0);
        }
    }

    #[test]
    fn test_rejects_bad_diameter() {
        assert!(Ball::new(1, Vec2::ZERO, 0.0, Vec2::ONE).is_err());
        assert!(Ball::new(1, Vec2::ZERO, -5.0, Vec2::ONE).is_err());
        assert!(Ball::new(1, Vec2::ZERO, 5.0, Vec2::new(f32::INFINITY, 0.0)).is_err());
    }

    proptest! {
        #[test]
        fn prop_ball_stays_within_one_tick_of_boundary(
            x in 0.0f32..480.0,
            y in 0.0f32..480.0,
            dx in -15.0f32..15.0,
            dy in -15.0f32..15.0,
        ) {
            let boundary = board();
            let mut b = ball(x, y, dx, dy);
            let speed = b.vel();
            for _ in 0..2_000 {
                b.move_within(&boundary);
                prop_assert!(b.pos().x >= boundary.left() - dx.abs() - 1e-2);
                prop_assert!(b.pos().y >= boundary.top() - dy.abs() - 1e-2);
                prop_assert!(b.trailing_corner().x <= boundary.right() + dx.abs() + 1e-2);
                prop_assert!(b.trailing_corner().y <= boundary.bottom() + dy.abs() + 1e-2);
                prop_assert_eq!(b.vel().abs(), speed.abs());
            }
        }
    }
}
