//! Demo autopilot
//!
//! Plays the paddle for headless runs. It follows the ball's centre but
//! now and then zones out for a while, so a demo always ends eventually.
//! Seeded, so a given seed replays the same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{Direction, SceneSnapshot};

/// Seed used when the config doesn't name one
pub const DEFAULT_SEED: u64 = 0x0b5e_55ed;

/// Chance per tick of zoning out
const DEFAULT_HESITATION: f64 = 0.02;

/// Ticks spent zoned out once it happens
const FREEZE_TICKS: std::ops::Range<u32> = 20..120;

/// Seeded paddle controller
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    hesitation: f64,
    frozen_ticks: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            hesitation: DEFAULT_HESITATION,
            frozen_ticks: 0,
        }
    }

    /// Override the per-tick chance of zoning out (clamped to 0..=1)
    pub fn with_hesitation(mut self, probability: f64) -> Self {
        self.hesitation = probability.clamp(0.0, 1.0);
        self
    }

    /// Pick the next paddle command for the current scene
    pub fn decide(&mut self, scene: &SceneSnapshot) -> Direction {
        if self.frozen_ticks > 0 {
            self.frozen_ticks -= 1;
            return Direction::None;
        }
        if self.rng.random_bool(self.hesitation) {
            self.frozen_ticks = self.rng.random_range(FREEZE_TICKS);
            log::debug!("autopilot zoning out for {} ticks", self.frozen_ticks);
            return Direction::None;
        }

        let target = scene.ball.pos.x + scene.ball.diameter / 2.0;
        let center = scene.paddle.center_x();
        // Half a step of slack so the paddle doesn't jitter around the ball
        let deadband = scene.paddle.speed / 2.0;

        if target < center - deadband {
            Direction::Left
        } else if target > center + deadband {
            Direction::Right
        } else {
            Direction::None
        }
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::GameState;

    fn scene_with_ball_at(x: f32) -> SceneSnapshot {
        let mut config = GameConfig::default();
        config.ball.x = x;
        config.paddle.x = 200.0;
        GameState::new(&config).unwrap().snapshot()
    }

    #[test]
    fn test_tracks_ball() {
        let mut pilot = Autopilot::new(1).with_hesitation(0.0);
        // Paddle centre is 250
        assert_eq!(pilot.decide(&scene_with_ball_at(50.0)), Direction::Left);
        assert_eq!(pilot.decide(&scene_with_ball_at(400.0)), Direction::Right);
        assert_eq!(pilot.decide(&scene_with_ball_at(238.0)), Direction::None);
    }

    #[test]
    fn test_always_hesitating_never_moves() {
        let mut pilot = Autopilot::new(1).with_hesitation(1.0);
        for _ in 0..50 {
            assert_eq!(pilot.decide(&scene_with_ball_at(50.0)), Direction::None);
        }
    }

    #[test]
    fn test_same_seed_same_decisions() {
        let scene = scene_with_ball_at(50.0);
        let mut a = Autopilot::new(99).with_hesitation(0.3);
        let mut b = Autopilot::new(99).with_hesitation(0.3);
        for _ in 0..200 {
            assert_eq!(a.decide(&scene), b.decide(&scene));
        }
    }
}
