//! Presentation seam
//!
//! Renderers never see live entities, only value snapshots. The session
//! calls the `draw_*` methods once at start, then after every change, and
//! `game_over` exactly once.

use crate::sim::{BallSnapshot, Boundary, PaddleSnapshot, SceneSnapshot};

/// Something that can show the game
pub trait Presenter {
    fn draw_boundary(&mut self, boundary: &Boundary);
    fn draw_ball(&mut self, ball: &BallSnapshot);
    fn draw_paddle(&mut self, paddle: &PaddleSnapshot);
    /// Terminal indication
    fn game_over(&mut self, scene: &SceneSnapshot);
}

/// Headless presenter that reports through the `log` facade
#[derive(Debug, Default)]
pub struct LogPresenter {
    frames: u64,
}

impl LogPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ball frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Presenter for LogPresenter {
    fn draw_boundary(&mut self, boundary: &Boundary) {
        log::info!(
            "Board {}x{} at ({}, {})",
            boundary.width(),
            boundary.height(),
            boundary.left(),
            boundary.top()
        );
    }

    fn draw_ball(&mut self, ball: &BallSnapshot) {
        self.frames += 1;
        log::trace!("ball-{} at ({:.1}, {:.1})", ball.id, ball.pos.x, ball.pos.y);
    }

    fn draw_paddle(&mut self, paddle: &PaddleSnapshot) {
        log::debug!("paddle-{} at x={:.1}", paddle.id, paddle.pos.x);
    }

    fn game_over(&mut self, scene: &SceneSnapshot) {
        log::info!("Game Over after {} ticks", scene.tick);
        match serde_json::to_string(scene) {
            Ok(json) => log::debug!("Final scene: {}", json),
            Err(e) => log::warn!("Could not serialize final scene: {}", e),
        }
    }
}
