//! Game session: the single owner of simulation state
//!
//! Tick callbacks and input events both go through `&mut Session`, so
//! mutation of the ball, paddle and phase is serialized by construction.
//! On native targets `driver` multiplexes a periodic ticker and an input
//! channel onto one thread; on the web the session sits behind an
//! `Rc<RefCell<_>>` shared by the interval and keydown callbacks.

#[cfg(not(target_arch = "wasm32"))]
pub mod driver;

use std::time::Duration;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::input::translate_key;
use crate::present::Presenter;
use crate::sim::{self, Direction, GameEvent, GameState, SceneSnapshot};

/// A running (or finished) game bound to a presenter
pub struct Session<P: Presenter> {
    state: GameState,
    presenter: P,
    tick_interval: Duration,
}

impl<P: Presenter> Session<P> {
    /// Validate the config, build all entities and draw the initial scene
    ///
    /// Fails before anything is drawn if the config is invalid.
    pub fn new(config: &GameConfig, mut presenter: P) -> Result<Self, ConfigError> {
        let state = config.build_state()?;

        presenter.draw_boundary(state.boundary());
        presenter.draw_ball(&state.ball());
        presenter.draw_paddle(&state.paddle());

        log::info!(
            "Session started: tick every {} ms, ball at ({}, {})",
            config.tick_interval_ms,
            config.ball.x,
            config.ball.y
        );

        Ok(Self {
            state,
            presenter,
            tick_interval: config.tick_interval(),
        })
    }

    /// Run one simulation tick; returns false once the game is over
    pub fn tick(&mut self) -> bool {
        if self.state.is_over() {
            return false;
        }

        for event in sim::tick(&mut self.state) {
            match event {
                GameEvent::BallMoved { .. } => self.presenter.draw_ball(&self.state.ball()),
                GameEvent::GameOver { .. } => {
                    let scene = self.state.snapshot();
                    self.presenter.game_over(&scene);
                }
                GameEvent::WallBounce { .. } | GameEvent::PaddleMoved { .. } => {}
            }
        }

        !self.state.is_over()
    }

    /// Apply a paddle command; returns true if the paddle moved
    pub fn steer(&mut self, direction: Direction) -> bool {
        match sim::steer(&mut self.state, direction) {
            Some(_) => {
                self.presenter.draw_paddle(&self.state.paddle());
                true
            }
            None => false,
        }
    }

    /// Translate a raw key identifier and steer with it
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.steer(translate_key(key))
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        self.state.snapshot()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
