//! Native session driver
//!
//! One thread owns the session and waits on two sources at once: a
//! periodic ticker and a command channel fed by input producers. Producers
//! only ever hold a `SessionHandle`; the state itself never leaves the
//! driver thread.

use crossbeam_channel::{Receiver, Sender, never, select, unbounded};

use super::Session;
use crate::autopilot::Autopilot;
use crate::input::translate_key;
use crate::present::Presenter;
use crate::sim::Direction;

/// Messages accepted by the driver loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Steer(Direction),
    Shutdown,
}

/// How a driven session came to an end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Ball got past the paddle
    GameOver { ticks: u64 },
    /// Stopped on request before the game ended
    Shutdown { ticks: u64 },
}

/// Cloneable sender side for input producers
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: Sender<SessionCommand>,
}

impl SessionHandle {
    /// Queue a paddle move; returns false if the driver is gone
    pub fn steer(&self, direction: Direction) -> bool {
        if direction == Direction::None {
            return true;
        }
        self.tx.send(SessionCommand::Steer(direction)).is_ok()
    }

    /// Translate a raw key identifier and queue the resulting move
    pub fn key(&self, key: &str) -> bool {
        self.steer(translate_key(key))
    }

    /// Ask the driver to stop after its current event
    pub fn shutdown(&self) -> bool {
        self.tx.send(SessionCommand::Shutdown).is_ok()
    }
}

/// Create a command channel for one driver
pub fn channel() -> (SessionHandle, Receiver<SessionCommand>) {
    let (tx, rx) = unbounded();
    (SessionHandle { tx }, rx)
}

/// Drive `session` until game over or shutdown
///
/// Ticks are scheduled at the session's nominal interval with no drift
/// correction. If every handle is dropped the session keeps ticking
/// without input. The autopilot, when present, issues one command per tick.
pub fn run<P: Presenter>(
    session: &mut Session<P>,
    commands: &Receiver<SessionCommand>,
    mut autopilot: Option<Autopilot>,
) -> SessionEnd {
    let ticker = crossbeam_channel::tick(session.tick_interval());
    let closed = never();
    let mut input_open = true;

    loop {
        let input = if input_open { commands } else { &closed };
        select! {
            recv(ticker) -> _ => {
                if !session.tick() {
                    break;
                }
                if let Some(pilot) = autopilot.as_mut() {
                    let direction = pilot.decide(&session.snapshot());
                    session.steer(direction);
                }
            }
            recv(input) -> msg => match msg {
                Ok(SessionCommand::Steer(direction)) => {
                    session.steer(direction);
                }
                Ok(SessionCommand::Shutdown) => {
                    let ticks = session.state().time_ticks();
                    log::info!("Session shut down after {} ticks", ticks);
                    return SessionEnd::Shutdown { ticks };
                }
                Err(_) => {
                    log::debug!("All input handles dropped, ticking on without input");
                    input_open = false;
                }
            }
        }
    }

    SessionEnd::GameOver {
        ticks: session.state().time_ticks(),
    }
}
