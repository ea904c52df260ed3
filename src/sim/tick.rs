//! Fixed-step simulation tick and paddle steering
//!
//! Both entry points are no-ops once the game is over, so a driver that
//! keeps calling them after the terminal tick cannot move anything.

use super::paddle::Direction;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one tick
///
/// Moves the ball, then evaluates game over on the post-move position
/// before the reflected velocity is ever applied.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    if state.phase == GamePhase::Over {
        return Vec::new();
    }

    state.time_ticks += 1;
    let mut events = Vec::with_capacity(3);

    let boundary = *state.boundary();
    let reflection = state.ball.move_within(&boundary);
    let pos = state.ball.pos();
    events.push(GameEvent::BallMoved { pos });
    log::trace!("tick {}: ball at ({}, {})", state.time_ticks, pos.x, pos.y);

    if reflection.any() {
        log::debug!(
            "tick {}: wall bounce (horizontal={}, vertical={})",
            state.time_ticks,
            reflection.horizontal,
            reflection.vertical
        );
        events.push(GameEvent::WallBounce {
            horizontal: reflection.horizontal,
            vertical: reflection.vertical,
        });
    }

    if state.is_game_over() {
        state.phase = GamePhase::Over;
        log::info!("Game over at tick {}", state.time_ticks);
        events.push(GameEvent::GameOver {
            tick: state.time_ticks,
        });
    }

    events
}

/// Apply one paddle move command
///
/// Returns the resulting event if the paddle actually moved.
pub fn steer(state: &mut GameState, direction: Direction) -> Option<GameEvent> {
    if state.phase == GamePhase::Over {
        log::warn!("Ignoring {:?} after game over", direction);
        return None;
    }

    let boundary = *state.boundary();
    if !state.paddle.move_toward(direction, &boundary) {
        return None;
    }

    let x = state.paddle.pos().x;
    log::debug!("paddle {:?} -> x={}", direction, x);
    Some(GameEvent::PaddleMoved { direction, x })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    /// Ball a few ticks above the paddle plane, well clear of the paddle
    fn doomed_config() -> GameConfig {
        let mut config = GameConfig::default();
        config.ball.x = 300.0;
        config.ball.y = 462.0;
        config.ball.dx = 2.0;
        config.ball.dy = 3.0;
        config
    }

    #[test]
    fn test_tick_moves_ball_and_counts() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        let events = tick(&mut state);
        assert_eq!(state.time_ticks(), 1);
        assert_eq!(state.ball().pos, Vec2::new(102.0, 103.0));
        assert_eq!(
            events,
            vec![GameEvent::BallMoved {
                pos: Vec2::new(102.0, 103.0)
            }]
        );
    }

    #[test]
    fn test_game_over_fires_once_and_freezes_state() {
        let mut state = GameState::new(&doomed_config()).unwrap();

        let mut over_events = 0;
        for _ in 0..20 {
            over_events += tick(&mut state)
                .iter()
                .filter(|e| matches!(e, GameEvent::GameOver { .. }))
                .count();
        }
        assert_eq!(over_events, 1);
        assert!(state.is_over());
        // 462 + 3*3 + 20 = 491 >= 490
        assert_eq!(state.time_ticks(), 3);

        let frozen = state.snapshot();
        for _ in 0..10 {
            assert!(tick(&mut state).is_empty());
            assert_eq!(steer(&mut state, Direction::Left), None);
            assert_eq!(steer(&mut state, Direction::Right), None);
        }
        assert_eq!(state.snapshot(), frozen);
    }

    #[test]
    fn test_paddle_under_ball_keeps_game_running() {
        let mut config = doomed_config();
        config.paddle.x = 250.0;
        let mut state = GameState::new(&config).unwrap();
        for _ in 0..20 {
            tick(&mut state);
        }
        assert_eq!(state.phase(), GamePhase::Running);
        // Bounced off the bottom edge and is heading back up
        assert!(state.ball().vel.y < 0.0);
    }

    #[test]
    fn test_steer_reports_movement() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        assert_eq!(
            steer(&mut state, Direction::Right),
            Some(GameEvent::PaddleMoved {
                direction: Direction::Right,
                x: 20.0
            })
        );
        assert_eq!(steer(&mut state, Direction::None), None);
        assert!(steer(&mut state, Direction::Left).is_some());
        assert_eq!(
            steer(&mut state, Direction::Left),
            Some(GameEvent::PaddleMoved {
                direction: Direction::Left,
                x: 0.0
            })
        );
        // Flush with the left edge
        assert_eq!(steer(&mut state, Direction::Left), None);
    }
}
