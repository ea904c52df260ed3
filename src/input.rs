//! Key identifier translation
//!
//! Maps raw key names (DOM `KeyboardEvent.code` values, or plain letters
//! typed into the native runner) to paddle directions.

use crate::sim::Direction;

/// Translate a raw key identifier into a paddle direction
pub fn translate_key(key: &str) -> Direction {
    match key.trim() {
        "ArrowLeft" | "KeyA" | "a" | "A" | "left" => Direction::Left,
        "ArrowRight" | "KeyD" | "d" | "D" | "right" => Direction::Right,
        _ => Direction::None,
    }
}
