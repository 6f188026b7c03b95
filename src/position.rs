//! Screen-space position of the nameplate.

use serde::{Deserialize, Serialize};

/// A 2D screen offset in pixels.
///
/// Serialized as a two-element array `[x, y]`, the form the host process
/// sends with every nameplate change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// The seed value every position subscription starts with.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Position {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Position> for [f64; 2] {
    fn from(p: Position) -> Self {
        [p.x, p.y]
    }
}

#[cfg(test)]
#[path = "position_test.rs"]
mod tests;
