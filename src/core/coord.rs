//! Position and displacement primitives.
//!
//! `Point` is a board coordinate, `MoveVector` is what a card applies to
//! it. Both are plain `Copy` values with no hidden state.

use serde::{Deserialize, Serialize};

/// A board coordinate.
///
/// Coordinates are signed so that translating near an edge produces an
/// off-board point instead of wrapping. Use `is_within` to test it
/// against a board size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Apply a vector to this point.
    #[must_use]
    pub const fn translate(self, vector: MoveVector) -> Self {
        Self {
            x: self.x.saturating_add(vector.dx),
            y: self.y.saturating_add(vector.dy),
        }
    }

    /// The vector that moves `self` onto `other`.
    #[must_use]
    pub const fn offset_to(self, other: Point) -> MoveVector {
        MoveVector {
            dx: other.x.saturating_sub(self.x),
            dy: other.y.saturating_sub(self.y),
        }
    }

    /// Check `0 <= x, y < size`.
    #[must_use]
    pub fn is_within(self, size: usize) -> bool {
        let Ok(size) = i32::try_from(size) else {
            return self.x >= 0 && self.y >= 0;
        };
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A displacement a card can apply to the piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoveVector {
    pub dx: i32,
    pub dy: i32,
}

impl MoveVector {
    /// Create a new vector.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// The same displacement pointing the other way.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// Check for the zero vector (a card that doesn't move).
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

impl std::fmt::Display for MoveVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:+}, {:+}]", self.dx, self.dy)
    }
}
