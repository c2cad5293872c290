//! Board construction input.

use serde::{Deserialize, Serialize};

use crate::core::coord::Point;

/// Everything needed to build a `Board`.
///
/// Points outside the board are accepted and ignored at construction.
///
/// ## Example
///
/// ```
/// use rust_cardwalk::board::{Board, BoardLayout};
/// use rust_cardwalk::core::Point;
///
/// let layout = BoardLayout::new(5)
///     .with_visited(Point::new(2, 2))
///     .with_required_visits(Point::new(0, 0), 2)
///     .with_toggle(Point::new(4, 4))
///     .with_impassable(Point::new(1, 1));
///
/// let board = Board::new(&layout);
/// assert_eq!(board.remaining_count(), 25 - 1 - 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    /// Width and height.
    pub size: usize,

    /// Points that start completed.
    #[serde(default)]
    pub initial_visited: Vec<Point>,

    /// Multi-visit overrides.
    #[serde(default)]
    pub required_visits: Vec<(Point, u32)>,

    #[serde(default)]
    pub toggles: Vec<Point>,

    #[serde(default)]
    pub impassable: Vec<Point>,
}

impl BoardLayout {
    /// An all-`Single` board of the given size.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_visited(mut self, point: Point) -> Self {
        self.initial_visited.push(point);
        self
    }

    #[must_use]
    pub fn with_required_visits(mut self, point: Point, required: u32) -> Self {
        self.required_visits.push((point, required));
        self
    }

    #[must_use]
    pub fn with_toggle(mut self, point: Point) -> Self {
        self.toggles.push(point);
        self
    }

    #[must_use]
    pub fn with_impassable(mut self, point: Point) -> Self {
        self.impassable.push(point);
        self
    }

    /// Center point (rounded down on even sizes).
    #[must_use]
    pub fn center(&self) -> Point {
        let half = i32::try_from(self.size / 2).unwrap_or(i32::MAX);
        Point::new(half, half)
    }
}
