//! The N×N board.
//!
//! Every query is total: out-of-bounds points read as `None`/`false` and
//! mutations on them are no-ops. The resolver calls these speculatively
//! for every candidate vector, so nothing here may panic.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::layout::BoardLayout;
use super::tile::{Tile, TileBehavior};
use crate::core::coord::Point;

/// Grid of tiles stored row-major in a persistent vector.
///
/// Cloning is O(1), so sessions hand snapshots to the presentation
/// layer freely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    tiles: Vector<Tile>,
}

impl Board {
    /// Build a board from a layout.
    ///
    /// Precedence, later steps overwriting earlier ones at the same point:
    /// impassable, required-visit overrides, toggles, impassable again,
    /// then initial visited points. Obstacles therefore always win, and
    /// pre-visited obstacles stay obstacles.
    #[must_use]
    pub fn new(layout: &BoardLayout) -> Self {
        let size = layout.size;
        let mut board = Self {
            size,
            tiles: std::iter::repeat(Tile::new(TileBehavior::Single))
                .take(size.saturating_mul(size))
                .collect(),
        };

        board.overwrite_all(&layout.impassable, TileBehavior::Impassable);
        for &(point, required) in &layout.required_visits {
            board.overwrite(point, TileBehavior::Multi { required });
        }
        board.overwrite_all(&layout.toggles, TileBehavior::Toggle);
        board.overwrite_all(&layout.impassable, TileBehavior::Impassable);

        for &point in &layout.initial_visited {
            if let Some(idx) = board.index(point) {
                let behavior = board.tiles[idx].behavior();
                board.tiles.set(idx, Tile::completed(behavior));
            }
        }

        board
    }

    /// All-`Single` board with nothing visited.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self::new(&BoardLayout::new(size))
    }

    fn overwrite_all(&mut self, points: &[Point], behavior: TileBehavior) {
        for &point in points {
            self.overwrite(point, behavior);
        }
    }

    fn overwrite(&mut self, point: Point, behavior: TileBehavior) {
        if let Some(idx) = self.index(point) {
            self.tiles.set(idx, Tile::new(behavior));
        }
    }

    fn index(&self, point: Point) -> Option<usize> {
        if !point.is_within(self.size) {
            return None;
        }
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        Some(y * self.size + x)
    }

    /// Width and height.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.is_within(self.size)
    }

    /// Tile state, `None` if out of bounds.
    #[must_use]
    pub fn tile(&self, point: Point) -> Option<&Tile> {
        self.index(point).and_then(|idx| self.tiles.get(idx))
    }

    #[must_use]
    pub fn is_visited(&self, point: Point) -> bool {
        self.tile(point).is_some_and(Tile::is_visited)
    }

    #[must_use]
    pub fn is_traversable(&self, point: Point) -> bool {
        self.tile(point).is_some_and(Tile::is_traversable)
    }

    #[must_use]
    pub fn is_impassable(&self, point: Point) -> bool {
        self.tile(point).is_some_and(Tile::is_impassable)
    }

    /// Apply one visit at `point`. No-op off the board or on obstacles.
    pub fn mark_visited(&mut self, point: Point) {
        let Some(idx) = self.index(point) else {
            return;
        };
        if let Some(tile) = self.tiles.get_mut(idx) {
            if tile.is_traversable() {
                tile.mark_visited();
            }
        }
    }

    /// Number of traversable tiles that are not yet completed.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.is_traversable() && !t.is_visited())
            .count()
    }

    /// Sum of outstanding visits over traversable tiles.
    #[must_use]
    pub fn remaining_visit_total(&self) -> u64 {
        self.tiles
            .iter()
            .filter(|t| t.is_traversable())
            .map(|t| u64::from(t.remaining_visits()))
            .sum()
    }

    /// No traversable tile left unvisited.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.remaining_count() == 0
    }

    /// Every point on the board, row-major.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let size = i32::try_from(self.size).unwrap_or(0);
        (0..size).flat_map(move |y| (0..size).map(move |x| Point::new(x, y)))
    }

    /// Every point the piece could stand on.
    pub fn traversable_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |&p| self.is_traversable(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty(3);

        assert_eq!(board.size(), 3);
        assert_eq!(board.remaining_count(), 9);
        assert!(!board.is_cleared());
        assert_eq!(board.points().count(), 9);
    }

    #[test]
    fn test_out_of_bounds_is_total() {
        let mut board = Board::empty(3);
        let outside = Point::new(3, 0);

        assert!(!board.contains(outside));
        assert!(board.tile(outside).is_none());
        assert!(!board.is_visited(outside));
        assert!(!board.is_traversable(outside));
        assert!(!board.is_impassable(outside));

        board.mark_visited(outside);
        board.mark_visited(Point::new(-1, -1));
        assert_eq!(board.remaining_count(), 9);
    }

    #[test]
    fn test_impassable_beats_toggle_and_multi() {
        let p = Point::new(1, 1);
        let layout = BoardLayout::new(3)
            .with_toggle(p)
            .with_required_visits(p, 3)
            .with_impassable(p);
        let board = Board::new(&layout);

        assert_eq!(board.tile(p).map(Tile::behavior), Some(TileBehavior::Impassable));
        assert!(board.is_impassable(p));
    }

    #[test]
    fn test_toggle_overrides_multi() {
        let p = Point::new(0, 2);
        let layout = BoardLayout::new(3)
            .with_required_visits(p, 4)
            .with_toggle(p);
        let board = Board::new(&layout);

        assert_eq!(board.tile(p).map(Tile::behavior), Some(TileBehavior::Toggle));
    }

    #[test]
    fn test_initial_visited_applied_last() {
        let multi = Point::new(0, 0);
        let wall = Point::new(1, 0);
        let layout = BoardLayout::new(3)
            .with_required_visits(multi, 3)
            .with_impassable(wall)
            .with_visited(multi)
            .with_visited(wall)
            .with_visited(Point::new(10, 10));
        let board = Board::new(&layout);

        assert!(board.is_visited(multi));
        assert_eq!(board.tile(multi).map(Tile::remaining_visits), Some(0));
        assert!(board.is_impassable(wall));
        assert!(!board.is_visited(wall));
        // 9 tiles, one wall, one pre-visited
        assert_eq!(board.remaining_count(), 7);
    }

    #[test]
    fn test_mark_visited_ignores_obstacles() {
        let wall = Point::new(2, 2);
        let mut board = Board::new(&BoardLayout::new(3).with_impassable(wall));

        board.mark_visited(wall);
        assert!(!board.is_visited(wall));
        assert_eq!(board.remaining_count(), 8);
    }

    #[test]
    fn test_clear_ignores_obstacles() {
        let mut board = Board::new(&BoardLayout::new(2).with_impassable(Point::new(1, 1)));

        board.mark_visited(Point::new(0, 0));
        board.mark_visited(Point::new(1, 0));
        assert!(!board.is_cleared());

        board.mark_visited(Point::new(0, 1));
        assert!(board.is_cleared());
    }

    #[test]
    fn test_remaining_visit_total() {
        let layout = BoardLayout::new(2).with_required_visits(Point::new(0, 0), 3);
        let mut board = Board::new(&layout);
        assert_eq!(board.remaining_visit_total(), 6);

        board.mark_visited(Point::new(0, 0));
        assert_eq!(board.remaining_visit_total(), 5);
        assert_eq!(board.remaining_count(), 4);
    }

    #[test]
    fn test_traversable_points() {
        let board = Board::new(&BoardLayout::new(2).with_impassable(Point::new(0, 0)));
        let points: Vec<_> = board.traversable_points().collect();
        assert_eq!(points, vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)]);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = Board::empty(3);
        let snapshot = board.clone();

        board.mark_visited(Point::new(1, 1));

        assert!(board.is_visited(Point::new(1, 1)));
        assert!(!snapshot.is_visited(Point::new(1, 1)));
    }
}
