//! Board construction and visit semantics.

use proptest::prelude::*;
use rust_cardwalk::board::{Board, BoardLayout, Tile, TileBehavior};
use rust_cardwalk::core::Point;

fn behavior() -> impl Strategy<Value = TileBehavior> {
    prop_oneof![
        Just(TileBehavior::Single),
        (1u32..6).prop_map(|required| TileBehavior::Multi { required }),
        Just(TileBehavior::Toggle),
        Just(TileBehavior::Impassable),
    ]
}

fn point(size: i32) -> impl Strategy<Value = Point> {
    (0..size, 0..size).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    /// A tile is visited exactly when it is traversable with nothing remaining.
    #[test]
    fn visited_iff_traversable_and_done(behavior in behavior(), visits in 0usize..10) {
        let mut tile = Tile::new(behavior);
        for _ in 0..visits {
            tile.mark_visited();
        }
        prop_assert_eq!(tile.is_visited(), tile.is_traversable() && tile.remaining_visits() == 0);
        prop_assert!(tile.remaining_visits() <= tile.required_visits());
    }

    /// Obstacles always win, whatever else the layout says about the point.
    #[test]
    fn impassable_overrides_everything(p in point(6), required in 1u32..4) {
        let layout = BoardLayout::new(6)
            .with_required_visits(p, required)
            .with_toggle(p)
            .with_visited(p)
            .with_impassable(p);
        let board = Board::new(&layout);

        prop_assert!(board.is_impassable(p));
        prop_assert!(!board.is_visited(p));
        prop_assert!(!board.traversable_points().any(|q| q == p));
    }

    /// Remaining count never exceeds the traversable tile count, however
    /// many times tiles are visited.
    #[test]
    fn remaining_is_bounded(visits in prop::collection::vec(point(4), 0..40)) {
        let mut board = Board::new(&BoardLayout::new(4).with_required_visits(Point::new(1, 1), 3));
        for p in visits {
            board.mark_visited(p);
            prop_assert!(board.remaining_count() <= 16);
        }
        prop_assert_eq!(board.is_cleared(), board.remaining_count() == 0);
    }
}

#[test]
fn test_multi_visit_does_not_underflow() {
    let p = Point::new(0, 0);
    let mut board = Board::new(&BoardLayout::new(2).with_required_visits(p, 2));

    board.mark_visited(p);
    assert!(!board.is_visited(p));
    board.mark_visited(p);
    assert!(board.is_visited(p));
    board.mark_visited(p);
    board.mark_visited(p);

    assert!(board.is_visited(p));
    assert_eq!(board.tile(p).map(Tile::remaining_visits), Some(0));
}

#[test]
fn test_toggle_round_trip() {
    let p = Point::new(1, 0);
    let mut board = Board::new(&BoardLayout::new(3).with_toggle(p));

    let before = board.is_visited(p);
    board.mark_visited(p);
    assert_ne!(board.is_visited(p), before);
    board.mark_visited(p);
    assert_eq!(board.is_visited(p), before);
}

#[test]
fn test_clear_predicate_ignores_obstacles() {
    let layout = BoardLayout::new(2)
        .with_impassable(Point::new(1, 1))
        .with_visited(Point::new(0, 0));
    let mut board = Board::new(&layout);
    assert_eq!(board.remaining_count(), 2);

    board.mark_visited(Point::new(1, 0));
    board.mark_visited(Point::new(0, 1));

    assert!(board.is_cleared());
}

#[test]
fn test_out_of_bounds_is_inert() {
    let mut board = Board::new(&BoardLayout::new(3));
    let outside = Point::new(-1, 3);
    let before = board.clone();

    board.mark_visited(outside);

    assert_eq!(board, before);
    assert!(board.tile(outside).is_none());
    assert!(!board.is_traversable(outside));
    assert!(!board.is_visited(outside));
}

#[test]
fn test_snapshot_is_independent() {
    let mut board = Board::new(&BoardLayout::new(3));
    let snapshot = board.clone();

    board.mark_visited(Point::new(2, 2));

    assert!(!snapshot.is_visited(Point::new(2, 2)));
    assert!(board.is_visited(Point::new(2, 2)));
}
