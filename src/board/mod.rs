//! Board topology and per-tile visit state.
//!
//! ## Key Types
//!
//! - `TileBehavior`: how a cell reacts to visits (single, multi, toggle, impassable)
//! - `Tile`: behavior plus remaining-visit counter
//! - `BoardLayout`: construction input (size and per-point overrides)
//! - `Board`: the N×N grid with containment, visit queries and completion

pub mod grid;
pub mod layout;
pub mod tile;

pub use grid::Board;
pub use layout::BoardLayout;
pub use tile::{Tile, TileBehavior};
