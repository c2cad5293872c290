//! Card system: definitions, the move catalog, dealt copies, deck and hand.
//!
//! ## Key Types
//!
//! - `CardId`: identifier for a card definition
//! - `CardDefinition`: the vectors a card can apply (several for a choice card)
//! - `MoveCatalog`: card definition lookup
//! - `DealtCard`: a card identity tagged with a per-session instance id
//! - `Deck`: draw and discard piles
//! - `Hand`: ordered stacks whose top cards are playable

pub mod deck;
pub mod definition;
pub mod hand;
pub mod instance;
pub mod registry;

pub use deck::{Deck, DeckOrder};
pub use definition::{CardDefinition, CardId, CardVectors};
pub use hand::{Hand, HandStack, StackId};
pub use instance::{CardInstanceId, DealtCard, InstanceAllocator};
pub use registry::MoveCatalog;
