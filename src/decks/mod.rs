//! Decks: bounded, name-unique containers for play.
//!
//! ## Key Types
//!
//! - `Deck`: The container; sellable or not depending on its `DeckKind`
//! - `DeckKind`: `Standard` or `Sellable`

pub mod deck;

pub use deck::{Deck, DeckCards, DeckKind};
