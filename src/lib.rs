//! # card-ledger
//!
//! Inventory core for a trading-card collection.
//!
//! ## Design Principles
//!
//! 1. **Owned Copies**: Every container owns its own card entries. The
//!    collection's amount counts copies not committed to a binder or deck.
//!
//! 2. **Explicit Context**: The collection and wallet are passed to the
//!    operations that touch them, or owned by an `Inventory` that does it
//!    for you. No globals.
//!
//! 3. **Validate, Then Mutate**: An operation that returns an error leaves
//!    everything as it was.
//!
//! ## Containers
//!
//! - **Collection**: Unbounded, one entry per (name, rarity, variant).
//! - **Binder**: Up to 20 units. Its kind restricts content and decides
//!   whether it is traded from or sold whole.
//! - **Deck**: Up to 10 cards, one per name. Sellable decks can be sold.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, wallet
//! - `cards`: Rarity, variants, card entries, the collection
//! - `binders`: Binder kinds and binders
//! - `decks`: Decks
//! - `inventory`: The `Inventory` context that moves cards between them
//!
//! ## Logging
//!
//! Mutations emit `tracing` events (`debug` per card, `info` for container
//! lifecycle and money). Install a subscriber to see them.

pub mod core;
pub mod cards;
pub mod binders;
pub mod decks;
pub mod inventory;

// Re-export commonly used types
pub use crate::core::{FillState, InventoryConfig, InventoryError, Result, Wallet};

pub use crate::cards::{Card, CardKey, Collection, MergeResult, Rarity, Variant};

pub use crate::binders::{Binder, BinderAction, BinderKind, BinderRules, TradeReceipt};

pub use crate::decks::{Deck, DeckKind};

pub use crate::inventory::Inventory;
