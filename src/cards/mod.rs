//! Cards and the master collection.
//!
//! ## Key Types
//!
//! - `Rarity`, `Variant`: Card attributes; variants carry value multipliers
//! - `Card`: A card entry with its copy count
//! - `CardKey`: Match identity (name ignoring case, rarity, variant)
//! - `Collection`: The player's ledger of owned cards

pub mod attributes;
pub mod collection;
pub mod definition;

pub use attributes::{Rarity, Variant};
pub use collection::{Collection, MergeResult};
pub use definition::{Card, CardKey};
