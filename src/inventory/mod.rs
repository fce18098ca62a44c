//! The inventory context.
//!
//! `Inventory` owns the collection, wallet, binders and decks and performs
//! every move between them. Use it when you want the books kept for you;
//! the container types can also be driven directly with an explicit
//! `Collection`.

pub mod manager;

pub use manager::Inventory;
