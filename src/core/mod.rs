//! Core types shared by every container: configuration, errors, currency.

pub mod config;
pub mod error;
pub mod wallet;

pub use config::{
    FillState, InventoryConfig, DEFAULT_BINDER_CAPACITY, DEFAULT_DECK_CAPACITY,
    DEFAULT_TRADE_CONFIRM_THRESHOLD,
};
pub use error::{InventoryError, Result};
pub use wallet::Wallet;
