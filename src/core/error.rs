//! Inventory errors.
//!
//! Every failure here is an expected, recoverable condition that a
//! presentation layer reports back to the user. Operations that return an
//! error leave the inventory exactly as it was.

use thiserror::Error;

use crate::binders::BinderKind;

/// Errors produced by collection, binder, deck and inventory operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InventoryError {
    /// The container is at its size limit.
    #[error("{container} is full (max {capacity})")]
    CapacityExceeded { container: String, capacity: usize },

    /// A deck already holds a card with this name.
    #[error("deck {deck} already contains {name}; only one copy is allowed")]
    DuplicateCard { deck: String, name: String },

    /// The binder's content rule rejected the card.
    #[error("{card} is not allowed in {kind} {binder}")]
    NotAllowed {
        binder: String,
        kind: BinderKind,
        card: String,
    },

    /// No card or container by that name.
    #[error("{name} not found in {container}")]
    NotFound { container: String, name: String },

    /// Malformed or out-of-range user input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Trade requested on a sell binder.
    #[error("{binder} is not a trade binder")]
    NotTradeable { binder: String },

    /// Sale requested on a container that cannot be sold.
    #[error("{container} cannot be sold")]
    NotSellable { container: String },

    /// The confirmation step for an uneven trade was refused.
    #[error("trade declined (value difference ${difference:.2})")]
    TradeDeclined { difference: f64 },

    /// A binder or deck with this name already exists.
    #[error("a container named {name} already exists")]
    DuplicateName { name: String },

    /// The collection has no uncommitted copies of the card.
    #[error("no copies of {name} left in the collection")]
    Unavailable { name: String },
}

impl InventoryError {
    pub(crate) fn not_found(container: impl Into<String>, name: impl Into<String>) -> Self {
        InventoryError::NotFound {
            container: container.into(),
            name: name.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        InventoryError::InvalidInput(message.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, InventoryError>;
