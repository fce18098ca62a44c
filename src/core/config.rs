//! Inventory configuration.
//!
//! The inventory is configured at startup by providing an `InventoryConfig`:
//! - `binder_capacity`: total card units a binder may hold
//! - `deck_capacity`: distinct cards a deck may hold
//! - `trade_confirm_threshold`: value gap above which a trade needs approval
//!
//! Containers created through `Inventory` inherit these limits.

use serde::{Deserialize, Serialize};

/// Default number of card units a binder can hold.
pub const DEFAULT_BINDER_CAPACITY: u32 = 20;

/// Default number of cards a deck can hold.
pub const DEFAULT_DECK_CAPACITY: usize = 10;

/// Default value difference (in currency) above which a trade must be confirmed.
pub const DEFAULT_TRADE_CONFIRM_THRESHOLD: f64 = 1.0;

/// How full a bounded container is.
///
/// Containers move `Empty ⇄ PartiallyFilled ⇄ Full` as cards are added and
/// removed. `Full` blocks further adds until something is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillState {
    /// Nothing in the container.
    Empty,
    /// Some room used, some left.
    PartiallyFilled,
    /// At capacity.
    Full,
}

impl FillState {
    /// Classify `used` slots against `capacity`.
    #[must_use]
    pub fn of(used: usize, capacity: usize) -> Self {
        if used == 0 {
            FillState::Empty
        } else if used >= capacity {
            FillState::Full
        } else {
            FillState::PartiallyFilled
        }
    }
}

/// Limits applied to every container in an inventory.
///
/// ## Example
///
/// ```
/// use card_ledger::core::InventoryConfig;
///
/// let config = InventoryConfig::new()
///     .with_binder_capacity(30)
///     .with_trade_confirm_threshold(5.0);
///
/// assert_eq!(config.binder_capacity, 30);
/// assert_eq!(config.deck_capacity, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Maximum total units (sum of amounts) per binder.
    pub binder_capacity: u32,

    /// Maximum entries per deck.
    pub deck_capacity: usize,

    /// Trades whose value difference exceeds this need confirmation.
    pub trade_confirm_threshold: f64,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            binder_capacity: DEFAULT_BINDER_CAPACITY,
            deck_capacity: DEFAULT_DECK_CAPACITY,
            trade_confirm_threshold: DEFAULT_TRADE_CONFIRM_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    /// Create a configuration with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the binder unit capacity.
    #[must_use]
    pub fn with_binder_capacity(mut self, capacity: u32) -> Self {
        assert!(capacity > 0, "Binder capacity must be positive");
        self.binder_capacity = capacity;
        self
    }

    /// Set the deck card capacity.
    #[must_use]
    pub fn with_deck_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Deck capacity must be positive");
        self.deck_capacity = capacity;
        self
    }

    /// Set the trade confirmation threshold.
    #[must_use]
    pub fn with_trade_confirm_threshold(mut self, threshold: f64) -> Self {
        self.trade_confirm_threshold = threshold.max(0.0);
        self
    }

    /// Does a trade with this value difference need confirmation?
    #[must_use]
    pub fn needs_confirmation(&self, difference: f64) -> bool {
        difference.abs() > self.trade_confirm_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InventoryConfig::default();
        assert_eq!(config.binder_capacity, 20);
        assert_eq!(config.deck_capacity, 10);
        assert_eq!(config.trade_confirm_threshold, 1.0);
    }

    #[test]
    fn test_config_builder() {
        let config = InventoryConfig::new()
            .with_binder_capacity(5)
            .with_deck_capacity(3)
            .with_trade_confirm_threshold(2.5);

        assert_eq!(config.binder_capacity, 5);
        assert_eq!(config.deck_capacity, 3);
        assert_eq!(config.trade_confirm_threshold, 2.5);
    }

    #[test]
    #[should_panic(expected = "Binder capacity must be positive")]
    fn test_zero_binder_capacity() {
        let _ = InventoryConfig::new().with_binder_capacity(0);
    }

    #[test]
    fn test_needs_confirmation() {
        let config = InventoryConfig::default();
        assert!(!config.needs_confirmation(1.0));
        assert!(config.needs_confirmation(1.01));
        assert!(config.needs_confirmation(-3.0));
    }

    #[test]
    fn test_fill_state() {
        assert_eq!(FillState::of(0, 10), FillState::Empty);
        assert_eq!(FillState::of(4, 10), FillState::PartiallyFilled);
        assert_eq!(FillState::of(10, 10), FillState::Full);
    }
}
