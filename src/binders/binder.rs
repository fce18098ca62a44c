//! Binders: bounded card containers for trading or selling.
//!
//! A binder holds at most `capacity` card units in total (the sum of its
//! entries' amounts, 20 by default). Matching cards stack into one entry.
//! Its `BinderKind` decides which cards it accepts and whether it supports
//! `trade` or `sell`.

use serde::{Deserialize, Serialize};

use super::kind::{BinderKind, BinderRules};
use crate::cards::{Card, Collection};
use crate::core::config::{FillState, InventoryConfig};
use crate::core::error::{InventoryError, Result};

/// Record of a completed trade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TradeReceipt {
    /// The copy that left the binder.
    pub given: Card,
    /// The copy that arrived.
    pub received: Card,
    /// `received.value() - given.value()`; positive means the trade gained value.
    pub difference: f64,
}

/// A named, bounded card container.
///
/// ## Example
///
/// ```
/// use card_ledger::binders::{Binder, BinderKind};
/// use card_ledger::cards::{Card, Rarity, Variant};
///
/// let mut binder = Binder::new("R1", BinderKind::Rares);
///
/// let bolt = Card::new("Bolt", Rarity::Common, Variant::Normal, 1.0).unwrap();
/// assert!(binder.add_card(&bolt).is_err());
///
/// let drake = Card::new("Drake", Rarity::Legendary, Variant::FullArt, 10.0).unwrap();
/// binder.add_card(&drake).unwrap();
/// assert_eq!(binder.total_value(), 20.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Binder {
    name: String,
    kind: BinderKind,
    capacity: u32,
    trade_threshold: f64,
    cards: Vec<Card>,
}

impl Binder {
    /// Create an empty binder with the default limits.
    pub fn new(name: impl Into<String>, kind: BinderKind) -> Self {
        Self::with_config(name, kind, &InventoryConfig::default())
    }

    /// Create an empty binder using the limits in `config`.
    pub fn with_config(name: impl Into<String>, kind: BinderKind, config: &InventoryConfig) -> Self {
        Self {
            name: name.into(),
            kind,
            capacity: config.binder_capacity,
            trade_threshold: config.trade_confirm_threshold,
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> BinderKind {
        self.kind
    }

    #[must_use]
    pub fn rules(&self) -> BinderRules {
        self.kind.rules()
    }

    #[must_use]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub fn sell_multiplier(&self) -> f64 {
        self.rules().sell_multiplier
    }

    #[must_use]
    pub fn is_tradeable(&self) -> bool {
        self.rules().is_tradeable()
    }

    #[must_use]
    pub fn is_sellable(&self) -> bool {
        self.rules().is_sellable()
    }

    /// Would this binder accept `card`?
    #[must_use]
    pub fn is_card_allowed(&self, card: &Card) -> bool {
        self.rules().allows(card)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of amounts over every entry.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.cards.iter().map(Card::amount).sum()
    }

    /// Sum of `value x amount` over every entry.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.cards.iter().map(Card::total_value).sum()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.total_units() >= self.capacity
    }

    #[must_use]
    pub fn fill_state(&self) -> FillState {
        FillState::of(self.total_units() as usize, self.capacity as usize)
    }

    /// First entry called `name` (ignoring case).
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.is_named(name))
    }

    /// Entry matching `card`'s identity.
    #[must_use]
    pub fn find_by_match(&self, card: &Card) -> Option<&Card> {
        self.cards.iter().find(|c| c.matches(card))
    }

    /// Add one copy of `card`.
    ///
    /// Checks the kind's content rule first, then capacity. A matching entry
    /// is incremented; otherwise a single-copy entry is appended.
    pub fn add_card(&mut self, card: &Card) -> Result<()> {
        if !self.is_card_allowed(card) {
            return Err(self.not_allowed(card));
        }
        if self.is_full() {
            return Err(self.capacity_exceeded());
        }

        self.insert_unit(card);
        Ok(())
    }

    /// Remove one copy of the first entry called `name`.
    ///
    /// Returns whether a card was found.
    pub fn remove_card(&mut self, name: &str) -> bool {
        self.remove_unit(name).is_some()
    }

    /// Remove one copy of the first entry called `name`, returning it.
    pub fn remove_unit(&mut self, name: &str) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.is_named(name))?;

        let card = &mut self.cards[index];
        let unit = card.copy_with_amount(1);
        if card.amount > 1 {
            card.amount -= 1;
            tracing::debug!(binder = %self.name, card = %unit.name(), "binder amount decreased");
        } else {
            self.cards.remove(index);
            tracing::debug!(binder = %self.name, card = %unit.name(), "card removed from binder");
        }
        Some(unit)
    }

    /// Trade one copy of `outgoing` for `incoming`.
    ///
    /// Only trade binders can trade. The incoming card must pass the
    /// binder's content rule. When the value gap exceeds the binder's
    /// threshold, `confirm` is called with the absolute difference and the
    /// trade goes ahead only if it returns `true`.
    ///
    /// On success the outgoing copy is gone for good (its collection
    /// placeholder is pruned once no copy remains in the binder), the
    /// incoming copy sits in the binder, and the collection lists it.
    pub fn trade<F>(
        &mut self,
        outgoing: &str,
        incoming: Card,
        collection: &mut Collection,
        confirm: F,
    ) -> Result<TradeReceipt>
    where
        F: FnOnce(f64) -> bool,
    {
        if !self.is_tradeable() {
            return Err(InventoryError::NotTradeable {
                binder: self.name.clone(),
            });
        }
        let given_value = self
            .find_by_name(outgoing)
            .map(Card::value)
            .ok_or_else(|| InventoryError::not_found(self.label(), outgoing))?;
        if !self.is_card_allowed(&incoming) {
            return Err(self.not_allowed(&incoming));
        }
        // One copy leaves before the new one arrives.
        if self.total_units().saturating_sub(1) >= self.capacity {
            return Err(self.capacity_exceeded());
        }

        let difference = incoming.value() - given_value;
        if difference.abs() > self.trade_threshold && !confirm(difference.abs()) {
            tracing::info!(binder = %self.name, difference, "trade declined");
            return Err(InventoryError::TradeDeclined {
                difference: difference.abs(),
            });
        }

        let Some(given) = self.remove_unit(outgoing) else {
            return Err(InventoryError::not_found(self.label(), outgoing));
        };
        if self.find_by_match(&given).is_none() {
            collection.prune_if_empty(&given.key());
        }

        self.insert_unit(&incoming);
        collection.record_seen(&incoming);

        tracing::info!(
            binder = %self.name,
            given = %given.name(),
            received = %incoming.name(),
            difference,
            "trade completed"
        );

        Ok(TradeReceipt {
            given,
            received: incoming.copy_with_amount(1),
            difference,
        })
    }

    /// Liquidate every card in the binder.
    ///
    /// Returns `sum(value x amount) x sell multiplier`. The binder is left
    /// empty, the cards are destroyed, and their zero-amount collection
    /// placeholders are pruned. Only sell binders can be sold.
    pub fn sell(&mut self, collection: &mut Collection) -> Result<f64> {
        if !self.is_sellable() {
            return Err(InventoryError::NotSellable {
                container: self.label(),
            });
        }

        let payout = self.total_value() * self.sell_multiplier();
        for card in self.cards.drain(..) {
            collection.prune_if_empty(&card.key());
        }

        tracing::info!(binder = %self.name, payout, "binder sold");
        Ok(payout)
    }

    /// Hand every copy back to the collection and empty the binder.
    ///
    /// Returns the number of units returned.
    pub fn return_all(&mut self, collection: &mut Collection) -> u32 {
        let mut returned = 0;
        for card in self.cards.drain(..) {
            for _ in 0..card.amount() {
                collection.return_unit(&card);
            }
            returned += card.amount();
        }
        tracing::debug!(binder = %self.name, returned, "binder returned to collection");
        returned
    }

    fn insert_unit(&mut self, card: &Card) {
        if let Some(existing) = self.cards.iter_mut().find(|c| c.matches(card)) {
            existing.amount += 1;
            tracing::debug!(binder = %self.name, card = %card.name(), "binder amount increased");
        } else {
            self.cards.push(card.copy_with_amount(1));
            tracing::debug!(binder = %self.name, card = %card.name(), "card added to binder");
        }
    }

    fn label(&self) -> String {
        format!("binder {}", self.name)
    }

    fn not_allowed(&self, card: &Card) -> InventoryError {
        InventoryError::NotAllowed {
            binder: self.name.clone(),
            kind: self.kind,
            card: card.name().to_string(),
        }
    }

    fn capacity_exceeded(&self) -> InventoryError {
        InventoryError::CapacityExceeded {
            container: self.label(),
            capacity: self.capacity as usize,
        }
    }
}
