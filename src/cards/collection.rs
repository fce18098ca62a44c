//! The collection: the player's master card ledger.
//!
//! The `Collection` holds at most one entry per match identity. Adding a
//! matching card bumps the existing entry instead of appending.
//!
//! An entry's `amount` counts the copies that are *not* committed to a
//! binder or deck. Checking a copy out to a container leaves the entry in
//! place at zero so the card stays listed; selling or trading the last copy
//! away prunes it.

use serde::{Deserialize, Serialize};

use super::definition::{cmp_names, Card, CardKey};
use crate::core::error::{InventoryError, Result};

/// Outcome of adding a card to the collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MergeResult {
    /// A new entry was appended.
    Created,
    /// An existing matching entry was incremented.
    Merged,
}

/// Ordered list of distinct card entries.
///
/// ## Example
///
/// ```
/// use card_ledger::cards::{Card, Collection, MergeResult, Rarity, Variant};
///
/// let mut collection = Collection::new();
/// let bolt = Card::new("Bolt", Rarity::Common, Variant::Normal, 1.0).unwrap();
///
/// assert_eq!(collection.add_card(bolt.clone()), MergeResult::Created);
/// assert_eq!(collection.add_card(bolt), MergeResult::Merged);
///
/// assert_eq!(collection.card_count(), 1);
/// assert_eq!(collection.find_by_name("bolt").unwrap().amount(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    cards: Vec<Card>,
}

impl Collection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct entries (not the sum of amounts).
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sum of amounts over every entry.
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.cards.iter().map(|c| c.amount).sum()
    }

    /// Value of every uncommitted copy.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.cards.iter().map(Card::total_value).sum()
    }

    /// Entries in storage order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Add a card.
    ///
    /// If a matching entry exists its amount goes up by one, whatever the
    /// incoming card's amount. Otherwise the card is appended as given, so
    /// `add_card(card.with_amount(5))` on a new card lists five copies while
    /// the same call on a listed card adds one. Use `adjust_amount` to add
    /// several copies to a listed card.
    pub fn add_card(&mut self, card: Card) -> MergeResult {
        if let Some(existing) = self.cards.iter_mut().find(|c| c.matches(&card)) {
            existing.amount += 1;
            tracing::debug!(card = %existing.name, amount = existing.amount, "collection entry merged");
            return MergeResult::Merged;
        }

        tracing::debug!(card = %card.name, amount = card.amount, "collection entry created");
        self.cards.push(card);
        MergeResult::Created
    }

    /// Delete the entry with this identity, whatever its amount.
    pub fn remove_card(&mut self, key: &CardKey) -> Option<Card> {
        let index = self.position(key)?;
        let removed = self.cards.remove(index);
        tracing::debug!(card = %removed.name, "collection entry removed");
        Some(removed)
    }

    /// Remove one copy of the first entry called `name`.
    ///
    /// The entry is dropped when its amount reaches zero. Returns whether
    /// any entry matched.
    pub fn remove_card_by_name(&mut self, name: &str) -> bool {
        let Some(index) = self.cards.iter().position(|c| c.is_named(name)) else {
            return false;
        };

        let card = &mut self.cards[index];
        card.amount = card.amount.saturating_sub(1);
        if card.amount == 0 {
            let removed = self.cards.remove(index);
            tracing::debug!(card = %removed.name, "collection entry removed (amount reached 0)");
        }
        true
    }

    /// First entry matching `card`'s identity.
    #[must_use]
    pub fn find_by_match(&self, card: &Card) -> Option<&Card> {
        self.cards.iter().find(|c| c.matches(card))
    }

    /// Entry with this identity.
    #[must_use]
    pub fn find_by_key(&self, key: &CardKey) -> Option<&Card> {
        self.cards.iter().find(|c| c.has_key(key))
    }

    /// First entry called `name` (ignoring case).
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.is_named(name))
    }

    /// Uncommitted copies of this card (0 when absent).
    #[must_use]
    pub fn units_of(&self, key: &CardKey) -> u32 {
        self.find_by_key(key).map_or(0, |c| c.amount)
    }

    /// Entries sorted by name, ignoring case.
    ///
    /// The sort is stable and storage order is left alone.
    #[must_use]
    pub fn list_sorted_by_name(&self) -> Vec<&Card> {
        let mut sorted: Vec<&Card> = self.cards.iter().collect();
        sorted.sort_by(|a, b| cmp_names(a, b));
        sorted
    }

    /// Change an entry's amount by `delta`.
    ///
    /// The entry is dropped if the result is zero or less. Returns the new
    /// amount.
    pub fn adjust_amount(&mut self, key: &CardKey, delta: i64) -> Result<u32> {
        let index = self
            .position(key)
            .ok_or_else(|| InventoryError::not_found("collection", key.name()))?;

        let card = &mut self.cards[index];
        let updated = i64::from(card.amount)
            .checked_add(delta)
            .ok_or_else(|| InventoryError::invalid(format!("cannot change amount by {delta}")))?;
        if updated <= 0 {
            let removed = self.cards.remove(index);
            tracing::debug!(card = %removed.name, "collection entry removed (amount adjusted to 0)");
            return Ok(0);
        }

        card.amount = u32::try_from(updated)
            .map_err(|_| InventoryError::invalid(format!("amount {updated} is too large")))?;
        tracing::debug!(card = %card.name, amount = card.amount, "collection amount adjusted");
        Ok(card.amount)
    }

    /// Commit one copy to a container.
    ///
    /// Returns a single-copy card for the container. The entry stays in the
    /// collection even when its amount drops to zero.
    pub fn take_unit(&mut self, key: &CardKey) -> Result<Card> {
        let card = self
            .cards
            .iter_mut()
            .find(|c| c.has_key(key))
            .ok_or_else(|| InventoryError::not_found("collection", key.name()))?;

        if card.amount == 0 {
            return Err(InventoryError::Unavailable {
                name: card.name.clone(),
            });
        }

        card.amount -= 1;
        tracing::debug!(card = %card.name, remaining = card.amount, "unit checked out");
        Ok(card.copy_with_amount(1))
    }

    /// Hand one copy back from a container.
    ///
    /// Increments the matching entry, or appends a single-copy entry when
    /// the card is no longer listed.
    pub fn return_unit(&mut self, card: &Card) -> MergeResult {
        self.add_card(card.copy_with_amount(1))
    }

    /// List a card with zero copies if it is not already listed.
    ///
    /// Used for cards that arrive straight into a container.
    pub fn record_seen(&mut self, card: &Card) -> bool {
        if self.find_by_match(card).is_some() {
            return false;
        }
        tracing::debug!(card = %card.name, "collection placeholder recorded");
        self.cards.push(card.copy_with_amount(0));
        true
    }

    /// Drop the matching entry if it has no copies left.
    pub fn prune_if_empty(&mut self, key: &CardKey) -> bool {
        match self.position(key) {
            Some(index) if self.cards[index].amount == 0 => {
                let removed = self.cards.remove(index);
                tracing::debug!(card = %removed.name, "collection placeholder pruned");
                true
            }
            _ => false,
        }
    }

    fn position(&self, key: &CardKey) -> Option<usize> {
        self.cards.iter().position(|c| c.has_key(key))
    }
}
