//! Inventory: the collection, wallet, binders and decks in one place.
//!
//! `Inventory` moves cards between the collection and containers and keeps
//! the books straight:
//! - Moving a card into a binder or deck checks one copy out of the
//!   collection.
//! - Removing it, or deleting the container, hands the copies back.
//! - Selling pays the wallet and destroys the copies.
//! - Trading swaps one binder copy for a new card.
//!
//! Binder and deck names are unique, ignoring case.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::binders::{Binder, BinderKind, TradeReceipt};
use crate::cards::definition::names_match;
use crate::cards::{Card, CardKey, Collection, MergeResult};
use crate::core::config::InventoryConfig;
use crate::core::error::{InventoryError, Result};
use crate::core::wallet::Wallet;
use crate::decks::{Deck, DeckKind};

/// Everything the player owns.
///
/// ## Usage
///
/// ```
/// use card_ledger::binders::BinderKind;
/// use card_ledger::cards::{Card, Rarity, Variant};
/// use card_ledger::inventory::Inventory;
///
/// let mut inventory = Inventory::new();
/// let drake = Card::new("Drake", Rarity::Legendary, Variant::FullArt, 10.0).unwrap();
/// inventory.add_card(drake.clone());
///
/// inventory.create_binder("Rares", BinderKind::Rares).unwrap();
/// inventory.move_to_binder("rares", &drake.key()).unwrap();
///
/// let payout = inventory.sell_binder("Rares").unwrap();
/// assert_eq!(payout, 20.0);
/// assert_eq!(inventory.wallet().balance(), 20.0);
/// assert!(inventory.collection().is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    config: InventoryConfig,
    collection: Collection,
    wallet: Wallet,
    binders: Vec<Binder>,
    decks: Vec<Deck>,
}

impl Inventory {
    /// Create an empty inventory with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty inventory whose containers use `config`.
    #[must_use]
    pub fn with_config(config: InventoryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Direct access for edits the inventory does not wrap.
    pub fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    #[must_use]
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    #[must_use]
    pub fn binders(&self) -> &[Binder] {
        &self.binders
    }

    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Binder called `name` (ignoring case).
    #[must_use]
    pub fn binder(&self, name: &str) -> Option<&Binder> {
        self.binder_index(name).map(|i| &self.binders[i])
    }

    /// Deck called `name` (ignoring case).
    #[must_use]
    pub fn deck(&self, name: &str) -> Option<&Deck> {
        self.deck_index(name).map(|i| &self.decks[i])
    }

    // =========================================================================
    // Collection
    // =========================================================================

    /// Add a card to the collection.
    pub fn add_card(&mut self, card: Card) -> MergeResult {
        self.collection.add_card(card)
    }

    /// Change a collection entry's amount, dropping it at zero.
    pub fn adjust_card_amount(&mut self, key: &CardKey, delta: i64) -> Result<u32> {
        self.collection.adjust_amount(key, delta)
    }

    /// Sell `count` uncommitted copies straight from the collection.
    ///
    /// Returns the proceeds. The entry is dropped when no copies remain.
    pub fn sell_card(&mut self, key: &CardKey, count: u32) -> Result<f64> {
        let card = self
            .collection
            .find_by_key(key)
            .ok_or_else(|| InventoryError::not_found("collection", key.name()))?;

        if count == 0 || count > card.amount() {
            return Err(InventoryError::invalid(format!(
                "cannot sell {count} of {} (have {})",
                card.name(),
                card.amount()
            )));
        }

        let proceeds = card.price_for(count);
        let name = card.name().to_string();
        self.collection.adjust_amount(key, -i64::from(count))?;
        self.wallet.deposit(proceeds);

        tracing::info!(card = %name, count, proceeds, "card sold from collection");
        Ok(proceeds)
    }

    // =========================================================================
    // Binders
    // =========================================================================

    /// Create an empty binder.
    pub fn create_binder(&mut self, name: &str, kind: BinderKind) -> Result<&Binder> {
        let name = self.check_new_name(name, self.binder_index(name).is_some())?;

        self.binders.push(Binder::with_config(name, kind, &self.config));
        tracing::info!(binder = %name, %kind, "binder created");
        Ok(&self.binders[self.binders.len() - 1])
    }

    /// Move one copy from the collection into a binder.
    pub fn move_to_binder(&mut self, binder: &str, key: &CardKey) -> Result<()> {
        let index = self.require_binder(binder)?;
        let card = self.available_copy(key)?;

        self.binders[index].add_card(&card)?;
        self.collection.take_unit(key)?;
        Ok(())
    }

    /// Take one copy of `card_name` out of a binder and back into the collection.
    pub fn return_from_binder(&mut self, binder: &str, card_name: &str) -> Result<()> {
        let index = self.require_binder(binder)?;
        let binder = &mut self.binders[index];

        let unit = binder
            .remove_unit(card_name)
            .ok_or_else(|| InventoryError::not_found(format!("binder {}", binder.name()), card_name))?;
        self.collection.return_unit(&unit);
        Ok(())
    }

    /// Delete a binder, returning every copy to the collection.
    pub fn delete_binder(&mut self, name: &str) -> Result<Binder> {
        let index = self.require_binder(name)?;

        let mut binder = self.binders.remove(index);
        let returned = binder.return_all(&mut self.collection);
        tracing::info!(binder = %binder.name(), returned, "binder deleted");
        Ok(binder)
    }

    /// Trade one copy of `outgoing` in a trade binder for `incoming`.
    ///
    /// `confirm` is asked when the value gap exceeds the configured threshold.
    pub fn trade<F>(
        &mut self,
        binder: &str,
        outgoing: &str,
        incoming: Card,
        confirm: F,
    ) -> Result<TradeReceipt>
    where
        F: FnOnce(f64) -> bool,
    {
        let index = self.require_binder(binder)?;
        self.binders[index].trade(outgoing, incoming, &mut self.collection, confirm)
    }

    /// Sell a sell binder and remove it.
    ///
    /// Returns the payout, which is credited to the wallet.
    pub fn sell_binder(&mut self, name: &str) -> Result<f64> {
        let index = self.require_binder(name)?;

        let payout = self.binders[index].sell(&mut self.collection)?;
        let binder = self.binders.remove(index);
        self.wallet.deposit(payout);

        tracing::info!(binder = %binder.name(), payout, "binder sold and removed");
        Ok(payout)
    }

    // =========================================================================
    // Decks
    // =========================================================================

    /// Create an empty deck.
    pub fn create_deck(&mut self, name: &str, kind: DeckKind) -> Result<&Deck> {
        let name = self.check_new_name(name, self.deck_index(name).is_some())?;

        self.decks.push(Deck::with_config(name, kind, &self.config));
        tracing::info!(deck = %name, %kind, "deck created");
        Ok(&self.decks[self.decks.len() - 1])
    }

    /// Move one copy from the collection into a deck.
    pub fn move_to_deck(&mut self, deck: &str, key: &CardKey) -> Result<()> {
        let index = self.require_deck(deck)?;
        let card = self.available_copy(key)?;

        self.decks[index].add_card(&card)?;
        self.collection.take_unit(key)?;
        Ok(())
    }

    /// Take `card_name` out of a deck and back into the collection.
    pub fn return_from_deck(&mut self, deck: &str, card_name: &str) -> Result<()> {
        let index = self.require_deck(deck)?;
        let deck = &mut self.decks[index];

        if deck.remove_card(card_name, &mut self.collection) {
            Ok(())
        } else {
            Err(InventoryError::not_found(format!("deck {}", deck.name()), card_name))
        }
    }

    /// Delete a deck, returning every card to the collection.
    pub fn delete_deck(&mut self, name: &str) -> Result<Deck> {
        let index = self.require_deck(name)?;

        let mut deck = self.decks.remove(index);
        let returned = deck.return_all(&mut self.collection);
        tracing::info!(deck = %deck.name(), returned, "deck deleted");
        Ok(deck)
    }

    /// Sell a sellable deck and remove it.
    ///
    /// Returns the payout, which is credited to the wallet.
    pub fn sell_deck(&mut self, name: &str) -> Result<f64> {
        let index = self.require_deck(name)?;

        let payout = self.decks[index].sell(&mut self.collection)?;
        let deck = self.decks.remove(index);
        self.wallet.deposit(payout);

        tracing::info!(deck = %deck.name(), payout, "deck sold and removed");
        Ok(payout)
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Copies held per card, across the collection, binders and decks.
    ///
    /// Cards with no copies anywhere are left out.
    #[must_use]
    pub fn holdings(&self) -> FxHashMap<CardKey, u32> {
        let mut totals: FxHashMap<CardKey, u32> = FxHashMap::default();

        let held = self
            .collection
            .iter()
            .chain(self.binders.iter().flat_map(|b| b.cards().iter()))
            .chain(self.decks.iter().flat_map(|d| d.cards().iter()));
        for card in held.filter(|c| c.amount() > 0) {
            *totals.entry(card.key()).or_default() += card.amount();
        }

        totals
    }

    /// Value of every copy held anywhere.
    #[must_use]
    pub fn card_value(&self) -> f64 {
        self.collection.total_value()
            + self.binders.iter().map(Binder::total_value).sum::<f64>()
            + self.decks.iter().map(Deck::total_value).sum::<f64>()
    }

    /// Wallet balance plus the value of every card held.
    #[must_use]
    pub fn net_worth(&self) -> f64 {
        self.wallet.balance() + self.card_value()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn binder_index(&self, name: &str) -> Option<usize> {
        self.binders.iter().position(|b| names_match(b.name(), name))
    }

    fn deck_index(&self, name: &str) -> Option<usize> {
        self.decks.iter().position(|d| names_match(d.name(), name))
    }

    fn require_binder(&self, name: &str) -> Result<usize> {
        self.binder_index(name)
            .ok_or_else(|| InventoryError::not_found("binders", name))
    }

    fn require_deck(&self, name: &str) -> Result<usize> {
        self.deck_index(name)
            .ok_or_else(|| InventoryError::not_found("decks", name))
    }

    fn check_new_name<'a>(&self, name: &'a str, taken: bool) -> Result<&'a str> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::invalid("name cannot be empty"));
        }
        if taken {
            return Err(InventoryError::DuplicateName {
                name: name.to_string(),
            });
        }
        Ok(name)
    }

    /// Snapshot of a collection card that has an uncommitted copy.
    fn available_copy(&self, key: &CardKey) -> Result<Card> {
        let card = self
            .collection
            .find_by_key(key)
            .ok_or_else(|| InventoryError::not_found("collection", key.name()))?;
        if card.amount() == 0 {
            return Err(InventoryError::Unavailable {
                name: card.name().to_string(),
            });
        }
        Ok(card.copy_with_amount(1))
    }
}
