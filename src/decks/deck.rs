//! Decks: small, name-unique card lists for play.
//!
//! A deck holds at most `capacity` cards (10 by default), never two with the
//! same name, and each entry is exactly one physical card. Sellable decks
//! can also be liquidated for currency.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Collection};
use crate::core::config::{FillState, InventoryConfig, DEFAULT_DECK_CAPACITY};
use crate::core::error::{InventoryError, Result};

/// Inline storage sized for a default deck.
pub type DeckCards = SmallVec<[Card; DEFAULT_DECK_CAPACITY]>;

/// Whether a deck can be sold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckKind {
    #[default]
    Standard,
    Sellable,
}

impl DeckKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            DeckKind::Standard => "Deck",
            DeckKind::Sellable => "Sellable Deck",
        }
    }
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named deck.
///
/// ## Example
///
/// ```
/// use card_ledger::cards::{Card, Rarity, Variant};
/// use card_ledger::decks::Deck;
///
/// let mut deck = Deck::new("D1");
/// let bolt = Card::new("Bolt", Rarity::Common, Variant::Normal, 1.0).unwrap();
/// let foil = Card::new("bolt", Rarity::Rare, Variant::FullArt, 8.0).unwrap();
///
/// deck.add_card(&bolt).unwrap();
/// assert!(deck.add_card(&foil).is_err()); // one copy per name
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    name: String,
    kind: DeckKind,
    capacity: usize,
    cards: DeckCards,
}

impl Deck {
    /// Create an empty, non-sellable deck.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, DeckKind::Standard, &InventoryConfig::default())
    }

    /// Create an empty sellable deck.
    pub fn sellable(name: impl Into<String>) -> Self {
        Self::with_config(name, DeckKind::Sellable, &InventoryConfig::default())
    }

    /// Create an empty deck using the limits in `config`.
    pub fn with_config(name: impl Into<String>, kind: DeckKind, config: &InventoryConfig) -> Self {
        Self {
            name: name.into(),
            kind,
            capacity: config.deck_capacity,
            cards: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    #[must_use]
    pub fn is_sellable(&self) -> bool {
        self.kind == DeckKind::Sellable
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    #[must_use]
    pub fn fill_state(&self) -> FillState {
        FillState::of(self.cards.len(), self.capacity)
    }

    /// Sum of variant-adjusted values.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.cards.iter().map(Card::value).sum()
    }

    /// Card called `name` (ignoring case).
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.is_named(name))
    }

    /// Add one copy of `card`.
    ///
    /// Fails with `CapacityExceeded` when the deck is full and with
    /// `DuplicateCard` when a card of the same name (any rarity or variant)
    /// is already in it.
    pub fn add_card(&mut self, card: &Card) -> Result<()> {
        if self.is_full() {
            return Err(InventoryError::CapacityExceeded {
                container: self.label(),
                capacity: self.capacity,
            });
        }
        if self.find_by_name(card.name()).is_some() {
            return Err(InventoryError::DuplicateCard {
                deck: self.name.clone(),
                name: card.name().to_string(),
            });
        }

        self.cards.push(card.copy_with_amount(1));
        tracing::debug!(deck = %self.name, card = %card.name(), "card added to deck");
        Ok(())
    }

    /// Remove the card called `name` and return it to the collection.
    ///
    /// Returns whether a card was found.
    pub fn remove_card(&mut self, name: &str, collection: &mut Collection) -> bool {
        match self.take_card(name) {
            Some(card) => {
                collection.return_unit(&card);
                true
            }
            None => false,
        }
    }

    /// Remove the card called `name` without returning it anywhere.
    pub fn take_card(&mut self, name: &str) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.is_named(name))?;
        let card = self.cards.remove(index);
        tracing::debug!(deck = %self.name, card = %card.name(), "card removed from deck");
        Some(card)
    }

    /// Return every card to the collection and empty the deck.
    ///
    /// Returns the number of cards returned.
    pub fn return_all(&mut self, collection: &mut Collection) -> usize {
        let returned = self.cards.len();
        for card in self.cards.drain(..) {
            collection.return_unit(&card);
        }
        tracing::debug!(deck = %self.name, returned, "deck returned to collection");
        returned
    }

    /// Liquidate the deck.
    ///
    /// Pays the sum of the cards' variant-adjusted values, empties the deck
    /// and prunes the cards' zero-amount collection placeholders. Only
    /// sellable decks can be sold.
    pub fn sell(&mut self, collection: &mut Collection) -> Result<f64> {
        if !self.is_sellable() {
            return Err(InventoryError::NotSellable {
                container: self.label(),
            });
        }

        let payout = self.total_value();
        for card in self.cards.drain(..) {
            collection.prune_if_empty(&card.key());
        }

        tracing::info!(deck = %self.name, payout, "deck sold");
        Ok(payout)
    }

    fn label(&self) -> String {
        format!("deck {}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rarity, Variant};

    fn common(name: &str, value: f64) -> Card {
        Card::new(name, Rarity::Common, Variant::Normal, value).unwrap()
    }

    #[test]
    fn test_add_and_capacity() {
        let mut deck = Deck::new("D1");
        for i in 0..10 {
            deck.add_card(&common(&format!("Card {}", i), 1.0)).unwrap();
        }
        assert!(deck.is_full());
        assert_eq!(deck.fill_state(), FillState::Full);

        let before = deck.clone();
        assert!(matches!(
            deck.add_card(&common("Card 10", 1.0)),
            Err(InventoryError::CapacityExceeded { capacity: 10, .. })
        ));
        assert_eq!(deck, before);
    }

    #[test]
    fn test_duplicate_name_any_variant() {
        let mut deck = Deck::new("D1");
        deck.add_card(&Card::new("Drake", Rarity::Rare, Variant::Normal, 3.0).unwrap())
            .unwrap();

        let alt = Card::new("DRAKE", Rarity::Legendary, Variant::AltArt, 3.0).unwrap();
        assert_eq!(
            deck.add_card(&alt),
            Err(InventoryError::DuplicateCard {
                deck: "D1".to_string(),
                name: "DRAKE".to_string(),
            })
        );
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_entries_are_single_copies() {
        let mut deck = Deck::new("D1");
        deck.add_card(&common("Bolt", 1.0).with_amount(4)).unwrap();
        assert_eq!(deck.cards()[0].amount(), 1);
    }

    #[test]
    fn test_remove_returns_to_collection() {
        let mut deck = Deck::new("D1");
        let mut collection = Collection::new();
        let bolt = common("Bolt", 1.0);
        deck.add_card(&bolt).unwrap();

        assert!(deck.remove_card("bolt", &mut collection));
        assert!(deck.is_empty());
        assert_eq!(collection.units_of(&bolt.key()), 1);

        assert!(!deck.remove_card("bolt", &mut collection));
        assert_eq!(collection.units_of(&bolt.key()), 1);
    }

    #[test]
    fn test_plain_deck_cannot_sell() {
        let mut deck = Deck::new("D1");
        let mut collection = Collection::new();
        deck.add_card(&common("Bolt", 1.0)).unwrap();

        assert!(matches!(
            deck.sell(&mut collection),
            Err(InventoryError::NotSellable { .. })
        ));
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_sell_uses_variant_value() {
        let mut deck = Deck::sellable("S1");
        let mut collection = Collection::new();
        deck.add_card(&common("Bolt", 5.0)).unwrap();
        deck.add_card(&Card::new("Drake", Rarity::Rare, Variant::FullArt, 5.0).unwrap())
            .unwrap();

        assert_eq!(deck.sell(&mut collection), Ok(15.0));
        assert!(deck.is_empty());
    }

    #[test]
    fn test_return_all() {
        let mut deck = Deck::new("D1");
        let mut collection = Collection::new();
        deck.add_card(&common("Bolt", 1.0)).unwrap();
        deck.add_card(&common("Shock", 1.0)).unwrap();

        assert_eq!(deck.return_all(&mut collection), 2);
        assert!(deck.is_empty());
        assert_eq!(collection.total_units(), 2);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DeckKind::Sellable.to_string(), "Sellable Deck");
        assert!(Deck::sellable("S").is_sellable());
        assert!(!Deck::new("D").is_sellable());
    }
}
