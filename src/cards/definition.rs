//! Card entries.
//!
//! A `Card` is one line of inventory: what the card is (name, rarity,
//! variant, base value) and how many copies the owning container holds.
//! Every container keeps its own `Card` values; nothing is shared between
//! the collection, binders and decks.
//!
//! Two cards *match* when their `CardKey`s are equal: same name ignoring
//! case, same rarity, same variant. Matching is the dedup rule everywhere.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::attributes::{Rarity, Variant};
use crate::core::error::{InventoryError, Result};

/// Match identity of a card: (name, rarity, variant), name case-folded.
///
/// ```
/// use card_ledger::cards::{Card, CardKey, Rarity, Variant};
///
/// let a = Card::new("Lightning Bolt", Rarity::Common, Variant::Normal, 1.0).unwrap();
/// let b = Card::new("LIGHTNING BOLT", Rarity::Common, Variant::Normal, 4.0).unwrap();
///
/// assert_eq!(a.key(), b.key());
/// assert_eq!(a.key(), CardKey::new("lightning bolt", Rarity::Common, Variant::Normal));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "KeyRecord")]
pub struct CardKey {
    name: String,
    rarity: Rarity,
    variant: Variant,
}

/// Wire form of a `CardKey`; the name is folded on the way in.
#[derive(Deserialize)]
struct KeyRecord {
    name: String,
    rarity: Rarity,
    variant: Variant,
}

impl From<KeyRecord> for CardKey {
    fn from(record: KeyRecord) -> Self {
        CardKey::new(&record.name, record.rarity, record.variant)
    }
}

impl CardKey {
    /// Build a key; the name is case-folded.
    pub fn new(name: &str, rarity: Rarity, variant: Variant) -> Self {
        Self {
            name: fold(name),
            rarity,
            variant,
        }
    }

    /// Case-folded name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.rarity, self.variant)
    }
}

/// A card entry with a copy count.
///
/// ## Example
///
/// ```
/// use card_ledger::cards::{Card, Rarity, Variant};
///
/// let drake = Card::new("Drake", Rarity::Legendary, Variant::FullArt, 10.0)
///     .unwrap()
///     .with_amount(2);
///
/// assert_eq!(drake.value(), 20.0);
/// assert_eq!(drake.total_value(), 40.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    pub(crate) name: String,
    pub(crate) rarity: Rarity,
    pub(crate) variant: Variant,
    pub(crate) base_value: f64,
    pub(crate) amount: u32,
}

/// Wire form of a `Card`; checked by `Card::new` on the way in.
#[derive(Deserialize)]
struct CardRecord {
    name: String,
    rarity: Rarity,
    variant: Variant,
    base_value: f64,
    amount: u32,
}

impl TryFrom<CardRecord> for Card {
    type Error = InventoryError;

    fn try_from(record: CardRecord) -> Result<Self> {
        Ok(Card::new(record.name, record.rarity, record.variant, record.base_value)?
            .with_amount(record.amount))
    }
}

impl Card {
    /// Create a card with amount 1.
    ///
    /// Fails with `InvalidInput` if the name is blank, the base value is
    /// negative or not finite, or a Common/Uncommon card is given a
    /// non-Normal variant. The name is trimmed.
    pub fn new(
        name: impl Into<String>,
        rarity: Rarity,
        variant: Variant,
        base_value: f64,
    ) -> Result<Self> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::invalid("card name cannot be empty"));
        }
        if !base_value.is_finite() || base_value < 0.0 {
            return Err(InventoryError::invalid(format!(
                "card value must be a non-negative number, got {base_value}"
            )));
        }
        if variant.is_special() && !rarity.allows_variants() {
            return Err(InventoryError::invalid(format!(
                "{rarity} cards cannot have the {variant} variant"
            )));
        }

        Ok(Self {
            name: name.to_string(),
            rarity,
            variant,
            base_value,
            amount: 1,
        })
    }

    /// Create a card from raw user text for the value field.
    ///
    /// ```
    /// use card_ledger::cards::{Card, Rarity, Variant};
    ///
    /// let card = Card::from_input("  Bolt ", "1.50", Rarity::Common, Variant::Normal).unwrap();
    /// assert_eq!(card.name(), "Bolt");
    /// assert_eq!(card.base_value(), 1.5);
    ///
    /// assert!(Card::from_input("Bolt", "cheap", Rarity::Common, Variant::Normal).is_err());
    /// ```
    pub fn from_input(name: &str, value: &str, rarity: Rarity, variant: Variant) -> Result<Self> {
        let parsed: f64 = value
            .trim()
            .parse()
            .map_err(|_| InventoryError::invalid(format!("'{}' is not a number", value.trim())))?;
        Self::new(name, rarity, variant, parsed)
    }

    /// Set the copy count (builder pattern).
    #[must_use]
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    /// A copy of this card holding `amount` units.
    #[must_use]
    pub fn copy_with_amount(&self, amount: u32) -> Self {
        self.clone().with_amount(amount)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.rarity
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Value before the variant multiplier.
    #[must_use]
    pub fn base_value(&self) -> f64 {
        self.base_value
    }

    /// Copies held by the owning container.
    #[must_use]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Value of one copy: base value times the variant multiplier.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.base_value * self.variant.multiplier()
    }

    /// Value of every copy held.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.value() * f64::from(self.amount)
    }

    /// Price of `count` copies.
    #[must_use]
    pub fn price_for(&self, count: u32) -> f64 {
        self.value() * f64::from(count)
    }

    /// Match identity.
    #[must_use]
    pub fn key(&self) -> CardKey {
        CardKey::new(&self.name, self.rarity, self.variant)
    }

    /// Same name (ignoring case), rarity and variant?
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.rarity == other.rarity
            && self.variant == other.variant
            && names_match(&self.name, &other.name)
    }

    /// Does this card have the given key?
    #[must_use]
    pub fn has_key(&self, key: &CardKey) -> bool {
        self.rarity == key.rarity && self.variant == key.variant && fold(&self.name) == key.name
    }

    /// Is this card called `name` (ignoring case)?
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x{} ({}, {}) - ${:.2}",
            self.name,
            self.amount,
            self.rarity,
            self.variant,
            self.value()
        )
    }
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Case-insensitive name equality.
pub(crate) fn names_match(a: &str, b: &str) -> bool {
    fold(a) == fold(b)
}

/// Case-insensitive name ordering, for listings.
pub(crate) fn cmp_names(a: &Card, b: &Card) -> Ordering {
    fold(&a.name).cmp(&fold(&b.name))
}
