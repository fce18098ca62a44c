//! Binder kinds and their rules.
//!
//! Each kind resolves to a `BinderRules` capability record: which cards it
//! accepts, whether it trades or sells, and what it pays out on sale.
//!
//! | Kind        | Accepts                                 | Action | Sell x |
//! |-------------|-----------------------------------------|--------|--------|
//! | NonCurated  | anything                                | trade  | 1.0    |
//! | Pauper      | Common, Uncommon                        | sell   | 1.0    |
//! | Rares       | Rare, Legendary                         | sell   | 1.0    |
//! | Luxury      | non-Normal variants                     | sell   | 1.1    |
//! | Collector   | Rare/Legendary with a non-Normal variant| trade  | 1.0    |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rarity};
use crate::core::error::InventoryError;

/// What a binder is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinderAction {
    /// Cards are traded away one at a time.
    Trade,
    /// The whole binder is liquidated for currency.
    Sell,
}

/// Capability record for a binder kind.
#[derive(Clone, Copy, Debug)]
pub struct BinderRules {
    /// Content restriction.
    pub allow: fn(&Card) -> bool,
    /// Trade or sell.
    pub action: BinderAction,
    /// Applied to the total value when the binder is sold.
    pub sell_multiplier: f64,
}

impl BinderRules {
    /// Does this binder accept `card`?
    #[must_use]
    pub fn allows(&self, card: &Card) -> bool {
        (self.allow)(card)
    }

    #[must_use]
    pub fn is_tradeable(&self) -> bool {
        self.action == BinderAction::Trade
    }

    #[must_use]
    pub fn is_sellable(&self) -> bool {
        self.action == BinderAction::Sell
    }
}

fn any_card(_: &Card) -> bool {
    true
}

fn pauper_card(card: &Card) -> bool {
    matches!(card.rarity(), Rarity::Common | Rarity::Uncommon)
}

fn rare_card(card: &Card) -> bool {
    matches!(card.rarity(), Rarity::Rare | Rarity::Legendary)
}

fn luxury_card(card: &Card) -> bool {
    card.variant().is_special()
}

fn collector_card(card: &Card) -> bool {
    rare_card(card) && luxury_card(card)
}

/// Binder kind tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinderKind {
    #[default]
    NonCurated,
    Pauper,
    Rares,
    Luxury,
    Collector,
}

impl BinderKind {
    pub const ALL: [BinderKind; 5] = [
        BinderKind::NonCurated,
        BinderKind::Pauper,
        BinderKind::Rares,
        BinderKind::Luxury,
        BinderKind::Collector,
    ];

    /// Capability record for this kind.
    #[must_use]
    pub fn rules(self) -> BinderRules {
        match self {
            BinderKind::NonCurated => BinderRules {
                allow: any_card,
                action: BinderAction::Trade,
                sell_multiplier: 1.0,
            },
            BinderKind::Pauper => BinderRules {
                allow: pauper_card,
                action: BinderAction::Sell,
                sell_multiplier: 1.0,
            },
            BinderKind::Rares => BinderRules {
                allow: rare_card,
                action: BinderAction::Sell,
                sell_multiplier: 1.0,
            },
            BinderKind::Luxury => BinderRules {
                allow: luxury_card,
                action: BinderAction::Sell,
                sell_multiplier: 1.1,
            },
            BinderKind::Collector => BinderRules {
                allow: collector_card,
                action: BinderAction::Trade,
                sell_multiplier: 1.0,
            },
        }
    }

    /// Display name, e.g. "Pauper Binder".
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BinderKind::NonCurated => "Non-curated Binder",
            BinderKind::Pauper => "Pauper Binder",
            BinderKind::Rares => "Rares Binder",
            BinderKind::Luxury => "Luxury Binder",
            BinderKind::Collector => "Collector Binder",
        }
    }

    /// Map a 1-based menu choice, in the order of `ALL`.
    pub fn from_choice(choice: u8) -> Result<Self, InventoryError> {
        usize::from(choice)
            .checked_sub(1)
            .and_then(|i| BinderKind::ALL.get(i).copied())
            .ok_or_else(|| {
                InventoryError::invalid(format!("binder choice must be between 1 and 5, got {choice}"))
            })
    }
}

impl std::fmt::Display for BinderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinderKind {
    type Err = InventoryError;

    /// Accepts "Luxury", "luxury binder", "Non-curated", ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.strip_suffix(" binder").unwrap_or(&wanted);
        BinderKind::ALL
            .into_iter()
            .find(|k| {
                k.name()
                    .to_ascii_lowercase()
                    .strip_suffix(" binder")
                    .is_some_and(|base| base == wanted)
            })
            .ok_or_else(|| InventoryError::invalid(format!("unknown binder kind '{}'", s.trim())))
    }
}
