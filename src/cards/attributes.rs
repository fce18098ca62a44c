//! Card attributes: rarity and visual variant.
//!
//! ## Rarity
//!
//! `Common`, `Uncommon`, `Rare`, `Legendary`. Only Rare and Legendary cards
//! can come in a non-Normal variant.
//!
//! ## Variant
//!
//! Each variant scales a card's base value:
//!
//! | Variant       | Multiplier |
//! |---------------|------------|
//! | `Normal`      | 1.0        |
//! | `ExtendedArt` | 1.5        |
//! | `FullArt`     | 2.0        |
//! | `AltArt`      | 3.0        |

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::InventoryError;

/// Card rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    /// All rarities, lowest first.
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    /// Map a 1-based menu choice (1 = Common ... 4 = Legendary).
    pub fn from_choice(choice: u8) -> Result<Self, InventoryError> {
        match choice {
            1 => Ok(Rarity::Common),
            2 => Ok(Rarity::Uncommon),
            3 => Ok(Rarity::Rare),
            4 => Ok(Rarity::Legendary),
            _ => Err(InventoryError::invalid(format!(
                "rarity choice must be between 1 and 4, got {choice}"
            ))),
        }
    }

    /// Can cards of this rarity have a non-Normal variant?
    #[must_use]
    pub const fn allows_variants(self) -> bool {
        matches!(self, Rarity::Rare | Rarity::Legendary)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rarity {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Rarity::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InventoryError::invalid(format!("unknown rarity '{wanted}'")))
    }
}

/// Visual variant of a card, with its value multiplier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    Normal,
    ExtendedArt,
    FullArt,
    AltArt,
}

impl Variant {
    /// All variants, cheapest first.
    pub const ALL: [Variant; 4] = [
        Variant::Normal,
        Variant::ExtendedArt,
        Variant::FullArt,
        Variant::AltArt,
    ];

    /// Map a 1-based menu choice (1 = Normal ... 4 = Alt Art).
    pub fn from_choice(choice: u8) -> Result<Self, InventoryError> {
        match choice {
            1 => Ok(Variant::Normal),
            2 => Ok(Variant::ExtendedArt),
            3 => Ok(Variant::FullArt),
            4 => Ok(Variant::AltArt),
            _ => Err(InventoryError::invalid(format!(
                "variant choice must be between 1 and 4, got {choice}"
            ))),
        }
    }

    /// Factor applied to a card's base value.
    #[must_use]
    pub const fn multiplier(self) -> f64 {
        match self {
            Variant::Normal => 1.0,
            Variant::ExtendedArt => 1.5,
            Variant::FullArt => 2.0,
            Variant::AltArt => 3.0,
        }
    }

    /// Is this anything other than `Normal`?
    #[must_use]
    pub const fn is_special(self) -> bool {
        !matches!(self, Variant::Normal)
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Variant::Normal => "Normal",
            Variant::ExtendedArt => "Extended Art",
            Variant::FullArt => "Full Art",
            Variant::AltArt => "Alt Art",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = InventoryError;

    /// Accepts the display name with spaces, hyphens or nothing between
    /// words ("Full Art", "full-art", "FullArt").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squash = |text: &str| -> String {
            text.chars()
                .filter(|c| !c.is_whitespace() && *c != '-')
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let wanted = squash(s);
        Variant::ALL
            .into_iter()
            .find(|v| squash(v.name()) == wanted)
            .ok_or_else(|| InventoryError::invalid(format!("unknown variant '{}'", s.trim())))
    }
}
