//! Coin denominations

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Units of currency, lowest to highest.
///
/// 100 of one denomination exchange for 1 of the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Denomination {
    /// Copper pieces
    #[serde(rename = "cp")]
    Copper,
    /// Silver pieces
    #[serde(rename = "sp")]
    Silver,
    /// Gold pieces
    #[serde(rename = "gp")]
    Gold,
    /// Platinum pieces
    #[serde(rename = "pp")]
    Platinum,
}

/// Units of a denomination that make one of the next higher
pub const EXCHANGE_RATE: u64 = 100;

impl Denomination {
    /// Lowest to highest
    pub const ASCENDING: [Denomination; 4] = [
        Denomination::Copper,
        Denomination::Silver,
        Denomination::Gold,
        Denomination::Platinum,
    ];

    /// Highest to lowest
    pub const DESCENDING: [Denomination; 4] = [
        Denomination::Platinum,
        Denomination::Gold,
        Denomination::Silver,
        Denomination::Copper,
    ];

    /// Two-letter abbreviation ("cp", "sp", "gp", "pp")
    pub fn abbrev(&self) -> &'static str {
        match self {
            Denomination::Copper => "cp",
            Denomination::Silver => "sp",
            Denomination::Gold => "gp",
            Denomination::Platinum => "pp",
        }
    }

    /// The denomination this one carries into, if any
    pub fn higher(&self) -> Option<Denomination> {
        match self {
            Denomination::Copper => Some(Denomination::Silver),
            Denomination::Silver => Some(Denomination::Gold),
            Denomination::Gold => Some(Denomination::Platinum),
            Denomination::Platinum => None,
        }
    }

    /// Worth of one coin in copper pieces
    pub fn copper_value(&self) -> u64 {
        match self {
            Denomination::Copper => 1,
            Denomination::Silver => EXCHANGE_RATE,
            Denomination::Gold => EXCHANGE_RATE * EXCHANGE_RATE,
            Denomination::Platinum => EXCHANGE_RATE * EXCHANGE_RATE * EXCHANGE_RATE,
        }
    }

    /// Exact (case-sensitive) lookup by abbreviation
    pub fn from_abbrev(abbrev: &str) -> Option<Denomination> {
        Denomination::ASCENDING
            .into_iter()
            .find(|d| d.abbrev() == abbrev)
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Denomination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Denomination::from_abbrev(&s.to_lowercase())
            .ok_or_else(|| Error::parse("unknown coin type", s))
    }
}

impl std::fmt::Display for Denomination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}
