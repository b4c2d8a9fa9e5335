//! Dice types, pools, and rolling.
//!
//! Supports standard polyhedral dice (d4 through d100) and custom dice.

pub mod pool;
pub mod roll;

pub use pool::DicePool;
pub use roll::{DieResult, RollResult};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DiceError, DiceResult};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// The die with `sides` faces. Fewer than two sides is rejected.
    pub fn from_sides(sides: u32) -> DiceResult<Self> {
        Ok(match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n if n >= 2 => Self::Custom(n),
            n => return Err(DiceError::InvalidDie(format!("d{n}"))),
        })
    }

    /// Parse a die from a string like "d20", "d6", "d100".
    pub fn parse(s: &str) -> DiceResult<Self> {
        let s = s.trim().to_lowercase();
        let sides = s
            .strip_prefix('d')
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or_else(|| DiceError::InvalidDie(s.clone()))?;
        Self::from_sides(sides)
    }

    /// Roll this die once.
    pub fn roll(self, rng: &mut impl Rng) -> u32 {
        rng.random_range(1..=self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
