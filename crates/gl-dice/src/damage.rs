//! Weapon damage expressions such as `1d8+4`.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::{DicePool, Die, RollResult};
use crate::error::{DiceError, DiceResult};

/// Most dice a single expression may roll.
pub const MAX_DICE: u32 = 100;

/// `count` dice of one type plus a flat bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageExpression {
    /// Number of dice rolled.
    pub count: u32,
    /// Die type.
    pub die: Die,
    /// Flat bonus, possibly negative.
    pub bonus: i64,
}

impl Default for DamageExpression {
    /// One d6, no bonus.
    fn default() -> Self {
        Self {
            count: 1,
            die: Die::D6,
            bonus: 0,
        }
    }
}

impl DamageExpression {
    /// Parse `NdM`, `NdM+K`, or `NdM-K`. Whitespace is ignored and `dM`
    /// means one die.
    pub fn parse(text: &str) -> DiceResult<Self> {
        let malformed = || DiceError::MalformedDamageExpression(text.to_string());
        let s = normalize(text);
        let (count, rest) = s.split_once('d').ok_or_else(malformed)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| malformed())?
        };
        if count == 0 || count > MAX_DICE {
            return Err(DiceError::InvalidDie(format!("{count} dice")));
        }

        let (sides, bonus) = match rest.find(['+', '-']) {
            Some(at) => {
                let bonus = rest[at..].parse::<i64>().map_err(|_| malformed())?;
                (&rest[..at], bonus)
            }
            None => (rest, 0),
        };
        let sides = sides.parse::<u32>().map_err(|_| malformed())?;
        Ok(Self {
            count,
            die: Die::from_sides(sides)?,
            bonus,
        })
    }

    /// Parse as much of `text` as possible. Each unreadable part falls back
    /// on its own: one die, a d6, no bonus.
    pub fn parse_lenient(text: &str) -> Self {
        match Self::parse(text) {
            Ok(expr) => expr,
            Err(e) => {
                let expr = Self::salvage(&normalize(text));
                tracing::warn!(error = %e, fallback = %expr, "damage expression repaired");
                expr
            }
        }
    }

    fn salvage(s: &str) -> Self {
        let fallback = Self::default();
        let (dice, bonus) = match s.find(['+', '-']) {
            Some(at) if at > 0 => (&s[..at], Some(&s[at..])),
            _ => (s, None),
        };
        let (count, sides) = dice.split_once('d').unwrap_or((dice, ""));
        Self {
            count: leading_number(count)
                .and_then(|n| u32::try_from(n).ok())
                .filter(|n| (1..=MAX_DICE).contains(n))
                .unwrap_or(fallback.count),
            die: leading_number(sides)
                .and_then(|n| u32::try_from(n).ok())
                .and_then(|n| Die::from_sides(n).ok())
                .unwrap_or(fallback.die),
            bonus: bonus.and_then(leading_number).unwrap_or(fallback.bonus),
        }
    }

    /// The dice part as a pool.
    pub fn pool(&self) -> DicePool {
        DicePool::new().add(self.die, self.count)
    }

    /// Roll the expression.
    pub fn roll(&self, rng: &mut impl Rng) -> DamageRoll {
        DamageRoll {
            expression: *self,
            dice: self.pool().roll(rng),
        }
    }
}

impl fmt::Display for DamageExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.bonus {
            0 => Ok(()),
            b if b > 0 => write!(f, "+{b}"),
            b => write!(f, "{b}"),
        }
    }
}

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}

/// The integer at the start of `s`, with an optional sign.
fn leading_number(s: &str) -> Option<i64> {
    let digits_from = usize::from(s.starts_with(['+', '-']));
    let end = s[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_from);
    s[..end].parse().ok()
}

/// The outcome of a damage roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageRoll {
    /// What was rolled.
    pub expression: DamageExpression,
    /// Individual dice.
    pub dice: RollResult,
}

impl DamageRoll {
    /// Dice total plus bonus, saturating at the `i64` bounds.
    pub fn total(&self) -> i64 {
        i64::try_from(self.dice.total())
            .unwrap_or(i64::MAX)
            .saturating_add(self.expression.bonus)
    }
}

impl fmt::Display for DamageRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.expression, self.dice.breakdown())?;
        match self.expression.bonus {
            0 => {}
            b if b > 0 => write!(f, " + {b}")?,
            b => write!(f, " - {}", b.unsigned_abs())?,
        }
        write!(f, " = {}", self.total())
    }
}
