//! d20 checks.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::dice::Die;

/// A d20 rolled against a precomputed bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRoll {
    /// What was rolled for, e.g. a skill name.
    pub label: String,
    /// The face showing on the d20.
    pub natural: u32,
    /// Bonus added to the die.
    pub bonus: i64,
}

impl CheckRoll {
    /// Natural roll plus bonus.
    pub fn total(&self) -> i64 {
        i64::from(self.natural).saturating_add(self.bonus)
    }
}

impl fmt::Display for CheckRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.bonus < 0 { '-' } else { '+' };
        write!(
            f,
            "{}: {} {sign} {} = {}",
            self.label,
            self.natural,
            self.bonus.unsigned_abs(),
            self.total()
        )
    }
}

/// Roll a d20 and add `bonus`.
pub fn roll_check(label: impl Into<String>, bonus: i64, rng: &mut impl Rng) -> CheckRoll {
    CheckRoll {
        label: label.into(),
        natural: Die::D20.roll(rng),
        bonus,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn total_adds_bonus() {
        let roll = CheckRoll {
            label: "Stealth".into(),
            natural: 14,
            bonus: 5,
        };
        assert_eq!(roll.total(), 19);
        assert_eq!(roll.to_string(), "Stealth: 14 + 5 = 19");
    }

    #[test]
    fn negative_bonus_display() {
        let roll = CheckRoll {
            label: "Luck".into(),
            natural: 3,
            bonus: -2,
        };
        assert_eq!(roll.to_string(), "Luck: 3 - 2 = 1");
    }

    #[test]
    fn extreme_bonus_saturates() {
        let roll = CheckRoll {
            label: "Mind".into(),
            natural: 20,
            bonus: i64::MAX,
        };
        assert_eq!(roll.total(), i64::MAX);

        let roll = CheckRoll {
            label: "Mind".into(),
            natural: 1,
            bonus: i64::MIN,
        };
        assert_eq!(roll.to_string(), format!("Mind: 1 - 9223372036854775808 = {}", i64::MIN + 1));
    }

    #[test]
    fn seeded_rolls_repeat() {
        let a = roll_check("Alchemy", 7, &mut StdRng::seed_from_u64(11));
        let b = roll_check("Alchemy", 7, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
        assert!((1..=20).contains(&a.natural));
        assert_eq!(a.total(), i64::from(a.natural) + 7);
    }
}
