//! Dice pool construction and rolling.

use rand::Rng;

use super::Die;
use super::roll::{DieResult, RollResult};

/// A collection of dice to be rolled together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicePool {
    /// The dice in this pool.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// Add `count` dice of the given type.
    pub fn add(mut self, die: Die, count: u32) -> Self {
        for _ in 0..count {
            self.dice.push(die);
        }
        self
    }

    /// Roll all dice in the pool using the given RNG.
    pub fn roll(&self, rng: &mut impl Rng) -> RollResult {
        let dice = self
            .dice
            .iter()
            .map(|die| DieResult {
                die: *die,
                value: die.roll(rng),
            })
            .collect();
        RollResult { dice }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert!(pool.dice.is_empty());
        assert_eq!(pool.roll(&mut StdRng::seed_from_u64(1)).total(), 0);
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new().add(Die::D8, 2).add(Die::D6, 3);
        assert_eq!(pool.dice.len(), 5);
        assert_eq!(pool.dice[0], Die::D8);
        assert_eq!(pool.dice[4], Die::D6);
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DicePool::new().add(Die::D6, 10);
        let result = pool.roll(&mut rng);
        assert_eq!(result.dice.len(), 10);
        for die_result in &result.dice {
            assert!((1..=6).contains(&die_result.value));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::new().add(Die::D20, 3);
        let r1 = pool.roll(&mut StdRng::seed_from_u64(99));
        let r2 = pool.roll(&mut StdRng::seed_from_u64(99));
        assert_eq!(r1, r2);
    }
}
