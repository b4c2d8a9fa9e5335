//! Dice rolling for Grimledger.
//!
//! Provides d20 checks against a precomputed bonus and weapon damage rolls
//! from `NdM+K` expressions. Every roll takes the random source as an
//! argument, so a seeded RNG gives repeatable results.

pub mod check;
pub mod damage;
pub mod dice;
pub mod error;

pub use check::{CheckRoll, roll_check};
pub use damage::{DamageExpression, DamageRoll};
pub use dice::{DicePool, Die, DieResult, RollResult};
pub use error::{DiceError, DiceResult};
