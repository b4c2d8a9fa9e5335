//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
}

/// The result of rolling an entire dice pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values. Widened so a pool of huge dice cannot
    /// overflow.
    pub fn total(&self) -> u64 {
        self.dice.iter().map(|d| u64::from(d.value)).sum()
    }

    /// Individual values joined with " + ", as shown next to a total.
    pub fn breakdown(&self) -> String {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        values.join(" + ")
    }
}
