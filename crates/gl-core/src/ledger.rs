//! The ledger engine: how much XP a character has spent and has left.
//!
//! Spend is recomputed from the character's current state on every query.
//! There is no running total to fall out of sync, and the transaction log
//! is never replayed to answer these questions.

use crate::character::{Attribute, Character};
use crate::config::LedgerConfig;

/// XP spent, split by where it went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpendBreakdown {
    /// XP in attribute points.
    pub attributes: i64,
    /// XP in skill ranks above their grants.
    pub skills: i64,
    /// XP in spells above their grants.
    pub spells: i64,
}

impl SpendBreakdown {
    /// Sum of all three components.
    pub fn total(&self) -> i64 {
        self.attributes + self.skills + self.spells
    }
}

/// Whether a character is within budget.
///
/// Being over budget is a warning state (for example after lowering total
/// XP), not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// Spend is covered by granted XP.
    Within {
        /// XP left to spend.
        available: i64,
    },
    /// More XP is spent than granted.
    OverBudget {
        /// How far over budget the character is.
        deficit: i64,
    },
}

impl Budget {
    /// Returns true when spend exceeds granted XP.
    pub fn is_over(&self) -> bool {
        matches!(self, Self::OverBudget { .. })
    }
}

/// Comparison between derived spend and what the log recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogAudit {
    /// Spend derived from current state.
    pub derived: i64,
    /// Net cost recorded in the transaction log.
    pub logged: i64,
}

impl LogAudit {
    /// Derived minus logged. Zero when state and log agree.
    pub fn divergence(&self) -> i64 {
        self.derived - self.logged
    }

    /// Whether state and log agree.
    pub fn is_consistent(&self) -> bool {
        self.divergence() == 0
    }
}

/// Answers XP questions and executes commands under one configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ledger {
    config: LedgerConfig,
}

impl Ledger {
    /// A ledger using `config`.
    pub fn new(config: LedgerConfig) -> Self {
        Self { config }
    }

    /// The configuration in force.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// XP spent on one attribute's purchased points.
    pub fn attribute_spend(&self, attr: &Attribute) -> i64 {
        self.config.attribute_cost_curve.total_spent(attr.value)
    }

    /// Cost of the next point of `attr`.
    pub fn next_point_cost(&self, attr: &Attribute) -> i64 {
        self.config.attribute_cost_curve.point_cost(attr.value)
    }

    /// XP spent, by category.
    pub fn breakdown(&self, character: &Character) -> SpendBreakdown {
        SpendBreakdown {
            attributes: character
                .attributes
                .iter()
                .map(|a| self.attribute_spend(a))
                .sum(),
            skills: character.skills.iter().map(|s| s.net_spend()).sum(),
            spells: character.spells.iter().map(|s| s.net_spend()).sum(),
        }
    }

    /// Total XP spent.
    pub fn spent(&self, character: &Character) -> i64 {
        self.breakdown(character).total()
    }

    /// Granted XP minus spend. May be negative.
    pub fn available(&self, character: &Character) -> i64 {
        character.total_xp.saturating_sub(self.spent(character))
    }

    /// Whether the character can pay `cost` right now.
    pub fn can_afford(&self, character: &Character, cost: i64) -> bool {
        self.available(character) >= cost
    }

    /// Budget status for display.
    pub fn budget(&self, character: &Character) -> Budget {
        let available = self.available(character);
        if available >= 0 {
            Budget::Within { available }
        } else {
            Budget::OverBudget {
                deficit: available.saturating_neg(),
            }
        }
    }

    /// Compare derived spend against the transaction log.
    pub fn audit(&self, character: &Character) -> LogAudit {
        LogAudit {
            derived: self.spent(character),
            logged: character.xp_log.net_cost(),
        }
    }
}
