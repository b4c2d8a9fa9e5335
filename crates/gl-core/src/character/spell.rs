//! Spells and abilities.

use serde::{Deserialize, Serialize};

use crate::cost::{Origin, entry_cost};
use crate::rank::Rank;

/// A spell known by the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spell {
    /// Name, unique per character (case-insensitive).
    pub name: String,
    /// Current rank.
    #[serde(default)]
    pub rank: Rank,
    /// Rank granted for free at creation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_rank: Option<Rank>,
    /// In-game casting cost, e.g. "15 MP". Display only; not XP.
    #[serde(default)]
    pub cost: String,
    /// Learned or created. Created spells cost double XP.
    #[serde(default)]
    pub origin: Origin,
    /// Halves every XP cost tied to this spell.
    #[serde(default)]
    pub is_discounted: bool,
    /// Free-form effect text.
    #[serde(default)]
    pub description: String,
}

impl Spell {
    /// A spell bought outright at `rank`.
    pub fn new(name: impl Into<String>, rank: Rank, origin: Origin) -> Self {
        Self {
            name: name.into(),
            rank,
            initial_rank: None,
            cost: String::new(),
            origin,
            is_discounted: false,
            description: String::new(),
        }
    }

    /// Mark the spell as discounted.
    pub fn discounted(mut self, discounted: bool) -> Self {
        self.is_discounted = discounted;
        self
    }

    /// Mark the current rank as a free starting grant.
    pub fn granted(mut self) -> Self {
        self.initial_rank = Some(self.rank);
        self
    }

    /// XP value of the free grant (0 when the spell was bought outright).
    pub fn grant_offset(&self) -> i64 {
        self.initial_rank
            .map_or(0, |r| entry_cost(self.origin, r, self.is_discounted))
    }

    /// XP this spell currently accounts for.
    pub fn net_spend(&self) -> i64 {
        entry_cost(self.origin, self.rank, self.is_discounted) - self.grant_offset()
    }
}

/// A narrative ability. Abilities never cost XP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    /// Name.
    pub name: String,
    /// What the ability does.
    #[serde(default)]
    pub description: String,
    /// Where the ability came from.
    #[serde(default)]
    pub origin: Origin,
}

impl Ability {
    /// A learned ability with a description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            origin: Origin::Learned,
        }
    }
}
