//! XP cost tables.
//!
//! Pure functions of an entity's rank or value. Attribute points get more
//! expensive in bands of ten; skills follow a cumulative rank table; spells
//! pay a flat entry cost per rank, doubled for created spells. A discount
//! halves (rounding down) whatever the entity would otherwise cost.

use serde::{Deserialize, Serialize};

use crate::rank::Rank;

/// Highest per-point cost an attribute point can reach.
pub const MAX_POINT_COST: i64 = 10;

/// Cumulative XP to reach each rank from untrained (E..S).
const SKILL_CUMULATIVE: [i64; 6] = [0, 10, 60, 260, 560, 1060];

/// Base entry cost of a spell at each rank (E..S).
const SPELL_ENTRY: [i64; 6] = [10, 20, 50, 100, 200, 500];

/// `(first value in band, per-point cost)`, lowest band first.
const STANDARD_BANDS: [(u32, i64); 10] = [
    (0, 1),
    (10, 2),
    (20, 3),
    (30, 4),
    (40, 5),
    (50, 6),
    (60, 7),
    (70, 8),
    (80, 9),
    (90, 10),
];

const LEGACY_BANDS: [(u32, i64); 10] = [
    (0, 1),
    (20, 2),
    (30, 3),
    (40, 4),
    (50, 5),
    (60, 6),
    (70, 7),
    (80, 8),
    (90, 9),
    (100, 10),
];

/// Which band table prices attribute points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeCostCurve {
    /// Bands of ten starting at zero: 0–9 cost 1, 10–19 cost 2, … 90+ cost 10.
    #[default]
    Standard,
    /// The older sheet table: 0–19 cost 1, then +1 per ten, 100+ cost 10.
    /// This is how the original character sheet priced attribute points.
    Legacy,
}

impl AttributeCostCurve {
    fn bands(self) -> &'static [(u32, i64)] {
        match self {
            Self::Standard => &STANDARD_BANDS,
            Self::Legacy => &LEGACY_BANDS,
        }
    }

    /// Marginal cost of buying the point above `current`.
    pub fn point_cost(self, current: u32) -> i64 {
        self.bands()
            .iter()
            .rev()
            .find(|(start, _)| current >= *start)
            .map_or(1, |(_, cost)| *cost)
    }

    /// Total XP spent to raise an attribute from 0 to `value`.
    ///
    /// Sums whole bands instead of individual points, so large values stay
    /// cheap to evaluate.
    pub fn total_spent(self, value: u32) -> i64 {
        let bands = self.bands();
        bands
            .iter()
            .enumerate()
            .map(|(i, &(start, cost))| {
                if value <= start {
                    return 0;
                }
                let end = bands.get(i + 1).map_or(value, |&(next, _)| next.min(value));
                i64::from(end - start) * cost
            })
            .sum()
    }
}

fn discount(cost: i64, discounted: bool) -> i64 {
    if discounted { cost / 2 } else { cost }
}

/// Cumulative XP to bring a skill from untrained to `rank`.
pub fn skill_cumulative_cost(rank: Rank, discounted: bool) -> i64 {
    discount(SKILL_CUMULATIVE[rank.index()], discounted)
}

/// Marginal cost of advancing a skill one rank from `current`, or `None`
/// when it is already at S.
pub fn skill_upgrade_cost(current: Rank, discounted: bool) -> Option<i64> {
    let next = current.next()?;
    Some(skill_cumulative_cost(next, discounted) - skill_cumulative_cost(current, discounted))
}

/// Whether a spell or ability was learned or created by the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Learned from a mentor or tome.
    #[default]
    Learned,
    /// Invented by the character; created spells cost double.
    Created,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Learned => write!(f, "learned"),
            Self::Created => write!(f, "created"),
        }
    }
}

/// XP to hold a spell of `origin` at `rank`.
pub fn entry_cost(origin: Origin, rank: Rank, discounted: bool) -> i64 {
    let base = SPELL_ENTRY[rank.index()];
    let cost = match origin {
        Origin::Learned => base,
        Origin::Created => base * 2,
    };
    discount(cost, discounted)
}

/// Marginal cost of advancing a spell one rank from `current`, or `None`
/// when it is already at S.
pub fn spell_upgrade_cost(origin: Origin, current: Rank, discounted: bool) -> Option<i64> {
    let next = current.next()?;
    Some(entry_cost(origin, next, discounted) - entry_cost(origin, current, discounted))
}
