//! Ranked skills and the free-grant baseline.

use serde::{Deserialize, Deserializer, Serialize};

use crate::cost::skill_cumulative_cost;
use crate::rank::Rank;

/// A trained skill on a character sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Name, unique per character (case-insensitive).
    pub name: String,
    /// Current rank.
    #[serde(default)]
    pub rank: Rank,
    /// Rank granted for free at creation, if any. XP is only charged above it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_rank: Option<Rank>,
    /// Attribute whose modifier adds to rolls, or `None` for no attribute bonus.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub related_attribute: Option<String>,
    /// Flat bonus added to rolls on top of the rank bonus.
    #[serde(default)]
    pub initial_bonus: i64,
    /// Halves every XP cost tied to this skill.
    #[serde(default)]
    pub is_discounted: bool,
}

impl Skill {
    /// A skill bought outright at `rank`.
    pub fn new(name: impl Into<String>, rank: Rank) -> Self {
        Self {
            name: name.into(),
            rank,
            initial_rank: None,
            related_attribute: None,
            initial_bonus: 0,
            is_discounted: false,
        }
    }

    /// Tie the skill to an attribute.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.related_attribute = Some(attribute.into());
        self
    }

    /// Mark the skill as discounted.
    pub fn discounted(mut self, discounted: bool) -> Self {
        self.is_discounted = discounted;
        self
    }

    /// Mark the current rank as a free starting grant.
    pub fn granted(mut self) -> Self {
        self.initial_rank = Some(self.rank);
        self
    }

    /// XP value of the free grant (0 when the skill was bought outright).
    pub fn grant_offset(&self) -> i64 {
        self.initial_rank
            .map_or(0, |r| skill_cumulative_cost(r, self.is_discounted))
    }

    /// XP this skill currently accounts for: its cumulative cost above the grant.
    pub fn net_spend(&self) -> i64 {
        skill_cumulative_cost(self.rank, self.is_discounted) - self.grant_offset()
    }

    /// Whether the skill came from the starting package.
    pub fn is_initial(&self) -> bool {
        self.initial_rank.is_some_and(|r| r > Rank::E)
    }
}

/// Deserialize a name field where `""` and `"none"` mean "no value". Older
/// documents write the sentinel instead of omitting the field.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| {
        let trimmed = s.trim();
        !trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("none")
    }))
}
