//! Rule toggles for a ledger.
//!
//! The sheet rules have shipped in more than one variant. Rather than pick
//! one, each point of disagreement is a field here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cost::AttributeCostCurve;
use crate::error::{LedgerError, LedgerResult};

/// Configuration for a [`Ledger`](crate::ledger::Ledger) and the derived
/// stats it reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Whether purchased attribute points can be refunded one at a time.
    pub reversible_attribute_points: bool,
    /// Upper bound on an attribute modifier, or `None` for unbounded growth.
    pub modifier_cap: Option<i64>,
    /// Whether the Dexterity modifier adds to Armor Class.
    pub dex_to_ac: bool,
    /// Band table used to price attribute points.
    pub attribute_cost_curve: AttributeCostCurve,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            reversible_attribute_points: true,
            modifier_cap: None,
            dex_to_ac: false,
            attribute_cost_curve: AttributeCostCurve::Standard,
        }
    }
}

impl LedgerConfig {
    /// Allow or forbid refunding attribute points.
    pub fn with_reversible_attribute_points(mut self, reversible: bool) -> Self {
        self.reversible_attribute_points = reversible;
        self
    }

    /// Cap attribute modifiers at `cap` (negative caps are treated as 0).
    pub fn with_modifier_cap(mut self, cap: Option<i64>) -> Self {
        self.modifier_cap = cap.map(|c| c.max(0));
        self
    }

    /// Add the Dexterity modifier to Armor Class.
    pub fn with_dex_to_ac(mut self, enabled: bool) -> Self {
        self.dex_to_ac = enabled;
        self
    }

    /// Price attribute points with `curve`.
    pub fn with_attribute_cost_curve(mut self, curve: AttributeCostCurve) -> Self {
        self.attribute_cost_curve = curve;
        self
    }

    /// Parse a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> LedgerResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| LedgerError::InvalidConfig(e.to_string()))?;
        Ok(config.with_modifier_cap(config.modifier_cap))
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> LedgerResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LedgerError::InvalidConfig(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }
}
