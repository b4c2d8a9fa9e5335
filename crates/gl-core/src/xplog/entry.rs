//! Transaction log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One recorded XP movement. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionLogEntry {
    /// Unique entry ID.
    pub id: Uuid,
    /// When the action was applied.
    pub timestamp: DateTime<Utc>,
    /// What happened, e.g. "Upgraded Strength 4 → 5".
    pub description: String,
    /// XP spent (positive) or refunded (negative).
    pub cost: i64,
}

impl TransactionLogEntry {
    /// Record an action happening now.
    pub fn new(description: impl Into<String>, cost: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            description: description.into(),
            cost,
        }
    }

    /// Returns true for entries that gave XP back.
    pub fn is_refund(&self) -> bool {
        self.cost < 0
    }
}
