//! Transaction log storage and export.

use serde::{Deserialize, Serialize};

use super::entry::TransactionLogEntry;

/// A chronological, append-only record of XP spends and refunds.
///
/// The log is for display and audit. Current spend is always derived from
/// the character's state, never replayed from here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionLog {
    entries: Vec<TransactionLogEntry>,
}

impl TransactionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn append(&mut self, entry: TransactionLogEntry) {
        self.entries.push(entry);
    }

    /// Get all entries, oldest first.
    pub fn entries(&self) -> &[TransactionLogEntry] {
        &self.entries
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&TransactionLogEntry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Net XP recorded: spends minus refunds.
    pub fn net_cost(&self) -> i64 {
        self.entries.iter().map(|e| e.cost).sum()
    }

    /// Total XP given back by refunds (as a positive number).
    pub fn total_refunded(&self) -> i64 {
        self.entries
            .iter()
            .filter(|e| e.is_refund())
            .map(|e| -e.cost)
            .sum()
    }

    /// Export the log as markdown.
    pub fn export_markdown(&self, character: &str) -> String {
        let mut out = format!("# XP Log: {character}\n\n");
        if self.entries.is_empty() {
            out.push_str("*No transactions recorded.*\n");
            return out;
        }
        out.push_str("| When | Action | XP |\n|---|---|---:|\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                entry.description,
                signed(entry.cost)
            ));
        }
        out.push_str(&format!("\n**Net**: {} XP\n", signed(self.net_cost())));
        out
    }

    /// Export the log as plain text.
    pub fn export_text(&self, character: &str) -> String {
        let title = format!("XP Log: {character}");
        let mut out = format!("{title}\n{}\n\n", "=".repeat(title.chars().count()));
        for entry in &self.entries {
            out.push_str(&format!(
                "{}  {:>6}  {}\n",
                entry.timestamp.format("%Y-%m-%d %H:%M"),
                signed(entry.cost),
                entry.description
            ));
        }
        out.push_str(&format!("\nNet: {} XP\n", signed(self.net_cost())));
        out
    }
}

/// Format a cost with an explicit sign so spends and refunds read apart.
fn signed(cost: i64) -> String {
    if cost > 0 {
        format!("+{cost}")
    } else {
        cost.to_string()
    }
}
