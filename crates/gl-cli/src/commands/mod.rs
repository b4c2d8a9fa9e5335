pub mod ability;
pub mod attr;
pub mod character;
pub mod item;
pub mod log;
pub mod roll;
pub mod skill;
pub mod spell;
pub mod transfer;
pub mod vitals;

use std::path::{Path, PathBuf};

use colored::Colorize;
use gl_core::{Budget, Character, Command, Ledger, LedgerConfig, Roster, TransactionLogEntry};

/// An opened roster file plus the ledger policy to apply to it.
pub struct Session {
    path: PathBuf,
    pub roster: Roster,
    pub ledger: Ledger,
}

impl Session {
    /// Load the roster at `path`.
    pub fn open(path: &Path, config: Option<&Path>) -> Result<Self, String> {
        if !path.exists() {
            return Err(format!(
                "no roster at {}. Create one with `gl new <name>`",
                path.display()
            ));
        }
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let roster = Roster::from_json(&text)
            .map_err(|e| format!("cannot load {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), characters = roster.len(), "roster loaded");
        Ok(Self::with_roster(path, roster, load_ledger(config)?))
    }

    /// Wrap a roster that has not been saved yet.
    pub fn with_roster(path: &Path, roster: Roster, ledger: Ledger) -> Self {
        Self {
            path: path.to_path_buf(),
            roster,
            ledger,
        }
    }

    pub fn active(&self) -> &Character {
        self.roster.active()
    }

    /// Apply a command to the active character.
    pub fn apply(&mut self, command: Command) -> Result<Option<TransactionLogEntry>, String> {
        let ledger = self.ledger;
        self.roster
            .active_mut()
            .apply(&ledger, &command)
            .map_err(|e| e.to_string())
    }

    /// Write the roster back to disk.
    pub fn save(&self) -> Result<(), String> {
        let json = self.roster.to_json().map_err(|e| e.to_string())?;
        std::fs::write(&self.path, json)
            .map_err(|e| format!("cannot write to {}: {e}", self.path.display()))?;
        tracing::debug!(path = %self.path.display(), "roster saved");
        Ok(())
    }

    /// Apply one command, save, and report the outcome.
    pub fn commit(mut self, command: Command, done: &str) -> Result<(), String> {
        let entry = self.apply(command)?;
        self.save()?;
        match entry {
            Some(entry) => print_entry(&entry),
            None => println!("  {done}"),
        }
        println!("  {}", xp_summary(&self.ledger, self.active()));
        Ok(())
    }
}

/// Read the ledger policy, or use the defaults.
pub fn load_ledger(config: Option<&Path>) -> Result<Ledger, String> {
    let config = match config {
        Some(path) => LedgerConfig::load(path).map_err(|e| e.to_string())?,
        None => LedgerConfig::default(),
    };
    Ok(Ledger::new(config))
}

pub fn print_entry(entry: &TransactionLogEntry) {
    let cost = match entry.cost {
        c if c > 0 => format!("-{c} XP").yellow(),
        c if c < 0 => format!("+{} XP", -c).green(),
        _ => "no XP".dimmed(),
    };
    println!("  {} ({cost})", entry.description);
}

/// "XP 40/100 (60 available)" with the available part colored by budget.
pub fn xp_summary(ledger: &Ledger, character: &Character) -> String {
    let spent = ledger.spent(character);
    let status = match ledger.budget(character) {
        Budget::Within { available } => format!("{available} available").green(),
        Budget::OverBudget { deficit } => format!("{deficit} over budget").red().bold(),
    };
    format!("XP {spent}/{} ({status})", character.total_xp)
}

/// Treat "none" and "" as no selection.
pub fn optional_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim)
        .filter(|n| !n.is_empty() && !n.eq_ignore_ascii_case("none"))
        .map(str::to_string)
}
