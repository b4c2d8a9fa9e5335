//! Experience ledger for Grimledger character sheets.
//!
//! Characters spend XP on attribute points, ranked skills, and spells.
//! Spend is always derived from current state: the ledger never caches a
//! running total. Starting grants are recorded as an offset so only ranks
//! bought above them cost XP. Every spend and refund is appended to an
//! audit log, and every command is atomic.

pub mod catalog;
pub mod character;
pub mod command;
pub mod config;
pub mod cost;
pub mod error;
pub mod import;
pub mod ledger;
pub mod rank;
pub mod roster;
pub mod stats;
pub mod xplog;

pub use character::{
    Ability, Attribute, AttributeKind, Character, CharacterId, Item, ItemId, ItemType, Pool, Skill,
    Spell,
};
pub use command::{Applied, Command, NewSkill, NewSpell};
pub use config::LedgerConfig;
pub use cost::{AttributeCostCurve, Origin};
pub use error::{LedgerError, LedgerResult};
pub use ledger::{Budget, Ledger, LogAudit, SpendBreakdown};
pub use rank::Rank;
pub use roster::{ImportMode, Roster};
pub use stats::DerivedStats;
pub use xplog::{TransactionLog, TransactionLogEntry};
