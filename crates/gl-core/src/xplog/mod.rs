//! Append-only audit trail of XP spends and refunds.

pub mod entry;
pub mod log;

pub use entry::TransactionLogEntry;
pub use log::TransactionLog;
