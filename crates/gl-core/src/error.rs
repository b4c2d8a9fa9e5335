//! Error types for the experience ledger.

use thiserror::Error;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Reasons a ledger command or roster operation can be rejected.
///
/// Every variant is recoverable. A rejected command leaves the character
/// exactly as it was.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The marginal cost of a gated command exceeds the available XP.
    #[error("insufficient XP: costs {cost}, {available} available")]
    InsufficientFunds {
        /// Marginal cost of the rejected command.
        cost: i64,
        /// XP available when the command was attempted.
        available: i64,
    },

    /// An entity with the same name (case-insensitive) already exists.
    #[error("{kind} \"{name}\" already exists")]
    DuplicateEntity {
        /// Kind of entity ("skill", "spell").
        kind: &'static str,
        /// The conflicting name as submitted.
        name: String,
    },

    /// A skill, spell, ability, or item was submitted without a name.
    #[error("{0} name cannot be empty")]
    EmptyName(&'static str),

    /// An import payload is not a character document or a list of them.
    #[error("invalid import: {0}")]
    InvalidImport(String),

    /// No attribute with this name exists on the character.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// No skill with this name exists on the character.
    #[error("skill not found: \"{0}\"")]
    SkillNotFound(String),

    /// No spell with this name exists on the character.
    #[error("spell not found: \"{0}\"")]
    SpellNotFound(String),

    /// No ability with this name exists on the character.
    #[error("ability not found: \"{0}\"")]
    AbilityNotFound(String),

    /// No item matches the given reference.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// A rank letter outside E, D, C, B, A, S.
    #[error("unknown rank: '{0}'")]
    InvalidRank(String),

    /// The skill or spell is already at rank S.
    #[error("\"{0}\" is already at the maximum rank")]
    RankAtMaximum(String),

    /// The attribute has no purchased points left to reverse.
    #[error("attribute {0} has no purchased points to reverse")]
    AttributeAtZero(String),

    /// The attribute value cannot grow any further.
    #[error("attribute {0} is already at its maximum value")]
    AttributeAtMaximum(String),

    /// Only armor skills can count toward Armor Class.
    #[error("\"{0}\" is not an armor skill")]
    NotAnArmorSkill(String),

    /// Attribute point reversal is disabled by configuration.
    #[error("attribute points cannot be reversed under the current configuration")]
    IrreversibleAttributePoint,

    /// The roster must keep at least one character.
    #[error("cannot delete the last character")]
    LastCharacter,

    /// No character matches the given reference.
    #[error("character not found: {0}")]
    CharacterNotFound(String),

    /// A configuration file could not be read or parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A roster or character document failed to (de)serialize.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LedgerError {
    /// Returns true for rejections caused by the XP budget rather than by
    /// a bad reference or malformed input.
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}
