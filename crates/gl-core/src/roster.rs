//! The roster: every character a player keeps, plus which one is active.

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterId, same_name};
use crate::error::{LedgerError, LedgerResult};
use crate::import::{export_characters, parse_import};

/// How imported characters combine with the existing roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Keep existing characters and add the imported ones after them.
    #[default]
    Append,
    /// Discard existing characters and select the first imported one.
    Replace,
}

/// An ordered list of characters with one selected. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Roster {
    active: usize,
    characters: Vec<Character>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RosterDocument {
    Saved {
        #[serde(default)]
        active: usize,
        characters: Vec<Character>,
    },
    List(Vec<Character>),
}

impl Roster {
    /// A roster holding a single character.
    pub fn new(character: Character) -> Self {
        Self {
            active: 0,
            characters: vec![character],
        }
    }

    /// Load a saved roster. Plain character lists (as written by
    /// [`Roster::export_json`]) are accepted too.
    pub fn from_json(text: &str) -> LedgerResult<Self> {
        let (active, characters) = match serde_json::from_str(text)? {
            RosterDocument::Saved { active, characters } => (active, characters),
            RosterDocument::List(characters) => (0, characters),
        };
        if characters.is_empty() {
            return Err(LedgerError::InvalidImport(
                "a roster needs at least one character".to_string(),
            ));
        }
        let active = if active < characters.len() { active } else { 0 };
        Ok(Self { active, characters })
    }

    /// Serialize the roster, selection included.
    pub fn to_json(&self) -> LedgerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    // -----------------------------------------------------------------------
    // Membership
    // -----------------------------------------------------------------------

    /// Create a new character, add it, and select it.
    pub fn create(&mut self, name: impl Into<String>, total_xp: i64) -> &mut Character {
        let id = self.add(Character::new(name, total_xp));
        tracing::info!(character = %id, "character created");
        self.active = self.characters.len() - 1;
        &mut self.characters[self.active]
    }

    /// Add a character without changing the selection.
    pub fn add(&mut self, character: Character) -> CharacterId {
        let id = character.id;
        self.characters.push(character);
        id
    }

    /// Remove the character at `index`. The first character becomes active.
    pub fn remove(&mut self, index: usize) -> LedgerResult<Character> {
        if index >= self.characters.len() {
            return Err(LedgerError::CharacterNotFound(format!("#{}", index + 1)));
        }
        if self.characters.len() == 1 {
            return Err(LedgerError::LastCharacter);
        }
        let removed = self.characters.remove(index);
        self.active = 0;
        tracing::info!(character = %removed.id, name = %removed.name, "character removed");
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Select the character at `index`.
    pub fn select(&mut self, index: usize) -> LedgerResult<()> {
        if index >= self.characters.len() {
            return Err(LedgerError::CharacterNotFound(format!("#{}", index + 1)));
        }
        self.active = index;
        Ok(())
    }

    /// Select the first character with this name (case-insensitive).
    pub fn select_by_name(&mut self, name: &str) -> LedgerResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| LedgerError::CharacterNotFound(name.to_string()))?;
        self.active = index;
        Ok(())
    }

    /// Index of the first character with this name (case-insensitive).
    pub fn position(&self, name: &str) -> Option<usize> {
        self.characters.iter().position(|c| same_name(&c.name, name))
    }

    /// The selected character.
    pub fn active(&self) -> &Character {
        &self.characters[self.active]
    }

    /// The selected character, mutably.
    pub fn active_mut(&mut self) -> &mut Character {
        &mut self.characters[self.active]
    }

    /// Index of the selected character.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// All characters in order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Always false; a roster keeps at least one character.
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    // -----------------------------------------------------------------------
    // Import / export
    // -----------------------------------------------------------------------

    /// All characters as a pretty-printed JSON list.
    pub fn export_json(&self) -> LedgerResult<String> {
        export_characters(&self.characters)
    }

    /// Import characters from a JSON document or list. Returns how many were
    /// imported. Nothing changes unless the whole payload is valid.
    pub fn import_json(&mut self, text: &str, mode: ImportMode) -> LedgerResult<usize> {
        let imported = parse_import(text)?;
        let count = imported.len();
        match mode {
            ImportMode::Append => self.characters.extend(imported),
            ImportMode::Replace => {
                self.characters = imported;
                self.active = 0;
            }
        }
        tracing::debug!(count, ?mode, "characters imported");
        Ok(count)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(Character::new("New Character", 0))
    }
}
