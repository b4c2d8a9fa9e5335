//! The character document: attributes, skills, spells, abilities, items,
//! and the XP log.
//!
//! A character is the unit of storage. Field names serialize in camelCase
//! so documents written by earlier versions of the sheet load unchanged.

pub mod attribute;
pub mod item;
pub mod skill;
pub mod spell;

pub use attribute::{Attribute, AttributeKind, standard_attributes};
pub use item::{Item, ItemId, ItemType};
pub use skill::Skill;
pub use spell::{Ability, Spell};

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::xplog::TransactionLog;

/// Base maximum health before the Constitution modifier.
pub const BASE_HP: i64 = 20;
/// Base maximum mana before the Mana modifier.
pub const BASE_MP: i64 = 200;
/// Armor Class before equipment and skills.
pub const BASE_AC: i64 = 10;

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short: String = self.0.simple().to_string().chars().take(8).collect();
        write!(f, "{short}")
    }
}

/// A current value plus the owner's adjustment to the formula maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    /// Current value. Not clamped; the sheet lets players overheal.
    pub current: i64,
    /// Added to the formula maximum.
    #[serde(default)]
    pub extra_max: i64,
}

impl Pool {
    /// A full pool with no adjustment.
    pub fn new(current: i64) -> Self {
        Self {
            current,
            extra_max: 0,
        }
    }
}

fn default_hp() -> Pool {
    Pool::new(BASE_HP)
}

fn default_mp() -> Pool {
    Pool::new(BASE_MP)
}

fn default_ac() -> i64 {
    BASE_AC
}

/// A character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique ID. Documents without one get a fresh ID on load.
    #[serde(default)]
    pub id: CharacterId,
    /// Character name.
    #[serde(default)]
    pub name: String,
    /// Portrait, as a URL or data URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Age in years.
    #[serde(default)]
    pub age: u32,
    /// Free-form gender.
    #[serde(default)]
    pub gender: String,
    /// XP granted so far.
    #[serde(default)]
    pub total_xp: i64,
    /// Purchased attributes.
    #[serde(default = "standard_attributes")]
    pub attributes: Vec<Attribute>,
    /// Health.
    #[serde(default = "default_hp")]
    pub hp: Pool,
    /// Mana.
    #[serde(default = "default_mp")]
    pub mp: Pool,
    /// Armor Class before equipment and skills.
    #[serde(rename = "ac", default = "default_ac")]
    pub base_ac: i64,
    /// Skill whose rank bonus applies to Armor Class.
    #[serde(
        rename = "selectedArmorSkillName",
        default,
        deserialize_with = "skill::empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_armor_skill: Option<String>,
    /// Trained skills.
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Known spells.
    #[serde(default)]
    pub spells: Vec<Spell>,
    /// Narrative abilities.
    #[serde(default)]
    pub abilities: Vec<Ability>,
    /// Inventory.
    #[serde(rename = "inventory", default)]
    pub items: Vec<Item>,
    /// Audit trail of XP spends and refunds.
    #[serde(default)]
    pub xp_log: TransactionLog,
}

impl Character {
    /// A new character with the standard attributes at zero and an empty log.
    pub fn new(name: impl Into<String>, total_xp: i64) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            avatar: None,
            age: 0,
            gender: String::new(),
            total_xp,
            attributes: standard_attributes(),
            hp: default_hp(),
            mp: default_mp(),
            base_ac: BASE_AC,
            selected_armor_skill: None,
            skills: Vec::new(),
            spells: Vec::new(),
            abilities: Vec::new(),
            items: Vec::new(),
            xp_log: TransactionLog::new(),
        }
    }

    /// Find an attribute by name or alias.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.matches(name))
    }

    /// Find an attribute by name or alias, mutably.
    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.iter_mut().find(|a| a.matches(name))
    }

    /// Find one of the standard attributes.
    pub fn attribute_of_kind(&self, kind: AttributeKind) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.kind() == Some(kind))
    }

    /// Find a skill by name (case-insensitive).
    pub fn skill(&self, name: &str) -> Option<&Skill> {
        self.skills.iter().find(|s| same_name(&s.name, name))
    }

    /// Find a skill by name, mutably.
    pub fn skill_mut(&mut self, name: &str) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| same_name(&s.name, name))
    }

    /// Find a spell by name (case-insensitive).
    pub fn spell(&self, name: &str) -> Option<&Spell> {
        self.spells.iter().find(|s| same_name(&s.name, name))
    }

    /// Find a spell by name, mutably.
    pub fn spell_mut(&mut self, name: &str) -> Option<&mut Spell> {
        self.spells.iter_mut().find(|s| same_name(&s.name, name))
    }

    /// Find an item by ID.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Find an item by ID, mutably.
    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    /// Find the first item with this name (case-insensitive).
    pub fn item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| same_name(&i.name, name))
    }
}

/// Case-insensitive name comparison, ignoring surrounding whitespace.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
