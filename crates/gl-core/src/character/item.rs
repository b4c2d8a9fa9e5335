//! Inventory items.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generate a new random item ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short: String = self.0.simple().to_string().chars().take(8).collect();
        write!(f, "{short}")
    }
}

/// Broad category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    /// Deals damage; may carry a damage expression.
    Weapon,
    /// Adds its defense to Armor Class while equipped.
    Armor,
    /// Tools and gear.
    #[default]
    Utility,
    /// Used up on use.
    Consumable,
}

impl ItemType {
    /// Parse an item type name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "weapon" => Some(Self::Weapon),
            "armor" | "armour" => Some(Self::Armor),
            "utility" => Some(Self::Utility),
            "consumable" => Some(Self::Consumable),
            _ => None,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapon => write!(f, "weapon"),
            Self::Armor => write!(f, "armor"),
            Self::Utility => write!(f, "utility"),
            Self::Consumable => write!(f, "consumable"),
        }
    }
}

/// An item in the character's inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique item ID.
    #[serde(default)]
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Category.
    #[serde(rename = "type", default)]
    pub item_type: ItemType,
    /// Damage expression such as "1d8+4".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
    /// Armor Class contribution while equipped (armor only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<i64>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Special property text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_ability: Option<String>,
    /// Weight, if tracked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Whether the item is currently worn or wielded.
    #[serde(default)]
    pub is_equipped: bool,
}

impl Item {
    /// A new unequipped item.
    pub fn new(name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            item_type,
            damage: None,
            defense: None,
            description: String::new(),
            special_ability: None,
            weight: None,
            is_equipped: false,
        }
    }

    /// Set the damage expression.
    pub fn with_damage(mut self, damage: impl Into<String>) -> Self {
        self.damage = Some(damage.into());
        self
    }

    /// Set the defense bonus.
    pub fn with_defense(mut self, defense: i64) -> Self {
        self.defense = Some(defense);
        self
    }

    /// Defense this item adds to Armor Class right now.
    pub fn armor_contribution(&self) -> i64 {
        if self.item_type == ItemType::Armor && self.is_equipped {
            self.defense.unwrap_or(0)
        } else {
            0
        }
    }
}
