//! Purchased attributes and the fixed attribute set.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven attributes every character sheet carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Physical power.
    Strength,
    /// Agility and precision; optionally feeds Armor Class.
    Dexterity,
    /// Toughness; feeds maximum health.
    Constitution,
    /// Raw spellcasting power.
    MagicPower,
    /// Crafting and practical knowledge.
    Craft,
    /// Perception and reasoning.
    Mind,
    /// Magical reserves; feeds maximum mana.
    Mana,
}

impl AttributeKind {
    /// All attributes in sheet order.
    pub const ALL: [AttributeKind; 7] = [
        AttributeKind::Strength,
        AttributeKind::Dexterity,
        AttributeKind::Constitution,
        AttributeKind::MagicPower,
        AttributeKind::Craft,
        AttributeKind::Mind,
        AttributeKind::Mana,
    ];

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Constitution => "Constitution",
            Self::MagicPower => "Magic Power",
            Self::Craft => "Craft",
            Self::Mind => "Mind",
            Self::Mana => "Mana",
        }
    }

    /// Resolve an attribute name, case-insensitively.
    ///
    /// Sheets saved by the older Portuguese edition use their own labels,
    /// so those resolve too.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "strength" | "str" | "força" | "forca" => Some(Self::Strength),
            "dexterity" | "dex" | "destreza" => Some(Self::Dexterity),
            "constitution" | "con" | "constituição" | "constituicao" => Some(Self::Constitution),
            "magic power" | "magicpower" | "poder mágico" | "poder magico" => {
                Some(Self::MagicPower)
            }
            "craft" | "ofício" | "oficio" => Some(Self::Craft),
            "mind" | "mente" => Some(Self::Mind),
            "mana" => Some(Self::Mana),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A purchasable attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Display name.
    pub name: String,
    /// Points bought with XP.
    #[serde(default)]
    pub value: u32,
    /// Free offset set by the owner (race, background). Not XP-gated.
    #[serde(default)]
    pub racial_bonus: i32,
    /// Modifier bonus contributed by equipment.
    #[serde(default)]
    pub bonus_from_items: i32,
}

impl Attribute {
    /// A fresh attribute with no points bought.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: 0,
            racial_bonus: 0,
            bonus_from_items: 0,
        }
    }

    /// The attribute kind this entry represents, if it is one of the standard seven.
    pub fn kind(&self) -> Option<AttributeKind> {
        AttributeKind::from_name(&self.name)
    }

    /// Whether `name` refers to this attribute, either literally or through
    /// a known alias.
    pub fn matches(&self, name: &str) -> bool {
        if self.name.to_lowercase() == name.trim().to_lowercase() {
            return true;
        }
        match (self.kind(), AttributeKind::from_name(name)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// The seven standard attributes at zero.
pub fn standard_attributes() -> Vec<Attribute> {
    AttributeKind::ALL
        .iter()
        .map(|kind| Attribute::new(kind.name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set() {
        let attrs = standard_attributes();
        assert_eq!(attrs.len(), 7);
        assert_eq!(attrs[3].name, "Magic Power");
        assert!(attrs.iter().all(|a| a.value == 0 && a.racial_bonus == 0));
    }

    #[test]
    fn from_name_aliases() {
        assert_eq!(AttributeKind::from_name("Constituição"), Some(AttributeKind::Constitution));
        assert_eq!(AttributeKind::from_name("ofício"), Some(AttributeKind::Craft));
        assert_eq!(AttributeKind::from_name("magic power"), Some(AttributeKind::MagicPower));
        assert_eq!(AttributeKind::from_name("Luck"), None);
    }

    #[test]
    fn matches_by_alias() {
        let craft = Attribute::new("Craft");
        assert!(craft.matches("craft"));
        assert!(craft.matches("Ofício"));
        assert!(!craft.matches("Mind"));

        let custom = Attribute::new("Luck");
        assert!(custom.matches("LUCK"));
        assert!(!custom.matches("Mana"));
    }

    #[test]
    fn legacy_document_fields() {
        let json = r#"{"name":"Força","value":12,"racialBonus":2,"bonusFromItems":1,"icon":"⚔️"}"#;
        let attr: Attribute = serde_json::from_str(json).unwrap();
        assert_eq!(attr.value, 12);
        assert_eq!(attr.racial_bonus, 2);
        assert_eq!(attr.kind(), Some(AttributeKind::Strength));
    }
}
