//! The official skill list.

use crate::character::AttributeKind::{
    self, Constitution, Craft, Dexterity, MagicPower, Mind, Strength,
};
use crate::character::same_name;

/// A skill from the official list and the attribute it rolls with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSkill {
    /// Skill name.
    pub name: &'static str,
    /// Label used by sheets saved in the Portuguese edition.
    pub legacy_name: &'static str,
    /// Attribute whose modifier applies.
    pub attribute: AttributeKind,
    /// Whether the skill's rank can count toward Armor Class.
    pub armor: bool,
}

const fn skill(
    name: &'static str,
    legacy_name: &'static str,
    attribute: AttributeKind,
) -> CatalogSkill {
    CatalogSkill {
        name,
        legacy_name,
        attribute,
        armor: false,
    }
}

const fn armor(
    name: &'static str,
    legacy_name: &'static str,
    attribute: AttributeKind,
) -> CatalogSkill {
    CatalogSkill {
        name,
        legacy_name,
        attribute,
        armor: true,
    }
}

/// Every official skill, in sheet order.
pub const OFFICIAL_SKILLS: [CatalogSkill; 25] = [
    skill("Feat of Strength", "Ato de Força", Strength),
    skill("Throwing", "Arremessar", Strength),
    skill("Athletics", "Atletismo", Strength),
    skill("Acrobatics", "Acrobacia", Dexterity),
    skill("Stealth", "Furtividade", Dexterity),
    skill("Sleight of Hand", "Mãos Leves", Dexterity),
    skill("Investigation", "Investigação", Craft),
    skill("First Aid", "Primeiros Socorros", Craft),
    skill("Smithing", "Ferraria", Craft),
    skill("Alchemy", "Alquimia", Craft),
    skill("Enchanting", "Encantamento", Craft),
    skill("Cooking", "Culinária", Craft),
    skill("Tracking", "Rastreamento", Mind),
    skill("Insight", "Intuição", Mind),
    skill("Perception", "Percepção", Mind),
    skill("Arcana (Pure)", "Perícia Mágica (Pura)", MagicPower),
    skill("Arcana (Fire)", "Perícia Mágica (Fogo)", MagicPower),
    skill("Arcana (Earth)", "Perícia Mágica (Terra)", MagicPower),
    skill("Melee Weapons", "Armas Corpo à Corpo", Strength),
    skill("Ranged Weapons", "Armas à Distância", Dexterity),
    armor("Shields", "Escudos", Strength),
    armor("Unarmored Defense", "Defesa sem Armadura", Dexterity),
    armor("Light Armor", "Armaduras Leves", Dexterity),
    armor("Medium Armor", "Armaduras Médias", Strength),
    armor("Heavy Armor", "Armaduras Pesadas", Constitution),
];

/// Find an official skill by name or legacy label (case-insensitive).
pub fn lookup(name: &str) -> Option<&'static CatalogSkill> {
    OFFICIAL_SKILLS
        .iter()
        .find(|s| same_name(s.name, name) || same_name(s.legacy_name, name))
}

/// Whether `name` is one of the armor skills whose rank can count toward
/// Armor Class.
pub fn is_armor_skill(name: &str) -> bool {
    lookup(name).is_some_and(|s| s.armor)
}
