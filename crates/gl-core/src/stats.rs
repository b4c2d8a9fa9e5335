//! Derived statistics.
//!
//! Nothing here is stored on the character. Every value is recomputed from
//! current state, so it can never drift from the entities it describes.

use crate::catalog;
use crate::character::{Attribute, AttributeKind, BASE_HP, BASE_MP, Character, Skill};
use crate::config::LedgerConfig;

/// HP gained per point of Constitution modifier.
const HP_PER_MODIFIER: i64 = 5;
/// MP gained per point of Mana modifier.
const MP_PER_MODIFIER: i64 = 20;

/// Purchased points plus the racial offset.
pub fn attribute_total(attr: &Attribute) -> i64 {
    i64::from(attr.value) + i64::from(attr.racial_bonus)
}

/// One modifier point per full ten of `total`. Negative totals give 0.
pub fn modifier(total: i64, cap: Option<i64>) -> i64 {
    if total < 0 {
        return 0;
    }
    let m = total / 10;
    cap.map_or(m, |c| m.min(c))
}

/// Modifier from the attribute total plus equipment bonuses.
pub fn total_modifier(attr: &Attribute, config: &LedgerConfig) -> i64 {
    modifier(attribute_total(attr), config.modifier_cap) + i64::from(attr.bonus_from_items)
}

/// Total modifier of a standard attribute, or 0 if the sheet lacks it.
pub fn kind_modifier(character: &Character, kind: AttributeKind, config: &LedgerConfig) -> i64 {
    character
        .attribute_of_kind(kind)
        .map_or(0, |a| total_modifier(a, config))
}

/// Total modifier of an attribute looked up by name; unknown names give 0.
pub fn named_modifier(character: &Character, name: &str, config: &LedgerConfig) -> i64 {
    character
        .attribute(name)
        .map_or(0, |a| total_modifier(a, config))
}

fn hp_formula(character: &Character, config: &LedgerConfig) -> i64 {
    BASE_HP + HP_PER_MODIFIER * kind_modifier(character, AttributeKind::Constitution, config)
}

fn mp_formula(character: &Character, config: &LedgerConfig) -> i64 {
    BASE_MP + MP_PER_MODIFIER * kind_modifier(character, AttributeKind::Mana, config)
}

/// Maximum health: 20 + 5 × Constitution modifier + owner adjustment.
pub fn hp_max(character: &Character, config: &LedgerConfig) -> i64 {
    hp_formula(character, config).saturating_add(character.hp.extra_max)
}

/// Maximum mana: 200 + 20 × Mana modifier + owner adjustment.
pub fn mp_max(character: &Character, config: &LedgerConfig) -> i64 {
    mp_formula(character, config).saturating_add(character.mp.extra_max)
}

/// The `extra_max` that makes [`hp_max`] equal `target` under current state.
pub fn hp_extra_for(character: &Character, target: i64, config: &LedgerConfig) -> i64 {
    target.saturating_sub(hp_formula(character, config))
}

/// The `extra_max` that makes [`mp_max`] equal `target` under current state.
pub fn mp_extra_for(character: &Character, target: i64, config: &LedgerConfig) -> i64 {
    target.saturating_sub(mp_formula(character, config))
}

/// Sum of defense from equipped armor items.
pub fn armor_bonus(character: &Character) -> i64 {
    character
        .items
        .iter()
        .map(|i| i.armor_contribution())
        .fold(0, i64::saturating_add)
}

/// Rank bonus of the skill selected for Armor Class, or 0 when none is
/// selected, the selected skill is gone, or it is not an armor skill.
pub fn armor_skill_bonus(character: &Character) -> i64 {
    character
        .selected_armor_skill
        .as_deref()
        .filter(|name| catalog::is_armor_skill(name))
        .and_then(|name| character.skill(name))
        .map_or(0, |s| s.rank.bonus())
}

/// Effective Armor Class.
pub fn armor_class(character: &Character, config: &LedgerConfig) -> i64 {
    let dex = if config.dex_to_ac {
        kind_modifier(character, AttributeKind::Dexterity, config)
    } else {
        0
    };
    character
        .base_ac
        .saturating_add(armor_bonus(character))
        .saturating_add(armor_skill_bonus(character))
        .saturating_add(dex)
}

/// Bonus added to a d20 when rolling `skill`.
pub fn skill_roll_bonus(character: &Character, skill: &Skill, config: &LedgerConfig) -> i64 {
    let attr = skill
        .related_attribute
        .as_deref()
        .map_or(0, |name| named_modifier(character, name, config));
    skill
        .rank
        .bonus()
        .saturating_add(skill.initial_bonus)
        .saturating_add(attr)
}

/// Bonus added to a d20 when rolling an attribute directly.
pub fn attribute_roll_bonus(attr: &Attribute, config: &LedgerConfig) -> i64 {
    total_modifier(attr, config)
}

/// A snapshot of every derived stat, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedStats {
    /// Maximum health.
    pub hp_max: i64,
    /// Maximum mana.
    pub mp_max: i64,
    /// Effective Armor Class.
    pub armor_class: i64,
}

impl DerivedStats {
    /// Compute every derived stat for `character`.
    pub fn compute(character: &Character, config: &LedgerConfig) -> Self {
        Self {
            hp_max: hp_max(character, config),
            mp_max: mp_max(character, config),
            armor_class: armor_class(character, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Item, ItemType};
    use crate::rank::Rank;

    fn set(character: &mut Character, kind: AttributeKind, value: u32, racial: i32) {
        let attr = character
            .attributes
            .iter_mut()
            .find(|a| a.kind() == Some(kind))
            .unwrap();
        attr.value = value;
        attr.racial_bonus = racial;
    }

    #[test]
    fn modifier_floors_and_clamps_negative() {
        assert_eq!(modifier(0, None), 0);
        assert_eq!(modifier(9, None), 0);
        assert_eq!(modifier(10, None), 1);
        assert_eq!(modifier(57, None), 5);
        assert_eq!(modifier(-15, None), 0);
    }

    #[test]
    fn modifier_uncapped_variant() {
        assert_eq!(modifier(150, None), 15);
    }

    #[test]
    fn modifier_capped_variant() {
        assert_eq!(modifier(150, Some(10)), 10);
        assert_eq!(modifier(99, Some(10)), 9);
    }

    #[test]
    fn total_modifier_adds_items() {
        let mut attr = Attribute::new("Strength");
        attr.value = 18;
        attr.racial_bonus = 3;
        attr.bonus_from_items = 2;
        assert_eq!(attribute_total(&attr), 21);
        assert_eq!(total_modifier(&attr, &LedgerConfig::default()), 4);
    }

    #[test]
    fn hp_and_mp_follow_modifiers() {
        let cfg = LedgerConfig::default();
        let mut c = Character::new("Ardrin", 0);
        assert_eq!(hp_max(&c, &cfg), 20);
        assert_eq!(mp_max(&c, &cfg), 200);
        set(&mut c, AttributeKind::Constitution, 20, 5);
        set(&mut c, AttributeKind::Mana, 10, 0);
        assert_eq!(hp_max(&c, &cfg), 30);
        assert_eq!(mp_max(&c, &cfg), 220);
    }

    #[test]
    fn max_back_solves_into_extra() {
        let cfg = LedgerConfig::default();
        let mut c = Character::new("Ardrin", 0);
        set(&mut c, AttributeKind::Constitution, 10, 0);
        c.hp.extra_max = hp_extra_for(&c, 40, &cfg);
        assert_eq!(c.hp.extra_max, 15);
        assert_eq!(hp_max(&c, &cfg), 40);
        // A later Constitution change still shifts the maximum.
        set(&mut c, AttributeKind::Constitution, 20, 0);
        assert_eq!(hp_max(&c, &cfg), 45);
    }

    #[test]
    fn armor_class_sums_equipped_armor_and_skill() {
        let cfg = LedgerConfig::default();
        let mut c = Character::new("Ardrin", 0);
        let mut mail = Item::new("Chain Mail", ItemType::Armor).with_defense(4);
        mail.is_equipped = true;
        c.items.push(mail);
        c.items.push(Item::new("Spare Shield", ItemType::Armor).with_defense(2));
        c.skills.push(Skill::new("Heavy Armor", Rank::C));
        c.selected_armor_skill = Some("heavy armor".to_string());
        assert_eq!(armor_class(&c, &cfg), 10 + 4 + 4);
    }

    #[test]
    fn armor_class_dex_variant() {
        let mut c = Character::new("Ardrin", 0);
        set(&mut c, AttributeKind::Dexterity, 30, 0);
        assert_eq!(armor_class(&c, &LedgerConfig::default()), 10);
        assert_eq!(armor_class(&c, &LedgerConfig::default().with_dex_to_ac(true)), 13);
    }

    #[test]
    fn missing_armor_skill_contributes_nothing() {
        let mut c = Character::new("Ardrin", 0);
        c.selected_armor_skill = Some("Shields".to_string());
        assert_eq!(armor_skill_bonus(&c), 0);
    }

    #[test]
    fn skill_bonus_includes_attribute_modifier() {
        let cfg = LedgerConfig::default();
        let mut c = Character::new("Ardrin", 0);
        set(&mut c, AttributeKind::Craft, 25, 0);
        let mut alchemy = Skill::new("Alchemy", Rank::C).with_attribute("Ofício");
        alchemy.initial_bonus = 1;
        assert_eq!(skill_roll_bonus(&c, &alchemy, &cfg), 4 + 1 + 2);

        let luck = Skill::new("Luck", Rank::D);
        assert_eq!(skill_roll_bonus(&c, &luck, &cfg), 2);
    }

    #[test]
    fn non_armor_selection_contributes_nothing() {
        let cfg = LedgerConfig::default();
        let mut c = Character::new("Ardrin", 0);
        c.skills.push(Skill::new("Alchemy", Rank::S));
        c.selected_armor_skill = Some("Alchemy".to_string());
        assert_eq!(armor_class(&c, &cfg), 10);
    }

    #[test]
    fn extreme_stored_values_saturate() {
        let cfg = LedgerConfig::default();
        let mut c = Character::new("Ardrin", 0);
        c.base_ac = i64::MAX;
        c.hp.extra_max = i64::MIN;
        let mut plate = Item::new("Plate", ItemType::Armor).with_defense(i64::MAX);
        plate.is_equipped = true;
        c.items.push(plate);
        assert_eq!(armor_class(&c, &cfg), i64::MAX);
        assert_eq!(hp_max(&c, &cfg), i64::MIN + 20);
        assert_eq!(hp_extra_for(&c, i64::MIN, &cfg), i64::MIN);

        let mut odd = Skill::new("Odd", Rank::S);
        odd.initial_bonus = i64::MAX;
        assert_eq!(skill_roll_bonus(&c, &odd, &cfg), i64::MAX);
    }

    #[test]
    fn derived_snapshot() {
        let stats = DerivedStats::compute(&Character::new("A", 0), &LedgerConfig::default());
        assert_eq!(
            stats,
            DerivedStats {
                hp_max: 20,
                mp_max: 200,
                armor_class: 10
            }
        );
    }
}
