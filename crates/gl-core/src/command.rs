//! Typed commands and their atomic execution.
//!
//! Each command is validated and applied against a clone of the character.
//! The clone is returned only if every step succeeds, so a rejected command
//! leaves the caller's character untouched.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::character::{Ability, Character, Item, ItemId, Skill, Spell, same_name};
use crate::cost::{Origin, skill_upgrade_cost, spell_upgrade_cost};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{Budget, Ledger};
use crate::rank::Rank;
use crate::stats;
use crate::xplog::TransactionLogEntry;

/// Input for acquiring a skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSkill {
    /// Skill name. Must not match an existing skill (case-insensitive).
    pub name: String,
    /// Attribute whose modifier adds to rolls.
    pub related_attribute: Option<String>,
    /// Rank to acquire at.
    pub rank: Rank,
    /// Halve all costs for this skill.
    pub discounted: bool,
    /// Record the rank as a free starting grant.
    pub initial: bool,
}

impl NewSkill {
    /// A purchased, undiscounted skill at `rank`.
    pub fn new(name: impl Into<String>, rank: Rank) -> Self {
        Self {
            name: name.into(),
            related_attribute: None,
            rank,
            discounted: false,
            initial: false,
        }
    }
}

/// Input for acquiring a spell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSpell {
    /// Spell name. Must not match an existing spell (case-insensitive).
    pub name: String,
    /// Rank to acquire at.
    pub rank: Rank,
    /// Learned or created.
    pub origin: Origin,
    /// Halve all costs for this spell.
    pub discounted: bool,
    /// Record the rank as a free starting grant.
    pub initial: bool,
    /// In-game casting cost text.
    pub cost: String,
    /// Effect text.
    pub description: String,
}

impl NewSpell {
    /// A purchased, undiscounted spell at `rank`.
    pub fn new(name: impl Into<String>, rank: Rank, origin: Origin) -> Self {
        Self {
            name: name.into(),
            rank,
            origin,
            discounted: false,
            initial: false,
            cost: String::new(),
            description: String::new(),
        }
    }
}

/// A single change to a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Change the XP granted so far.
    SetTotalXp {
        /// New total.
        total_xp: i64,
    },
    /// Buy one attribute point.
    UpgradeAttribute {
        /// Attribute name or alias.
        attribute: String,
    },
    /// Refund the most recently bought point of an attribute.
    ReverseAttributePoint {
        /// Attribute name or alias.
        attribute: String,
    },
    /// Set an attribute's racial offset.
    SetRacialBonus {
        /// Attribute name or alias.
        attribute: String,
        /// New offset.
        bonus: i32,
    },
    /// Set an attribute's equipment bonus.
    SetItemBonus {
        /// Attribute name or alias.
        attribute: String,
        /// New bonus.
        bonus: i32,
    },
    /// Add a new skill.
    AcquireSkill(NewSkill),
    /// Advance a skill one rank.
    UpgradeSkill {
        /// Skill name.
        skill: String,
    },
    /// Remove a skill, refunding its net spend.
    RemoveSkill {
        /// Skill name.
        skill: String,
    },
    /// Add a new spell.
    AcquireSpell(NewSpell),
    /// Advance a spell one rank.
    UpgradeSpell {
        /// Spell name.
        spell: String,
    },
    /// Remove a spell, refunding its net spend.
    RemoveSpell {
        /// Spell name.
        spell: String,
    },
    /// Add a narrative ability.
    AddAbility(Ability),
    /// Remove an ability by name.
    RemoveAbility {
        /// Ability name.
        ability: String,
    },
    /// Add an inventory item.
    AddItem(Item),
    /// Remove an inventory item.
    RemoveItem {
        /// Item ID.
        item: ItemId,
    },
    /// Flip an item's equipped flag.
    ToggleEquip {
        /// Item ID.
        item: ItemId,
    },
    /// Choose which skill's rank bonus applies to Armor Class.
    SelectArmorSkill {
        /// Skill name, or `None` to clear.
        skill: Option<String>,
    },
    /// Set Armor Class before equipment and skills.
    SetBaseArmorClass {
        /// New base value.
        value: i64,
    },
    /// Set maximum health; stored as an adjustment to the formula.
    SetMaxHp {
        /// Desired maximum.
        value: i64,
    },
    /// Set maximum mana; stored as an adjustment to the formula.
    SetMaxMp {
        /// Desired maximum.
        value: i64,
    },
    /// Set current health.
    SetHp {
        /// New current value.
        value: i64,
    },
    /// Set current mana.
    SetMp {
        /// New current value.
        value: i64,
    },
    /// Rename the character.
    Rename {
        /// New name.
        name: String,
    },
}

impl Command {
    /// Whether the command moves XP and is recorded in the log.
    pub fn is_logged(&self) -> bool {
        matches!(
            self,
            Self::SetTotalXp { .. }
                | Self::UpgradeAttribute { .. }
                | Self::ReverseAttributePoint { .. }
                | Self::AcquireSkill(_)
                | Self::UpgradeSkill { .. }
                | Self::RemoveSkill { .. }
                | Self::AcquireSpell(_)
                | Self::UpgradeSpell { .. }
                | Self::RemoveSpell { .. }
        )
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetTotalXp { .. } => "set_total_xp",
            Self::UpgradeAttribute { .. } => "upgrade_attribute",
            Self::ReverseAttributePoint { .. } => "reverse_attribute_point",
            Self::SetRacialBonus { .. } => "set_racial_bonus",
            Self::SetItemBonus { .. } => "set_item_bonus",
            Self::AcquireSkill(_) => "acquire_skill",
            Self::UpgradeSkill { .. } => "upgrade_skill",
            Self::RemoveSkill { .. } => "remove_skill",
            Self::AcquireSpell(_) => "acquire_spell",
            Self::UpgradeSpell { .. } => "upgrade_spell",
            Self::RemoveSpell { .. } => "remove_spell",
            Self::AddAbility(_) => "add_ability",
            Self::RemoveAbility { .. } => "remove_ability",
            Self::AddItem(_) => "add_item",
            Self::RemoveItem { .. } => "remove_item",
            Self::ToggleEquip { .. } => "toggle_equip",
            Self::SelectArmorSkill { .. } => "select_armor_skill",
            Self::SetBaseArmorClass { .. } => "set_base_armor_class",
            Self::SetMaxHp { .. } => "set_max_hp",
            Self::SetMaxMp { .. } => "set_max_mp",
            Self::SetHp { .. } => "set_hp",
            Self::SetMp { .. } => "set_mp",
            Self::Rename { .. } => "rename",
        }
    }
}

/// The result of a successful command.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    /// The character after the command.
    pub character: Character,
    /// The log entry appended, for logged commands.
    pub entry: Option<TransactionLogEntry>,
}

/// A log line to append once the mutation has succeeded.
type Charge = Option<(String, i64)>;

impl Ledger {
    /// Execute `command` against a copy of `character`.
    ///
    /// On success the updated copy and the appended log entry are returned.
    /// On failure nothing has changed.
    pub fn execute(&self, character: &Character, command: &Command) -> LedgerResult<Applied> {
        let mut draft = character.clone();
        let charge = match self.mutate(&mut draft, command) {
            Ok(charge) => charge,
            Err(e) => {
                tracing::debug!(
                    character = %character.id,
                    command = command.name(),
                    error = %e,
                    "command rejected"
                );
                return Err(e);
            }
        };

        let entry = charge.map(|(description, cost)| {
            let entry = TransactionLogEntry::new(description, cost);
            draft.xp_log.append(entry.clone());
            entry
        });
        tracing::debug!(
            character = %draft.id,
            command = command.name(),
            cost = entry.as_ref().map_or(0, |e| e.cost),
            "command applied"
        );
        if let Budget::OverBudget { deficit } = self.budget(&draft) {
            tracing::warn!(character = %draft.id, deficit, "character is over budget");
        }

        Ok(Applied {
            character: draft,
            entry,
        })
    }

    fn require(&self, character: &Character, cost: i64) -> LedgerResult<()> {
        let available = self.available(character);
        if cost > available {
            return Err(LedgerError::InsufficientFunds { cost, available });
        }
        Ok(())
    }

    fn mutate(&self, c: &mut Character, command: &Command) -> LedgerResult<Charge> {
        match command {
            Command::SetTotalXp { total_xp } => {
                let old = c.total_xp;
                c.total_xp = *total_xp;
                Ok(Some((format!("Total XP set {old} → {total_xp}"), 0)))
            }

            Command::UpgradeAttribute { attribute } => {
                let attr = c
                    .attribute(attribute)
                    .ok_or_else(|| LedgerError::UnknownAttribute(attribute.clone()))?;
                let cost = self.next_point_cost(attr);
                self.require(c, cost)?;
                let attr = c
                    .attribute_mut(attribute)
                    .ok_or_else(|| LedgerError::UnknownAttribute(attribute.clone()))?;
                let old = attr.value;
                attr.value = old
                    .checked_add(1)
                    .ok_or_else(|| LedgerError::AttributeAtMaximum(attr.name.clone()))?;
                Ok(Some((
                    format!("Upgraded {} {old} → {}", attr.name, attr.value),
                    cost,
                )))
            }

            Command::ReverseAttributePoint { attribute } => {
                if !self.config().reversible_attribute_points {
                    return Err(LedgerError::IrreversibleAttributePoint);
                }
                let curve = self.config().attribute_cost_curve;
                let attr = c
                    .attribute_mut(attribute)
                    .ok_or_else(|| LedgerError::UnknownAttribute(attribute.clone()))?;
                if attr.value == 0 {
                    return Err(LedgerError::AttributeAtZero(attr.name.clone()));
                }
                let old = attr.value;
                attr.value -= 1;
                let refund = curve.point_cost(attr.value);
                Ok(Some((
                    format!("Reversed {} {old} → {}", attr.name, attr.value),
                    -refund,
                )))
            }

            Command::SetRacialBonus { attribute, bonus } => {
                let attr = c
                    .attribute_mut(attribute)
                    .ok_or_else(|| LedgerError::UnknownAttribute(attribute.clone()))?;
                attr.racial_bonus = *bonus;
                Ok(None)
            }

            Command::SetItemBonus { attribute, bonus } => {
                let attr = c
                    .attribute_mut(attribute)
                    .ok_or_else(|| LedgerError::UnknownAttribute(attribute.clone()))?;
                attr.bonus_from_items = *bonus;
                Ok(None)
            }

            Command::AcquireSkill(new) => {
                let name = non_empty(&new.name, "skill")?;
                if c.skill(name).is_some() {
                    return Err(LedgerError::DuplicateEntity {
                        kind: "skill",
                        name: name.to_string(),
                    });
                }
                let mut skill = Skill::new(name, new.rank).discounted(new.discounted);
                skill.related_attribute = new
                    .related_attribute
                    .as_deref()
                    .map(str::trim)
                    .filter(|a| !a.is_empty() && !a.eq_ignore_ascii_case("none"))
                    .map(str::to_string);
                if new.initial {
                    skill = skill.granted();
                }
                let cost = skill.net_spend();
                self.require(c, cost)?;
                let description = if new.initial {
                    format!("Granted skill {name} at {}", new.rank)
                } else {
                    format!("Acquired skill {name} at {}", new.rank)
                };
                c.skills.push(skill);
                Ok(Some((description, cost)))
            }

            Command::UpgradeSkill { skill } => {
                let current = c
                    .skill(skill)
                    .ok_or_else(|| LedgerError::SkillNotFound(skill.clone()))?;
                let (Some(next), Some(cost)) = (
                    current.rank.next(),
                    skill_upgrade_cost(current.rank, current.is_discounted),
                ) else {
                    return Err(LedgerError::RankAtMaximum(current.name.clone()));
                };
                self.require(c, cost)?;
                let target = c
                    .skill_mut(skill)
                    .ok_or_else(|| LedgerError::SkillNotFound(skill.clone()))?;
                let old = target.rank;
                target.rank = next;
                Ok(Some((
                    format!("Upgraded skill {} {old} → {next}", target.name),
                    cost,
                )))
            }

            Command::RemoveSkill { skill } => {
                let index = c
                    .skills
                    .iter()
                    .position(|s| same_name(&s.name, skill))
                    .ok_or_else(|| LedgerError::SkillNotFound(skill.clone()))?;
                let removed = c.skills.remove(index);
                Ok(refund("skill", &removed.name, removed.net_spend()))
            }

            Command::AcquireSpell(new) => {
                let name = non_empty(&new.name, "spell")?;
                if c.spell(name).is_some() {
                    return Err(LedgerError::DuplicateEntity {
                        kind: "spell",
                        name: name.to_string(),
                    });
                }
                let mut spell = Spell::new(name, new.rank, new.origin).discounted(new.discounted);
                spell.cost = new.cost.clone();
                spell.description = new.description.clone();
                if new.initial {
                    spell = spell.granted();
                }
                let cost = spell.net_spend();
                self.require(c, cost)?;
                let verb = if new.initial { "Granted" } else { "Acquired" };
                let description = format!("{verb} {} spell {name} at {}", new.origin, new.rank);
                c.spells.push(spell);
                Ok(Some((description, cost)))
            }

            Command::UpgradeSpell { spell } => {
                let current = c
                    .spell(spell)
                    .ok_or_else(|| LedgerError::SpellNotFound(spell.clone()))?;
                let (Some(next), Some(cost)) = (
                    current.rank.next(),
                    spell_upgrade_cost(current.origin, current.rank, current.is_discounted),
                ) else {
                    return Err(LedgerError::RankAtMaximum(current.name.clone()));
                };
                self.require(c, cost)?;
                let target = c
                    .spell_mut(spell)
                    .ok_or_else(|| LedgerError::SpellNotFound(spell.clone()))?;
                let old = target.rank;
                target.rank = next;
                Ok(Some((
                    format!("Upgraded spell {} {old} → {next}", target.name),
                    cost,
                )))
            }

            Command::RemoveSpell { spell } => {
                let index = c
                    .spells
                    .iter()
                    .position(|s| same_name(&s.name, spell))
                    .ok_or_else(|| LedgerError::SpellNotFound(spell.clone()))?;
                let removed = c.spells.remove(index);
                Ok(refund("spell", &removed.name, removed.net_spend()))
            }

            Command::AddAbility(ability) => {
                non_empty(&ability.name, "ability")?;
                c.abilities.push(ability.clone());
                Ok(None)
            }

            Command::RemoveAbility { ability } => {
                let index = c
                    .abilities
                    .iter()
                    .position(|a| same_name(&a.name, ability))
                    .ok_or_else(|| LedgerError::AbilityNotFound(ability.clone()))?;
                c.abilities.remove(index);
                Ok(None)
            }

            Command::AddItem(item) => {
                non_empty(&item.name, "item")?;
                c.items.push(item.clone());
                Ok(None)
            }

            Command::RemoveItem { item } => {
                let index = c
                    .items
                    .iter()
                    .position(|i| i.id == *item)
                    .ok_or_else(|| LedgerError::ItemNotFound(item.to_string()))?;
                c.items.remove(index);
                Ok(None)
            }

            Command::ToggleEquip { item } => {
                let target = c
                    .item_mut(*item)
                    .ok_or_else(|| LedgerError::ItemNotFound(item.to_string()))?;
                target.is_equipped = !target.is_equipped;
                Ok(None)
            }

            Command::SelectArmorSkill { skill } => {
                c.selected_armor_skill = match skill {
                    Some(name) => {
                        let owned = c
                            .skill(name)
                            .ok_or_else(|| LedgerError::SkillNotFound(name.clone()))?;
                        if !catalog::is_armor_skill(&owned.name) {
                            return Err(LedgerError::NotAnArmorSkill(owned.name.clone()));
                        }
                        Some(owned.name.clone())
                    }
                    None => None,
                };
                Ok(None)
            }

            Command::SetBaseArmorClass { value } => {
                c.base_ac = *value;
                Ok(None)
            }

            Command::SetMaxHp { value } => {
                c.hp.extra_max = stats::hp_extra_for(c, *value, self.config());
                Ok(None)
            }

            Command::SetMaxMp { value } => {
                c.mp.extra_max = stats::mp_extra_for(c, *value, self.config());
                Ok(None)
            }

            Command::SetHp { value } => {
                c.hp.current = *value;
                Ok(None)
            }

            Command::SetMp { value } => {
                c.mp.current = *value;
                Ok(None)
            }

            Command::Rename { name } => {
                c.name = non_empty(name, "character")?.to_string();
                Ok(None)
            }
        }
    }
}

fn non_empty<'a>(name: &'a str, kind: &'static str) -> LedgerResult<&'a str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(LedgerError::EmptyName(kind))
    } else {
        Ok(trimmed)
    }
}

/// A refund entry, or nothing when the entity accounted for no spend.
fn refund(kind: &str, name: &str, net_spend: i64) -> Charge {
    (net_spend > 0).then(|| (format!("Removed {kind} {name} (refund)"), -net_spend))
}

impl Character {
    /// Apply `command` in place. The character is replaced only on success.
    pub fn apply(
        &mut self,
        ledger: &Ledger,
        command: &Command,
    ) -> LedgerResult<Option<TransactionLogEntry>> {
        let applied = ledger.execute(self, command)?;
        *self = applied.character;
        Ok(applied.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::ItemType;
    use crate::config::LedgerConfig;

    fn run(ledger: &Ledger, c: &mut Character, command: Command) -> Option<TransactionLogEntry> {
        c.apply(ledger, &command).unwrap()
    }

    #[test]
    fn upgrade_attribute_logs_point_cost() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 100);
        c.attributes[0].value = 9;
        let entry = run(
            &ledger,
            &mut c,
            Command::UpgradeAttribute {
                attribute: "strength".into(),
            },
        )
        .unwrap();
        assert_eq!(entry.cost, 1);
        assert_eq!(entry.description, "Upgraded Strength 9 → 10");
        assert_eq!(c.attributes[0].value, 10);
        assert_eq!(c.xp_log.len(), 1);
    }

    #[test]
    fn reverse_refunds_the_point_removed() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 100);
        c.attributes[0].value = 10;
        let entry = run(
            &ledger,
            &mut c,
            Command::ReverseAttributePoint {
                attribute: "Força".into(),
            },
        )
        .unwrap();
        assert_eq!(entry.cost, -1);
        assert_eq!(c.attributes[0].value, 9);
    }

    #[test]
    fn reverse_at_zero_is_rejected() {
        let ledger = Ledger::default();
        let c = Character::new("Ardrin", 100);
        let err = ledger
            .execute(
                &c,
                &Command::ReverseAttributePoint {
                    attribute: "Mind".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::AttributeAtZero(_)));
    }

    #[test]
    fn reverse_disabled_by_config() {
        let ledger = Ledger::new(LedgerConfig::default().with_reversible_attribute_points(false));
        let mut c = Character::new("Ardrin", 100);
        c.attributes[0].value = 3;
        let err = ledger
            .execute(
                &c,
                &Command::ReverseAttributePoint {
                    attribute: "Strength".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::IrreversibleAttributePoint));
    }

    #[test]
    fn unknown_attribute() {
        let ledger = Ledger::default();
        let c = Character::new("Ardrin", 100);
        let err = ledger
            .execute(
                &c,
                &Command::UpgradeAttribute {
                    attribute: "Luck".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::UnknownAttribute(_)));
    }

    #[test]
    fn duplicate_skill_is_rejected_case_insensitively() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 500);
        run(&ledger, &mut c, Command::AcquireSkill(NewSkill::new("Alchemy", Rank::D)));
        let before = c.clone();
        let err = c
            .apply(
                &ledger,
                &Command::AcquireSkill(NewSkill::new("  ALCHEMY ", Rank::E)),
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateEntity { kind: "skill", .. }));
        assert_eq!(c, before);
    }

    #[test]
    fn initial_skill_is_free_and_logged_at_zero() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 0);
        let mut new = NewSkill::new("Smithing", Rank::A);
        new.initial = true;
        let entry = run(&ledger, &mut c, Command::AcquireSkill(new)).unwrap();
        assert_eq!(entry.cost, 0);
        assert!(entry.description.starts_with("Granted skill Smithing"));
        assert_eq!(ledger.spent(&c), 0);
        assert_eq!(c.skills[0].initial_rank, Some(Rank::A));
    }

    #[test]
    fn acquisition_is_affordability_gated() {
        let ledger = Ledger::default();
        let c = Character::new("Ardrin", 59);
        let err = ledger
            .execute(&c, &Command::AcquireSkill(NewSkill::new("Alchemy", Rank::C)))
            .unwrap_err();
        assert!(err.is_insufficient_funds());
    }

    #[test]
    fn none_attribute_sentinel_is_dropped() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 100);
        let mut new = NewSkill::new("Luck", Rank::E);
        new.related_attribute = Some("none".into());
        run(&ledger, &mut c, Command::AcquireSkill(new));
        assert_eq!(c.skills[0].related_attribute, None);
    }

    #[test]
    fn skill_at_s_cannot_upgrade() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 10_000);
        c.skills.push(Skill::new("Archery", Rank::S));
        let err = ledger
            .execute(
                &c,
                &Command::UpgradeSkill {
                    skill: "archery".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::RankAtMaximum(_)));
    }

    #[test]
    fn removing_granted_skill_logs_nothing() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 0);
        c.skills.push(Skill::new("Smithing", Rank::B).granted());
        let entry = run(
            &ledger,
            &mut c,
            Command::RemoveSkill {
                skill: "Smithing".into(),
            },
        );
        assert!(entry.is_none());
        assert!(c.skills.is_empty());
        assert!(c.xp_log.is_empty());
    }

    #[test]
    fn spell_upgrade_charges_entry_difference() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 1_000);
        run(
            &ledger,
            &mut c,
            Command::AcquireSpell(NewSpell::new("Ember", Rank::D, Origin::Created)),
        );
        let entry = run(
            &ledger,
            &mut c,
            Command::UpgradeSpell {
                spell: "ember".into(),
            },
        )
        .unwrap();
        assert_eq!(entry.cost, 100 - 40);
        assert_eq!(c.spells[0].rank, Rank::C);
        assert_eq!(ledger.spent(&c), 100);
    }

    #[test]
    fn duplicate_spell_is_rejected() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 1_000);
        run(
            &ledger,
            &mut c,
            Command::AcquireSpell(NewSpell::new("Ember", Rank::E, Origin::Learned)),
        );
        let err = c
            .apply(
                &ledger,
                &Command::AcquireSpell(NewSpell::new("ember", Rank::E, Origin::Created)),
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateEntity { kind: "spell", .. }));
    }

    #[test]
    fn ungated_commands_never_log() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 0);
        let item = Item::new("Chain Mail", ItemType::Armor).with_defense(4);
        let id = item.id;
        run(&ledger, &mut c, Command::AddItem(item));
        run(&ledger, &mut c, Command::ToggleEquip { item: id });
        run(
            &ledger,
            &mut c,
            Command::SetRacialBonus {
                attribute: "Constitution".into(),
                bonus: 10,
            },
        );
        run(&ledger, &mut c, Command::AddAbility(Ability::new("Darkvision", "")));
        run(&ledger, &mut c, Command::SetBaseArmorClass { value: 11 });
        assert!(c.xp_log.is_empty());
        assert!(c.items[0].is_equipped);
        assert_eq!(stats::armor_class(&c, ledger.config()), 15);
        assert_eq!(stats::hp_max(&c, ledger.config()), 25);
    }

    #[test]
    fn set_max_hp_back_solves() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 0);
        run(&ledger, &mut c, Command::SetMaxHp { value: 32 });
        assert_eq!(c.hp.extra_max, 12);
        assert_eq!(stats::hp_max(&c, ledger.config()), 32);
    }

    #[test]
    fn select_armor_skill_requires_existing_skill() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 0);
        assert!(
            c.apply(
                &ledger,
                &Command::SelectArmorSkill {
                    skill: Some("Shields".into())
                }
            )
            .is_err()
        );
        c.skills.push(Skill::new("Shields", Rank::D));
        run(
            &ledger,
            &mut c,
            Command::SelectArmorSkill {
                skill: Some("shields".into()),
            },
        );
        assert_eq!(c.selected_armor_skill.as_deref(), Some("Shields"));
        run(&ledger, &mut c, Command::SelectArmorSkill { skill: None });
        assert_eq!(c.selected_armor_skill, None);
    }

    #[test]
    fn select_armor_skill_rejects_other_skills() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 0);
        c.skills.push(Skill::new("Alchemy", Rank::S));
        let err = ledger
            .execute(
                &c,
                &Command::SelectArmorSkill {
                    skill: Some("Alchemy".into()),
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::NotAnArmorSkill(ref name) if name == "Alchemy"));
        assert_eq!(c.selected_armor_skill, None);
        assert_eq!(stats::armor_class(&c, ledger.config()), 10);
    }

    #[test]
    fn select_armor_skill_accepts_legacy_labels() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 0);
        c.skills.push(Skill::new("Escudos", Rank::C));
        run(
            &ledger,
            &mut c,
            Command::SelectArmorSkill {
                skill: Some("escudos".into()),
            },
        );
        assert_eq!(c.selected_armor_skill.as_deref(), Some("Escudos"));
        assert_eq!(stats::armor_class(&c, ledger.config()), 14);
    }

    #[test]
    fn upgrade_at_maximum_value_is_rejected() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", i64::MAX);
        c.attributes[0].value = u32::MAX;
        let before = c.clone();
        let err = c
            .apply(
                &ledger,
                &Command::UpgradeAttribute {
                    attribute: "Strength".into(),
                },
            )
            .unwrap_err();
        assert!(matches!(err, LedgerError::AttributeAtMaximum(ref name) if name == "Strength"));
        assert_eq!(c, before);
    }

    #[test]
    fn missing_item_is_rejected() {
        let ledger = Ledger::default();
        let c = Character::new("Ardrin", 0);
        let err = ledger
            .execute(&c, &Command::RemoveItem { item: ItemId::new() })
            .unwrap_err();
        assert!(matches!(err, LedgerError::ItemNotFound(_)));
    }

    #[test]
    fn empty_names_are_rejected() {
        let ledger = Ledger::default();
        let c = Character::new("Ardrin", 100);
        assert!(matches!(
            ledger.execute(&c, &Command::AcquireSkill(NewSkill::new("  ", Rank::E))),
            Err(LedgerError::EmptyName("skill"))
        ));
        assert!(matches!(
            ledger.execute(&c, &Command::Rename { name: String::new() }),
            Err(LedgerError::EmptyName("character"))
        ));
    }

    #[test]
    fn set_total_xp_is_logged_at_zero() {
        let ledger = Ledger::default();
        let mut c = Character::new("Ardrin", 0);
        let entry = run(&ledger, &mut c, Command::SetTotalXp { total_xp: 250 }).unwrap();
        assert_eq!(entry.cost, 0);
        assert_eq!(c.total_xp, 250);
        assert!(Command::SetTotalXp { total_xp: 0 }.is_logged());
        assert!(!Command::SetHp { value: 0 }.is_logged());
    }

    #[test]
    fn command_json_shape() {
        let cmd: Command =
            serde_json::from_str(r#"{"command":"upgrade_skill","skill":"Alchemy"}"#).unwrap();
        assert_eq!(
            cmd,
            Command::UpgradeSkill {
                skill: "Alchemy".into()
            }
        );
    }
}
