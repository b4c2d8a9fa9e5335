//! End-to-end ledger scenarios and the configuration variants.

use gl_core::cost::Origin;
use gl_core::stats::{self, DerivedStats};
use gl_core::{
    AttributeCostCurve, AttributeKind, Budget, Character, Command, ImportMode, Item, ItemType,
    Ledger, LedgerConfig, LedgerError, NewSkill, NewSpell, Rank, Roster,
};

fn upgrade(attribute: &str) -> Command {
    Command::UpgradeAttribute {
        attribute: attribute.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Attribute bands
// ---------------------------------------------------------------------------

#[test]
fn fifteen_points_then_a_sixteenth() {
    let ledger = Ledger::default();
    let mut c = Character::new("Ardrin", 100);
    for _ in 0..15 {
        c.apply(&ledger, &upgrade("Strength")).unwrap();
    }
    assert_eq!(c.attributes[0].value, 15);
    assert_eq!(ledger.spent(&c), 20);
    assert_eq!(ledger.available(&c), 80);

    let entry = c.apply(&ledger, &upgrade("Strength")).unwrap().unwrap();
    assert_eq!(entry.cost, 2);
    assert_eq!(ledger.available(&c), 78);
    assert_eq!(c.xp_log.len(), 16);
    assert_eq!(c.xp_log.net_cost(), 22);
}

#[test]
fn legacy_curve_prices_the_first_twenty_at_one() {
    let ledger =
        Ledger::new(LedgerConfig::default().with_attribute_cost_curve(AttributeCostCurve::Legacy));
    let mut c = Character::new("Ardrin", 100);
    for _ in 0..16 {
        c.apply(&ledger, &upgrade("Strength")).unwrap();
    }
    assert_eq!(ledger.available(&c), 84);
}

// ---------------------------------------------------------------------------
// Skills and spells
// ---------------------------------------------------------------------------

#[test]
fn alchemy_at_c_then_unaffordable_upgrade() {
    let ledger = Ledger::default();
    let mut c = Character::new("Ardrin", 60);
    let mut alchemy = NewSkill::new("Alquimia", Rank::C);
    alchemy.related_attribute = Some("Ofício".to_string());

    let entry = c
        .apply(&ledger, &Command::AcquireSkill(alchemy))
        .unwrap()
        .unwrap();
    assert_eq!(entry.cost, 60);
    assert_eq!(ledger.available(&c), 0);

    let before = c.clone();
    let err = c
        .apply(
            &ledger,
            &Command::UpgradeSkill {
                skill: "Alquimia".into(),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::InsufficientFunds {
            cost: 200,
            available: 0
        }
    ));
    assert_eq!(c, before);
    assert_eq!(c.skills[0].rank, Rank::C);
}

#[test]
fn discounted_created_spell_at_b() {
    let ledger = Ledger::default();
    let mut c = Character::new("Ardrin", 500);
    let mut spell = NewSpell::new("Fireball", Rank::B, Origin::Created);
    spell.discounted = true;
    spell.cost = "30 MP".to_string();

    let entry = c
        .apply(&ledger, &Command::AcquireSpell(spell))
        .unwrap()
        .unwrap();
    assert_eq!(entry.cost, 100);
    assert_eq!(ledger.breakdown(&c).spells, 100);
    assert_eq!(c.spells[0].cost, "30 MP");
}

#[test]
fn granted_skill_charges_only_above_the_grant() {
    let ledger = Ledger::default();
    let mut c = Character::new("Ardrin", 300);
    let mut smithing = NewSkill::new("Smithing", Rank::B);
    smithing.initial = true;
    c.apply(&ledger, &Command::AcquireSkill(smithing)).unwrap();
    assert_eq!(ledger.spent(&c), 0);

    let entry = c
        .apply(
            &ledger,
            &Command::UpgradeSkill {
                skill: "smithing".into(),
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(entry.cost, 300);
    assert_eq!(ledger.spent(&c), 300);

    // Removing refunds only the bought rank, not the grant.
    let entry = c
        .apply(
            &ledger,
            &Command::RemoveSkill {
                skill: "Smithing".into(),
            },
        )
        .unwrap()
        .unwrap();
    assert_eq!(entry.cost, -300);
    assert_eq!(ledger.spent(&c), 0);
    assert!(ledger.audit(&c).is_consistent());
}

// ---------------------------------------------------------------------------
// Budget
// ---------------------------------------------------------------------------

#[test]
fn lowering_total_xp_goes_over_budget() {
    let ledger = Ledger::default();
    let mut c = Character::new("Ardrin", 100);
    c.apply(
        &ledger,
        &Command::AcquireSkill(NewSkill::new("Stealth", Rank::C)),
    )
    .unwrap();
    c.apply(&ledger, &Command::SetTotalXp { total_xp: 40 })
        .unwrap();
    assert_eq!(ledger.budget(&c), Budget::OverBudget { deficit: 20 });

    // Refunds are always allowed, even over budget.
    c.apply(
        &ledger,
        &Command::RemoveSkill {
            skill: "Stealth".into(),
        },
    )
    .unwrap();
    assert_eq!(ledger.budget(&c), Budget::Within { available: 40 });
}

// ---------------------------------------------------------------------------
// Configuration variants
// ---------------------------------------------------------------------------

#[test]
fn irreversible_attribute_points_variant() {
    let ledger = Ledger::new(LedgerConfig::default().with_reversible_attribute_points(false));
    let mut c = Character::new("Ardrin", 10);
    c.apply(&ledger, &upgrade("Mana")).unwrap();
    let err = c
        .apply(
            &ledger,
            &Command::ReverseAttributePoint {
                attribute: "Mana".into(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, LedgerError::IrreversibleAttributePoint));
    assert_eq!(ledger.available(&c), 9);
}

#[test]
fn modifier_cap_variant() {
    let mut c = Character::new("Ardrin", 0);
    let con = c
        .attributes
        .iter_mut()
        .find(|a| a.kind() == Some(AttributeKind::Constitution))
        .unwrap();
    con.value = 120;

    let uncapped = LedgerConfig::default();
    let capped = LedgerConfig::default().with_modifier_cap(Some(10));
    assert_eq!(stats::hp_max(&c, &uncapped), 20 + 5 * 12);
    assert_eq!(stats::hp_max(&c, &capped), 20 + 5 * 10);
}

#[test]
fn dex_to_ac_variant() {
    let ledger = Ledger::default();
    let mut c = Character::new("Ardrin", 0);
    let mut shield = Item::new("Shield", ItemType::Armor).with_defense(2);
    shield.is_equipped = true;
    c.apply(&ledger, &Command::AddItem(shield)).unwrap();
    c.apply(
        &ledger,
        &Command::SetRacialBonus {
            attribute: "Destreza".into(),
            bonus: 20,
        },
    )
    .unwrap();

    let plain = DerivedStats::compute(&c, &LedgerConfig::default());
    let dex = DerivedStats::compute(&c, &LedgerConfig::default().with_dex_to_ac(true));
    assert_eq!(plain.armor_class, 12);
    assert_eq!(dex.armor_class, 14);
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

#[test]
fn export_then_import_into_a_new_roster() {
    let ledger = Ledger::default();
    let mut roster = Roster::default();
    let c = roster.create("Ardrin", 200);
    c.apply(
        &ledger,
        &Command::AcquireSkill(NewSkill::new("Alchemy", Rank::C)),
    )
    .unwrap();
    let exported = roster.export_json().unwrap();

    let mut other = Roster::default();
    other.import_json(&exported, ImportMode::Replace).unwrap();
    other.select_by_name("ardrin").unwrap();
    let imported = other.active();
    assert_ne!(imported.id, roster.active().id);
    assert_eq!(ledger.spent(imported), 60);
    assert_eq!(imported.xp_log.len(), 1);
}

#[test]
fn older_document_without_log_or_grants() {
    let json = r#"[{
        "name": "Ardrin",
        "totalXp": 300,
        "attributes": [{ "name": "Força", "value": 12, "racialBonus": 0, "bonusFromItems": 0 }],
        "skills": [{ "name": "Alquimia", "rank": "C", "relatedAttribute": "Ofício", "initialBonus": 0, "isDiscounted": false }],
        "spells": [{ "name": "Spark", "rank": "D", "cost": "5 MP", "description": "", "origin": "created" }],
        "inventory": []
    }]"#;
    let mut roster = Roster::default();
    roster.import_json(json, ImportMode::Replace).unwrap();
    let ledger = Ledger::default();
    let c = roster.active();
    assert_eq!(ledger.breakdown(c).attributes, 14);
    assert_eq!(ledger.spent(c), 14 + 60 + 40);
    let audit = ledger.audit(c);
    assert_eq!(audit.logged, 0);
    assert!(!audit.is_consistent());
}
