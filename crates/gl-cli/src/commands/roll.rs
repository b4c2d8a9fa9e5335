use colored::Colorize;
use gl_core::stats;
use gl_dice::{DamageExpression, roll_check};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::Session;

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Roll a d20 for an attribute, a skill, or luck.
pub fn check(session: &Session, target: &str, seed: Option<u64>) -> Result<(), String> {
    let c = session.active();
    let cfg = session.ledger.config();
    let (label, bonus) = if target.eq_ignore_ascii_case("luck") || target.eq_ignore_ascii_case("sorte")
    {
        ("Luck".to_string(), 0)
    } else if let Some(attr) = c.attribute(target) {
        (attr.name.clone(), stats::attribute_roll_bonus(attr, cfg))
    } else if let Some(skill) = c.skill(target) {
        (skill.name.clone(), stats::skill_roll_bonus(c, skill, cfg))
    } else {
        return Err(format!("nothing to roll for \"{target}\""));
    };

    let roll = roll_check(label, bonus, &mut rng(seed));
    let line = roll.to_string();
    match roll.natural {
        20 => println!("  {}", line.green().bold()),
        1 => println!("  {}", line.red()),
        _ => println!("  {line}"),
    }
    Ok(())
}

/// Roll an item's damage expression.
pub fn damage(session: &Session, item: &str, seed: Option<u64>) -> Result<(), String> {
    let c = session.active();
    let found = c
        .item_by_name(item)
        .ok_or_else(|| format!("item not found: \"{item}\""))?;
    let text = found
        .damage
        .as_deref()
        .ok_or_else(|| format!("{} has no damage expression", found.name))?;
    let roll = DamageExpression::parse_lenient(text).roll(&mut rng(seed));
    println!("  {}  {roll}", found.name.bold());
    Ok(())
}
