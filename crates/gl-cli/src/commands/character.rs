use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use gl_core::stats::{self, DerivedStats};
use gl_core::{Character, Command, Ledger, Roster};

use super::{Session, load_ledger, xp_summary};

pub fn new(file: &Path, config: Option<&Path>, name: &str, xp: i64) -> Result<(), String> {
    let mut session = if file.exists() {
        let mut session = Session::open(file, config)?;
        session.roster.create(name.trim(), 0);
        session
    } else {
        let roster = Roster::new(Character::new(name.trim(), 0));
        Session::with_roster(file, roster, load_ledger(config)?)
    };
    if session.active().name.is_empty() {
        return Err("character name cannot be empty".into());
    }
    if xp != 0 {
        session.apply(Command::SetTotalXp { total_xp: xp })?;
    }
    session.save()?;
    println!("  Created {}", session.active().name.bold());
    println!("  {}", xp_summary(&session.ledger, session.active()));
    Ok(())
}

pub fn list(session: &Session) -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "Name", "Total XP", "Spent", "Available"]);

    for (i, c) in session.roster.characters().iter().enumerate() {
        let marker = if i == session.roster.active_index() {
            "*"
        } else {
            ""
        };
        let available = session.ledger.available(c);
        table.add_row(vec![
            marker.to_string(),
            c.name.clone(),
            c.total_xp.to_string(),
            session.ledger.spent(c).to_string(),
            available.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} characters", session.roster.len());
    Ok(())
}

pub fn select(mut session: Session, name: &str) -> Result<(), String> {
    session
        .roster
        .select_by_name(name)
        .map_err(|e| e.to_string())?;
    session.save()?;
    println!("  Selected {}", session.active().name.bold());
    Ok(())
}

pub fn delete(mut session: Session, name: &str) -> Result<(), String> {
    let index = session
        .roster
        .position(name)
        .ok_or_else(|| format!("character not found: \"{name}\""))?;
    let removed = session.roster.remove(index).map_err(|e| e.to_string())?;
    session.save()?;
    println!("  Deleted {}", removed.name.bold());
    Ok(())
}

pub fn xp(session: Session, total: i64) -> Result<(), String> {
    session.commit(Command::SetTotalXp { total_xp: total }, "Total XP updated")
}

pub fn show(session: &Session) -> Result<(), String> {
    let ledger = &session.ledger;
    let c = session.active();
    let cfg = ledger.config();

    println!("  {}", c.name.bold());
    if c.age > 0 || !c.gender.is_empty() {
        println!("  age {} · {}", c.age, c.gender.dimmed());
    }
    println!("  {}", xp_summary(ledger, c));
    let b = ledger.breakdown(c);
    println!(
        "  spent on attributes {}, skills {}, spells {}",
        b.attributes, b.skills, b.spells
    );
    println!();

    let d = DerivedStats::compute(c, cfg);
    println!(
        "  HP {}/{}   MP {}/{}   AC {}",
        c.hp.current, d.hp_max, c.mp.current, d.mp_max, d.armor_class
    );
    if let Some(skill) = &c.selected_armor_skill {
        println!("  armor skill: {skill}");
    }
    println!();

    println!("{}", attribute_table(ledger, c));

    if !c.skills.is_empty() {
        println!();
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Skill", "Rank", "Attribute", "Bonus", "XP", "Notes"]);
        for s in &c.skills {
            table.add_row(vec![
                s.name.clone(),
                format!("{} ({})", s.rank, s.rank.title()),
                s.related_attribute.clone().unwrap_or_else(|| "—".into()),
                format!("{:+}", stats::skill_roll_bonus(c, s, cfg)),
                s.net_spend().to_string(),
                notes(s.is_discounted, s.initial_rank),
            ]);
        }
        println!("{table}");
    }

    if !c.spells.is_empty() {
        println!();
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Spell", "Rank", "Origin", "Cast", "XP", "Notes"]);
        for s in &c.spells {
            table.add_row(vec![
                s.name.clone(),
                s.rank.to_string(),
                s.origin.to_string(),
                s.cost.clone(),
                s.net_spend().to_string(),
                notes(s.is_discounted, s.initial_rank),
            ]);
        }
        println!("{table}");
    }

    if !c.abilities.is_empty() {
        println!();
        println!("  {}", "Abilities:".dimmed());
        for a in &c.abilities {
            if a.description.is_empty() {
                println!("    {}", a.name);
            } else {
                println!("    {}: {}", a.name, a.description);
            }
        }
    }

    if !c.items.is_empty() {
        println!();
        println!("{}", super::item::inventory_table(c));
    }

    Ok(())
}

fn attribute_table(ledger: &Ledger, c: &Character) -> Table {
    let cfg = ledger.config();
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Attribute",
        "Points",
        "Racial",
        "Items",
        "Total",
        "Mod",
        "Next",
    ]);
    for a in &c.attributes {
        table.add_row(vec![
            a.name.clone(),
            a.value.to_string(),
            format!("{:+}", a.racial_bonus),
            format!("{:+}", a.bonus_from_items),
            stats::attribute_total(a).to_string(),
            format!("{:+}", stats::total_modifier(a, cfg)),
            ledger.next_point_cost(a).to_string(),
        ]);
    }
    table
}

fn notes(discounted: bool, grant: Option<gl_core::Rank>) -> String {
    let mut notes = Vec::new();
    if let Some(rank) = grant {
        notes.push(format!("granted {rank}"));
    }
    if discounted {
        notes.push("discounted".to_string());
    }
    notes.join(", ")
}
