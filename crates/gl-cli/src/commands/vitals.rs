use gl_core::Command;

use super::{Session, optional_name};

pub fn armor(mut session: Session, skill: Option<&str>, base: Option<i64>) -> Result<(), String> {
    if skill.is_none() && base.is_none() {
        return Err("nothing to change: pass a skill name or --base".into());
    }
    if let Some(value) = base {
        session.apply(Command::SetBaseArmorClass { value })?;
    }
    if skill.is_some() {
        session.apply(Command::SelectArmorSkill {
            skill: optional_name(skill),
        })?;
    }
    session.save()?;
    report(&session);
    Ok(())
}

pub fn hp(session: Session, current: Option<i64>, max: Option<i64>) -> Result<(), String> {
    pool(
        session,
        current.map(|value| Command::SetHp { value }),
        max.map(|value| Command::SetMaxHp { value }),
    )
}

pub fn mp(session: Session, current: Option<i64>, max: Option<i64>) -> Result<(), String> {
    pool(
        session,
        current.map(|value| Command::SetMp { value }),
        max.map(|value| Command::SetMaxMp { value }),
    )
}

fn pool(mut session: Session, current: Option<Command>, max: Option<Command>) -> Result<(), String> {
    if current.is_none() && max.is_none() {
        return Err("nothing to change: pass --current or --max".into());
    }
    for command in [max, current].into_iter().flatten() {
        session.apply(command)?;
    }
    session.save()?;
    report(&session);
    Ok(())
}

fn report(session: &Session) {
    let c = session.active();
    let d = gl_core::DerivedStats::compute(c, session.ledger.config());
    println!(
        "  HP {}/{}   MP {}/{}   AC {}",
        c.hp.current, d.hp_max, c.mp.current, d.mp_max, d.armor_class
    );
}
