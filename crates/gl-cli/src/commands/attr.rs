use clap::Subcommand;
use gl_core::Command;

use super::{Session, print_entry, xp_summary};

#[derive(Subcommand)]
pub enum AttrAction {
    /// Buy attribute points
    Up {
        /// Attribute name
        attribute: String,

        /// How many points to buy
        #[arg(short = 'n', long, default_value = "1")]
        times: u32,
    },

    /// Refund the last bought point
    Down {
        /// Attribute name
        attribute: String,
    },

    /// Set the racial bonus
    Racial {
        /// Attribute name
        attribute: String,

        /// New bonus
        #[arg(allow_hyphen_values = true)]
        bonus: i32,
    },

    /// Set the bonus from equipment
    Items {
        /// Attribute name
        attribute: String,

        /// New bonus
        #[arg(allow_hyphen_values = true)]
        bonus: i32,
    },
}

pub fn run(session: Session, action: AttrAction) -> Result<(), String> {
    match action {
        AttrAction::Up { attribute, times } => up(session, attribute, times),
        AttrAction::Down { attribute } => {
            session.commit(Command::ReverseAttributePoint { attribute }, "")
        }
        AttrAction::Racial { attribute, bonus } => session.commit(
            Command::SetRacialBonus { attribute, bonus },
            "Racial bonus updated",
        ),
        AttrAction::Items { attribute, bonus } => session.commit(
            Command::SetItemBonus { attribute, bonus },
            "Equipment bonus updated",
        ),
    }
}

/// Buy points one at a time. Stops at the first rejection but keeps the
/// points already bought.
fn up(mut session: Session, attribute: String, times: u32) -> Result<(), String> {
    let mut failure = None;
    for _ in 0..times {
        match session.apply(Command::UpgradeAttribute {
            attribute: attribute.clone(),
        }) {
            Ok(Some(entry)) => print_entry(&entry),
            Ok(None) => {}
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }
    session.save()?;
    println!("  {}", xp_summary(&session.ledger, session.active()));
    failure.map_or(Ok(()), Err)
}
