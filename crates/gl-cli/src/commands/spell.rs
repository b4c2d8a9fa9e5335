use clap::Subcommand;
use gl_core::{Command, NewSpell, Origin, Rank};

use super::Session;

#[derive(Subcommand)]
pub enum SpellAction {
    /// Acquire a spell
    Add {
        /// Spell name
        name: String,

        /// Starting rank (E, D, C, B, A, S)
        #[arg(short, long, default_value = "E")]
        rank: Rank,

        /// The character invented this spell (double XP)
        #[arg(long)]
        created: bool,

        /// Halve the XP cost of this spell
        #[arg(long)]
        discounted: bool,

        /// Free starting grant: only later ranks cost XP
        #[arg(long)]
        initial: bool,

        /// Casting cost, e.g. "15 MP"
        #[arg(long, default_value = "")]
        cost: String,

        /// What the spell does
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Advance a spell one rank
    Up {
        /// Spell name
        name: String,
    },

    /// Remove a spell and refund its XP
    Remove {
        /// Spell name
        name: String,
    },
}

pub fn run(session: Session, action: SpellAction) -> Result<(), String> {
    match action {
        SpellAction::Add {
            name,
            rank,
            created,
            discounted,
            initial,
            cost,
            description,
        } => {
            let origin = if created {
                Origin::Created
            } else {
                Origin::Learned
            };
            let new = NewSpell {
                name,
                rank,
                origin,
                discounted,
                initial,
                cost,
                description,
            };
            session.commit(Command::AcquireSpell(new), "")
        }
        SpellAction::Up { name } => session.commit(Command::UpgradeSpell { spell: name }, ""),
        SpellAction::Remove { name } => {
            session.commit(Command::RemoveSpell { spell: name }, "Spell removed")
        }
    }
}
