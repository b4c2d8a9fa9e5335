use clap::Subcommand;
use gl_core::{Ability, Command};

use super::Session;

#[derive(Subcommand)]
pub enum AbilityAction {
    /// Add a narrative ability
    Add {
        /// Ability name
        name: String,

        /// What the ability does
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Remove an ability
    Remove {
        /// Ability name
        name: String,
    },
}

pub fn run(session: Session, action: AbilityAction) -> Result<(), String> {
    match action {
        AbilityAction::Add { name, description } => {
            let ability = Ability::new(name.trim(), description);
            let done = format!("Added ability {}", ability.name);
            session.commit(Command::AddAbility(ability), &done)
        }
        AbilityAction::Remove { name } => {
            let done = format!("Removed ability {name}");
            session.commit(Command::RemoveAbility { ability: name }, &done)
        }
    }
}
