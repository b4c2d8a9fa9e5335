use clap::Subcommand;
use comfy_table::{ContentArrangement, Table};
use gl_core::catalog::{self, OFFICIAL_SKILLS};
use gl_core::{Command, NewSkill, Rank};

use super::Session;

#[derive(Subcommand)]
pub enum SkillAction {
    /// Acquire a skill
    Add {
        /// Skill name
        name: String,

        /// Starting rank (E, D, C, B, A, S)
        #[arg(short, long, default_value = "E")]
        rank: Rank,

        /// Related attribute ("none" for no attribute bonus). Official
        /// skills default to their catalog attribute.
        #[arg(short, long)]
        attr: Option<String>,

        /// Halve the XP cost of this skill
        #[arg(long)]
        discounted: bool,

        /// Free starting grant: only later ranks cost XP
        #[arg(long)]
        initial: bool,
    },

    /// Advance a skill one rank
    Up {
        /// Skill name
        name: String,
    },

    /// Remove a skill and refund its XP
    Remove {
        /// Skill name
        name: String,
    },

    /// List the official skills
    Catalog,
}

pub fn run(session: Session, action: SkillAction) -> Result<(), String> {
    match action {
        SkillAction::Add {
            name,
            rank,
            attr,
            discounted,
            initial,
        } => {
            let related_attribute = match attr {
                Some(a) => super::optional_name(Some(&a)),
                None => catalog::lookup(&name).map(|s| s.attribute.name().to_string()),
            };
            let new = NewSkill {
                name,
                related_attribute,
                rank,
                discounted,
                initial,
            };
            session.commit(Command::AcquireSkill(new), "")
        }
        SkillAction::Up { name } => session.commit(Command::UpgradeSkill { skill: name }, ""),
        SkillAction::Remove { name } => {
            session.commit(Command::RemoveSkill { skill: name }, "Skill removed")
        }
        SkillAction::Catalog => {
            catalog_table();
            Ok(())
        }
    }
}

fn catalog_table() {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Skill", "Attribute", "Armor"]);
    for skill in &OFFICIAL_SKILLS {
        table.add_row(vec![
            skill.name.to_string(),
            skill.attribute.to_string(),
            if skill.armor { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{table}");
}
