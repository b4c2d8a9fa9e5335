//! CLI frontend for the Grimledger character sheet.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::Session;

#[derive(Parser)]
#[command(
    name = "gl",
    about = "Grimledger: an XP ledger for RPG character sheets",
    version,
    propagate_version = true
)]
struct Cli {
    /// Roster file holding every character
    #[arg(short, long, global = true, default_value = "roster.json")]
    file: PathBuf,

    /// Ledger policy file (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a character and select it
    New {
        /// Character name
        name: String,

        /// Starting XP
        #[arg(long, default_value = "0")]
        xp: i64,
    },

    /// List every character in the roster
    List,

    /// Select the active character
    Select {
        /// Character name (case-insensitive)
        name: String,
    },

    /// Delete a character
    Delete {
        /// Character name (case-insensitive)
        name: String,
    },

    /// Show the full sheet of the active character
    Show,

    /// Set the total XP granted to the active character
    Xp {
        /// New total
        #[arg(allow_hyphen_values = true)]
        total: i64,
    },

    /// Buy, refund, or adjust attribute points
    Attr {
        #[command(subcommand)]
        action: commands::attr::AttrAction,
    },

    /// Acquire, advance, or remove skills
    Skill {
        #[command(subcommand)]
        action: commands::skill::SkillAction,
    },

    /// Acquire, advance, or remove spells
    Spell {
        #[command(subcommand)]
        action: commands::spell::SpellAction,
    },

    /// Add or remove narrative abilities
    Ability {
        #[command(subcommand)]
        action: commands::ability::AbilityAction,
    },

    /// Manage the inventory
    Item {
        #[command(subcommand)]
        action: commands::item::ItemAction,
    },

    /// Choose the armor skill and base Armor Class
    Armor {
        /// Skill whose rank counts toward AC ("none" to clear)
        skill: Option<String>,

        /// Base Armor Class
        #[arg(long, allow_hyphen_values = true)]
        base: Option<i64>,
    },

    /// Set current or maximum health
    Hp {
        /// Current value
        #[arg(long, allow_hyphen_values = true)]
        current: Option<i64>,

        /// Maximum value
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i64>,
    },

    /// Set current or maximum mana
    Mp {
        /// Current value
        #[arg(long, allow_hyphen_values = true)]
        current: Option<i64>,

        /// Maximum value
        #[arg(long, allow_hyphen_values = true)]
        max: Option<i64>,
    },

    /// Print the XP transaction log
    Log {
        /// Output format: text, markdown
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Roll a d20 for an attribute, a skill, or luck
    Roll {
        /// Attribute or skill name, or "luck"
        target: String,

        /// RNG seed for a repeatable roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Roll damage for a weapon in the inventory
    Damage {
        /// Item name
        item: String,

        /// RNG seed for a repeatable roll
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Export every character as JSON
    Export {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import characters from a JSON file
    Import {
        /// File with one character or a list of them
        path: PathBuf,

        /// Replace the roster instead of appending
        #[arg(long)]
        replace: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let file = cli.file.as_path();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::New { name, xp } => commands::character::new(file, config, &name, xp),
        Commands::Import { path, replace } => {
            commands::transfer::import(file, config, &path, replace)
        }
        command => dispatch(Session::open(file, config)?, command),
    }
}

fn dispatch(session: Session, command: Commands) -> Result<(), String> {
    match command {
        Commands::List => commands::character::list(&session),
        Commands::Select { name } => commands::character::select(session, &name),
        Commands::Delete { name } => commands::character::delete(session, &name),
        Commands::Show => commands::character::show(&session),
        Commands::Xp { total } => commands::character::xp(session, total),
        Commands::Attr { action } => commands::attr::run(session, action),
        Commands::Skill { action } => commands::skill::run(session, action),
        Commands::Spell { action } => commands::spell::run(session, action),
        Commands::Ability { action } => commands::ability::run(session, action),
        Commands::Item { action } => commands::item::run(session, action),
        Commands::Armor { skill, base } => commands::vitals::armor(session, skill.as_deref(), base),
        Commands::Hp { current, max } => commands::vitals::hp(session, current, max),
        Commands::Mp { current, max } => commands::vitals::mp(session, current, max),
        Commands::Log { format } => commands::log::run(&session, &format),
        Commands::Roll { target, seed } => commands::roll::check(&session, &target, seed),
        Commands::Damage { item, seed } => commands::roll::damage(&session, &item, seed),
        Commands::Export { output } => commands::transfer::export(&session, output.as_deref()),
        Commands::New { .. } | Commands::Import { .. } => {
            Err("this command does not operate on an open roster".into())
        }
    }
}
