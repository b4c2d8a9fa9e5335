use std::path::Path;

use gl_core::import::parse_import;
use gl_core::{ImportMode, Roster};

use super::{Session, load_ledger};

/// Write the roster as an export document.
pub fn export(session: &Session, output: Option<&Path>) -> Result<(), String> {
    let json = session.roster.export_json().map_err(|e| e.to_string())?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
            println!(
                "  Exported {} characters to {}",
                session.roster.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Read an export document into the roster, creating the roster if needed.
pub fn import(file: &Path, config: Option<&Path>, path: &Path, replace: bool) -> Result<(), String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    let (session, count) = if file.exists() {
        let mut session = Session::open(file, config)?;
        let mode = if replace {
            ImportMode::Replace
        } else {
            ImportMode::Append
        };
        let count = session
            .roster
            .import_json(&text, mode)
            .map_err(|e| e.to_string())?;
        (session, count)
    } else {
        let mut characters = parse_import(&text).map_err(|e| e.to_string())?.into_iter();
        let first = characters
            .next()
            .ok_or_else(|| "invalid import: no characters".to_string())?;
        let mut roster = Roster::new(first);
        for character in characters {
            roster.add(character);
        }
        let count = roster.len();
        (Session::with_roster(file, roster, load_ledger(config)?), count)
    };

    session.save()?;
    println!("  Imported {count} characters");
    Ok(())
}
