//! Character document import and export.

use serde_json::Value;

use crate::character::{Character, CharacterId};
use crate::error::{LedgerError, LedgerResult};

/// Parse an import payload: a single character document or a list of them.
///
/// Every parsed character gets a fresh ID so it cannot collide with one
/// already in a roster. Unknown fields are ignored. Any malformed entry
/// rejects the whole payload.
pub fn parse_import(text: &str) -> LedgerResult<Vec<Character>> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| LedgerError::InvalidImport(format!("not valid JSON: {e}")))?;
    let documents = match value {
        Value::Array(items) if items.is_empty() => {
            return Err(LedgerError::InvalidImport(
                "the character list is empty".to_string(),
            ));
        }
        Value::Array(items) => items,
        doc @ Value::Object(_) => vec![doc],
        other => {
            return Err(LedgerError::InvalidImport(format!(
                "expected a character or a list of characters, found {}",
                kind_of(&other)
            )));
        }
    };

    documents
        .into_iter()
        .enumerate()
        .map(|(i, doc)| {
            if !doc.is_object() {
                return Err(LedgerError::InvalidImport(format!(
                    "entry {} is {}, not a character",
                    i + 1,
                    kind_of(&doc)
                )));
            }
            let mut character: Character = serde_json::from_value(doc)
                .map_err(|e| LedgerError::InvalidImport(format!("entry {}: {e}", i + 1)))?;
            character.id = CharacterId::new();
            Ok(character)
        })
        .collect()
}

/// Serialize characters as a pretty-printed JSON list.
pub fn export_characters(characters: &[Character]) -> LedgerResult<String> {
    Ok(serde_json::to_string_pretty(characters)?)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
