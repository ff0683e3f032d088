use serde::Serialize;
use serde_json::Value;

use crate::errors::CoreError;
use crate::models::expense::Expense;
use crate::models::ledger::Ledger;

/// Current data file schema version.
pub const CURRENT_VERSION: u16 = 1;

/// Version assigned to files written before the envelope existed
/// (a bare JSON array of expenses).
pub const LEGACY_VERSION: u16 = 0;

/// Indentation used for the pretty-printed file.
const INDENT: &[u8] = b"    ";

#[derive(Serialize)]
struct Envelope<'a> {
    version: u16,
    expenses: &'a [Expense],
}

/// Serialize a ledger into the on-disk text form.
///
/// Layout:
/// ```text
/// {
///     "version": 1,
///     "expenses": [
///         { "id": "…", "amount": "12.50", "category": "food",
///           "created_at": "2025-01-14T09:30:00.123456" }
///     ]
/// }
/// ```
pub fn encode(ledger: &Ledger) -> Result<String, CoreError> {
    let envelope = Envelope {
        version: CURRENT_VERSION,
        expenses: &ledger.expenses,
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    envelope
        .serialize(&mut ser)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize expenses: {e}")))?;
    buf.push(b'\n');

    String::from_utf8(buf).map_err(|e| CoreError::Serialization(e.to_string()))
}

/// Parse the on-disk text form. Returns the schema version the file was
/// written with alongside the ledger.
pub fn decode(text: &str) -> Result<(u16, Ledger), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::InvalidFileFormat("File is empty".into()));
    }

    let value: Value = serde_json::from_str(text)?;

    match value {
        Value::Array(items) => {
            let expenses: Vec<Expense> = serde_json::from_value(Value::Array(items))?;
            Ok((LEGACY_VERSION, Ledger::from(expenses)))
        }
        Value::Object(mut map) => {
            let version = map
                .get("version")
                .and_then(Value::as_u64)
                .ok_or_else(|| CoreError::InvalidFileFormat("Missing schema version".into()))?;
            let version = u16::try_from(version)
                .map_err(|_| CoreError::InvalidFileFormat(format!("Bad schema version: {version}")))?;

            if version == LEGACY_VERSION || version > CURRENT_VERSION {
                return Err(CoreError::UnsupportedVersion(version));
            }

            let expenses = map
                .remove("expenses")
                .ok_or_else(|| CoreError::InvalidFileFormat("Missing expenses list".into()))?;
            let expenses: Vec<Expense> = serde_json::from_value(expenses)?;
            Ok((version, Ledger::from(expenses)))
        }
        _ => Err(CoreError::InvalidFileFormat(
            "Expected an object or an array at the top level".into(),
        )),
    }
}
