//! Persisted layout of a single bill under the `bills` key.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ledger::{Record, RecordDraft};

/// One stored bill. Field names follow the established on-device layout.
///
/// Fields of an unexpected JSON type are read as text (`null` as empty) so that a bad
/// entry is rejected by validation on its own instead of failing the whole array.
///
/// Writes always use the English keys (`expense`, `dining`). Payloads carrying the
/// original app's labels are migrated on the first save and are not written back in
/// that form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredBill {
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,
    #[serde(rename = "typeName", default, deserialize_with = "lenient_text")]
    pub type_name: String,
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: WireAmount,
    #[serde(default, deserialize_with = "lenient_text")]
    pub day: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub desc: String,
}

fn value_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(raw) => raw,
        other => other.to_string(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(value_text)
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<WireAmount, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value.as_f64() {
        Some(number) => WireAmount::Number(number),
        None => WireAmount::Text(value_text(value)),
    })
}

/// Amounts were historically stored as form text; newer writes use numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireAmount {
    Number(f64),
    Text(String),
}

impl Default for WireAmount {
    fn default() -> Self {
        WireAmount::Text(String::new())
    }
}

impl WireAmount {
    pub fn as_text(&self) -> String {
        match self {
            WireAmount::Number(value) => value.to_string(),
            WireAmount::Text(raw) => raw.clone(),
        }
    }
}

impl StoredBill {
    /// Converts back into editable form so the regular validation path applies on load.
    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            direction: self.kind.clone(),
            category: self.type_name.clone(),
            amount: self.amount.as_text(),
            date: self.day.clone(),
            description: self.desc.clone(),
        }
    }
}

impl From<&Record> for StoredBill {
    fn from(record: &Record) -> Self {
        Self {
            kind: record.direction.as_str().to_string(),
            type_name: record.category.as_str().to_string(),
            amount: WireAmount::Number(record.amount),
            day: record.date.format("%Y-%m-%d").to_string(),
            desc: record.description.clone(),
        }
    }
}
