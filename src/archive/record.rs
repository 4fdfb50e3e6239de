//! Search result records, as received and as returned to tool callers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Document identifier. The API has returned both strings and integers here;
/// anything else is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Integer(i64),
    Text(String),
    Other(Value),
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// Top-level response body of the transcription search.
#[derive(Debug, Default, Deserialize)]
pub struct SearchEnvelope {
    /// Absent (or `null`) means no matches.
    #[serde(default)]
    pub data: Option<Vec<RawResultRecord>>,
}

/// One match as returned by the API.
///
/// The record must be a JSON object, but no field is trusted to have a particular type:
/// text fields take the string form of whatever was sent, the rest pass through as JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResultRecord {
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub archive_unit_name: Option<String>,
    pub source_title_nb: Option<Value>,
    pub source_start_year: Option<Value>,
    pub source_end_year: Option<Value>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub thumbnail_url: Option<String>,
}

/// `null` stays absent, strings are kept, other values become their JSON text.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Fixed-shape projection handed back to tool callers.
///
/// Optional fields serialize as `null`, text fields default to `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedResultRecord {
    pub id: Option<RecordId>,
    pub text: String,
    pub archive_unit_name: String,
    pub source_title_nb: Option<Value>,
    pub source_start_year: Option<Value>,
    pub source_end_year: Option<Value>,
    pub thumbnail_url: String,
}

impl From<RawResultRecord> for NormalizedResultRecord {
    fn from(raw: RawResultRecord) -> Self {
        Self {
            id: raw.id,
            text: raw.text.unwrap_or_default(),
            archive_unit_name: raw.archive_unit_name.unwrap_or_default(),
            source_title_nb: raw.source_title_nb,
            source_start_year: raw.source_start_year,
            source_end_year: raw.source_end_year,
            thumbnail_url: raw.thumbnail_url.unwrap_or_default(),
        }
    }
}

impl SearchEnvelope {
    /// Project every match, keeping the API's order.
    pub fn into_records(self) -> Vec<NormalizedResultRecord> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(NormalizedResultRecord::from)
            .collect()
    }
}
