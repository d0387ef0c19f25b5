use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flat row as returned by the record store.
pub type Record = Map<String, Value>;

/// Opaque row identifier taken from the request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdError {
    #[error("Record id cannot be empty")]
    Empty,
}

impl RecordId {
    pub fn parse(raw: &str) -> Result<Self, RecordIdError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(RecordIdError::Empty);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reads a scalar attribute as trimmed text (numbers are string-cast).
pub fn text_of(record: &Record, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
