use serde_json::Value;

/// Content of a blob column: one encoded file, or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredBlob {
    Single(String),
    Many(Vec<String>),
    /// An array holding something other than encoded files.
    Malformed,
}

impl StoredBlob {
    /// One file is stored bare, several as an array.
    pub fn from_encoded(mut encoded: Vec<String>) -> Option<Self> {
        match encoded.len() {
            0 => None,
            1 => encoded.pop().map(StoredBlob::Single),
            _ => Some(StoredBlob::Many(encoded)),
        }
    }

    /// Reads a column value. `None` means the slot is empty.
    ///
    /// Arrays may also arrive serialized as JSON text.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                if text.starts_with('[') {
                    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(text) {
                        return Self::from_items(&items);
                    }
                }
                Some(StoredBlob::Single(text.to_string()))
            }
            Value::Array(items) => Self::from_items(items),
            _ => None,
        }
    }

    fn from_items(items: &[Value]) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        let encoded: Option<Vec<String>> = items
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect();
        Some(encoded.map_or(StoredBlob::Malformed, StoredBlob::Many))
    }

    pub fn len(&self) -> usize {
        match self {
            StoredBlob::Single(_) => 1,
            StoredBlob::Many(items) => items.len(),
            StoredBlob::Malformed => 0,
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        match self {
            StoredBlob::Single(text) if index == 0 => Some(text.as_str()),
            StoredBlob::Single(_) => None,
            StoredBlob::Many(items) => items.get(index).map(String::as_str),
            StoredBlob::Malformed => None,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            StoredBlob::Single(text) => Value::String(text),
            StoredBlob::Many(items) => Value::Array(items.into_iter().map(Value::String).collect()),
            StoredBlob::Malformed => Value::Null,
        }
    }
}
