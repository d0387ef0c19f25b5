use serde_json::Value;

use super::record::Record;

/// Write rules of one resource type.
#[derive(Debug, Clone, Copy)]
pub struct FieldSet {
    /// Keys a client may write.
    pub allowed: &'static [&'static str],
    /// Keys where `""` means "no date" and is stored as null.
    pub dates: &'static [&'static str],
    /// Keys a create payload must carry with a non-blank value.
    pub mandatory: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectionError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

impl FieldSet {
    /// Partial-update projection: supplied ∩ allowed, explicit nulls kept.
    pub fn project_update(&self, payload: &Record) -> Record {
        payload
            .iter()
            .filter(|(key, _)| self.allowed.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), self.normalize(key, value)))
            .collect()
    }

    /// Insert projection: mandatory keys checked first, then null values dropped.
    pub fn project_insert(&self, payload: &Record) -> Result<Record, ProjectionError> {
        let missing = self.missing_fields(payload);
        if !missing.is_empty() {
            return Err(ProjectionError::MissingFields(missing));
        }

        let mut projected = self.project_update(payload);
        projected.retain(|_, value| !value.is_null());
        Ok(projected)
    }

    /// Mandatory keys that are absent, null or blank, in declaration order.
    pub fn missing_fields(&self, payload: &Record) -> Vec<String> {
        self.mandatory
            .iter()
            .filter(|key| is_blank(payload.get(**key)))
            .map(|key| key.to_string())
            .collect()
    }

    fn normalize(&self, key: &str, value: &Value) -> Value {
        if self.dates.contains(&key) && value.as_str() == Some("") {
            Value::Null
        } else {
            value.clone()
        }
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}
