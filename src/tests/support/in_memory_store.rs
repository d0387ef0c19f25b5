use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::record::application::domain::record::text_of;
use crate::modules::record::application::domain::{Record, RecordId};
use crate::modules::record::application::ports::outgoing::{
    RecordStore, RecordStoreError, SelectQuery,
};

#[derive(Default)]
struct StoreState {
    tables: HashMap<String, Vec<Record>>,
    failures: HashMap<String, RecordStoreError>,
    /// (table, column) pairs the fake schema does not know.
    unknown_columns: HashSet<(String, String)>,
    offline: bool,
    next_id: i64,
    write_calls: usize,
}

/// Table store kept in memory. Clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    state: Arc<Mutex<StoreState>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        let store = Self::default();
        store.state.lock().unwrap().next_id = 1;
        store
    }

    /// Seeds `table` with the rows of a JSON array.
    pub fn with_rows(self, table: &str, rows: Value) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let rows: Vec<Record> = rows
                .as_array()
                .expect("rows must be a JSON array")
                .iter()
                .map(|row| row.as_object().cloned().expect("row must be an object"))
                .collect();
            for row in &rows {
                if let Some(id) = row.get("id").and_then(Value::as_i64) {
                    state.next_id = state.next_id.max(id + 1);
                }
            }
            state.tables.entry(table.to_string()).or_default().extend(rows);
        }
        self
    }

    /// Every call touching `table` fails with a rejected request.
    pub fn fail_table(&self, table: &str, message: &str) {
        self.state.lock().unwrap().failures.insert(
            table.to_string(),
            RecordStoreError::Rejected {
                status: 500,
                message: message.to_string(),
            },
        );
    }

    /// Writes touching `column` on `table` fail with a schema cache error.
    pub fn forget_column(&self, table: &str, column: &str) {
        self.state
            .lock()
            .unwrap()
            .unknown_columns
            .insert((table.to_string(), column.to_string()));
    }

    pub fn go_offline(&self) {
        self.state.lock().unwrap().offline = true;
    }

    pub fn rows(&self, table: &str) -> Vec<Record> {
        self.state
            .lock()
            .unwrap()
            .tables
            .get(table)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of insert/update/delete calls received, successful or not.
    pub fn write_calls(&self) -> usize {
        self.state.lock().unwrap().write_calls
    }

    fn check(state: &StoreState, table: &str) -> Result<(), RecordStoreError> {
        if state.offline {
            return Err(RecordStoreError::Transport("connection refused".to_string()));
        }
        match state.failures.get(table) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn matches(row: &Record, id: &RecordId) -> bool {
        text_of(row, "id").as_deref() == Some(id.as_str())
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn select(
        &self,
        table: &str,
        query: &SelectQuery,
    ) -> Result<Vec<Record>, RecordStoreError> {
        let state = self.state.lock().unwrap();
        Self::check(&state, table)?;

        let mut rows: Vec<Record> = state
            .tables
            .get(table)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|row| query.id.as_ref().map_or(true, |id| Self::matches(row, id)))
            .collect();

        if let Some(order) = query.order {
            order.sort(&mut rows);
        }
        if let Some(limit) = query.limit {
            rows.truncate(limit);
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, record: Record) -> Result<Vec<Record>, RecordStoreError> {
        let mut state = self.state.lock().unwrap();
        state.write_calls += 1;
        Self::check(&state, table)?;

        let mut row = record;
        if !row.contains_key("id") {
            let id = state.next_id;
            state.next_id += 1;
            row.insert("id".to_string(), Value::from(id));
        }
        state
            .tables
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(vec![row])
    }

    async fn update(
        &self,
        table: &str,
        id: &RecordId,
        changes: Record,
    ) -> Result<Vec<Record>, RecordStoreError> {
        let mut state = self.state.lock().unwrap();
        state.write_calls += 1;
        Self::check(&state, table)?;

        if let Some(column) = changes
            .keys()
            .find(|column| {
                state
                    .unknown_columns
                    .contains(&(table.to_string(), column.to_string()))
            })
            .cloned()
        {
            return Err(RecordStoreError::SchemaCache(format!(
                "Could not find the '{}' column of '{}' in the schema cache",
                column, table
            )));
        }

        let mut updated = Vec::new();
        if let Some(rows) = state.tables.get_mut(table) {
            for row in rows.iter_mut().filter(|row| Self::matches(row, id)) {
                for (key, value) in &changes {
                    row.insert(key.clone(), value.clone());
                }
                updated.push(row.clone());
            }
        }
        Ok(updated)
    }

    async fn delete(&self, table: &str, id: &RecordId) -> Result<Vec<Record>, RecordStoreError> {
        let mut state = self.state.lock().unwrap();
        state.write_calls += 1;
        Self::check(&state, table)?;

        let mut removed = Vec::new();
        if let Some(rows) = state.tables.get_mut(table) {
            let (gone, kept): (Vec<Record>, Vec<Record>) =
                rows.drain(..).partition(|row| Self::matches(row, id));
            *rows = kept;
            removed = gone;
        }
        Ok(removed)
    }

    async fn ping(&self) -> Result<(), RecordStoreError> {
        let state = self.state.lock().unwrap();
        if state.offline {
            return Err(RecordStoreError::Transport("connection refused".to_string()));
        }
        Ok(())
    }
}
