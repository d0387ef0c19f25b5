use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use crate::modules::record::application::domain::{OrderBy, Record, RecordId};
use crate::modules::record::application::ports::outgoing::{
    RecordStore, RecordStoreError, SelectQuery,
};
use crate::shared::SupabaseConfig;

const SCHEMA_CACHE_CODE: &str = "PGRST204";
const INVALID_TEXT_CODE: &str = "22P02";

/// `RecordStore` over the hosted PostgREST endpoint, authenticated with the service key.
#[derive(Clone)]
pub struct PostgrestRecordStore {
    client: Client,
    base_url: String,
    service_key: String,
    schema: String,
}

/// Error body PostgREST sends on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct PostgrestErrorBody {
    code: Option<String>,
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
}

impl PostgrestRecordStore {
    pub fn new(client: Client, config: &SupabaseConfig) -> Self {
        Self {
            client,
            base_url: config.rest_url(),
            service_key: config.service_key.clone(),
            schema: config.schema.clone(),
        }
    }

    fn table_url(&self, table: &str) -> Result<Url, RecordStoreError> {
        Url::parse(&format!("{}/{}", self.base_url, table))
            .map_err(|e| RecordStoreError::Transport(format!("invalid table url: {e}")))
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let is_write = method != Method::GET;
        let builder = self
            .client
            .request(method, url)
            .header("apikey", &self.service_key)
            .header("Authorization", format!("Bearer {}", self.service_key))
            .header("Accept-Profile", &self.schema);

        if is_write {
            builder
                .header("Content-Profile", &self.schema)
                .header("Prefer", "return=representation")
        } else {
            builder
        }
    }

    async fn rows(&self, builder: RequestBuilder) -> Result<Vec<Record>, RecordStoreError> {
        let response = builder
            .send()
            .await
            .map_err(|e| RecordStoreError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RecordStoreError::Transport(e.to_string()))?;

        if !status.is_success() {
            let err = classify_error(status, &body);
            error!(status = status.as_u16(), error = %err, "Record store request failed");
            return Err(err);
        }

        decode_rows(&body)
    }
}

fn apply_select(url: &mut Url, query: &SelectQuery) {
    let mut pairs = url.query_pairs_mut();
    pairs.append_pair("select", "*");
    if let Some(id) = &query.id {
        pairs.append_pair("id", &eq_filter(id));
    }
    if let Some(order) = query.order {
        pairs.append_pair("order", &order_param(order));
    }
    if let Some(limit) = query.limit {
        pairs.append_pair("limit", &limit.to_string());
    }
}

fn apply_id_filter(url: &mut Url, id: &RecordId) {
    url.query_pairs_mut().append_pair("id", &eq_filter(id));
}

fn eq_filter(id: &RecordId) -> String {
    format!("eq.{}", id.as_str())
}

fn order_param(order: OrderBy) -> String {
    let direction = if order.descending { "desc" } else { "asc" };
    format!("{}.{}.nullslast", order.column, direction)
}

/// Empty bodies are valid (e.g. `return=minimal`); a single object is wrapped.
fn decode_rows(body: &str) -> Result<Vec<Record>, RecordStoreError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => Ok(map),
                other => Err(RecordStoreError::Decode(format!(
                    "expected a row object, got {other}"
                ))),
            })
            .collect(),
        Ok(Value::Object(map)) => Ok(vec![map]),
        Ok(other) => Err(RecordStoreError::Decode(format!(
            "expected rows, got {other}"
        ))),
        Err(e) => Err(RecordStoreError::Decode(e.to_string())),
    }
}

fn classify_error(status: StatusCode, body: &str) -> RecordStoreError {
    let parsed: PostgrestErrorBody = serde_json::from_str(body).unwrap_or_default();

    let message = parsed
        .message
        .clone()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| {
            let raw = body.trim();
            if raw.is_empty() {
                status.to_string()
            } else {
                raw.to_string()
            }
        });

    let mentions_schema_cache = [&parsed.message, &parsed.details, &parsed.hint]
        .iter()
        .filter_map(|text| text.as_deref())
        .any(|text| text.to_lowercase().contains("schema cache"));

    if parsed.code.as_deref() == Some(SCHEMA_CACHE_CODE) || mentions_schema_cache {
        RecordStoreError::SchemaCache(message)
    } else if parsed.code.as_deref() == Some(INVALID_TEXT_CODE) {
        RecordStoreError::InvalidInput(message)
    } else {
        RecordStoreError::Rejected {
            status: status.as_u16(),
            message,
        }
    }
}

/// Postgres quotes the offending value (`invalid input syntax for type bigint: "abc"`).
/// When that value is the id filter, the call matched nothing.
fn unmatched_id(
    result: Result<Vec<Record>, RecordStoreError>,
    id: &RecordId,
) -> Result<Vec<Record>, RecordStoreError> {
    match result {
        Err(RecordStoreError::InvalidInput(message))
            if message.contains(&format!("\"{}\"", id.as_str())) =>
        {
            debug!(id = %id, "id is not a valid key, treating as no match");
            Ok(Vec::new())
        }
        other => other,
    }
}

#[async_trait]
impl RecordStore for PostgrestRecordStore {
    async fn select(
        &self,
        table: &str,
        query: &SelectQuery,
    ) -> Result<Vec<Record>, RecordStoreError> {
        let mut url = self.table_url(table)?;
        apply_select(&mut url, query);
        debug!(table, "select");
        let result = self.rows(self.request(Method::GET, url)).await;
        match &query.id {
            Some(id) => unmatched_id(result, id),
            None => result,
        }
    }

    async fn insert(&self, table: &str, record: Record) -> Result<Vec<Record>, RecordStoreError> {
        let url = self.table_url(table)?;
        let body = Value::Array(vec![Value::Object(record)]);
        self.rows(self.request(Method::POST, url).json(&body)).await
    }

    async fn update(
        &self,
        table: &str,
        id: &RecordId,
        changes: Record,
    ) -> Result<Vec<Record>, RecordStoreError> {
        let mut url = self.table_url(table)?;
        apply_id_filter(&mut url, id);
        let result = self
            .rows(
                self.request(Method::PATCH, url)
                    .json(&Value::Object(changes)),
            )
            .await;
        unmatched_id(result, id)
    }

    async fn delete(&self, table: &str, id: &RecordId) -> Result<Vec<Record>, RecordStoreError> {
        let mut url = self.table_url(table)?;
        apply_id_filter(&mut url, id);
        let result = self.rows(self.request(Method::DELETE, url)).await;
        unmatched_id(result, id)
    }

    async fn ping(&self) -> Result<(), RecordStoreError> {
        let url = Url::parse(&format!("{}/", self.base_url))
            .map_err(|e| RecordStoreError::Transport(format!("invalid base url: {e}")))?;
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(|e| RecordStoreError::Transport(e.to_string()))?;

        // the root lists the exposed schema; any non-5xx answer means PostgREST is up
        if response.status().is_server_error() {
            return Err(RecordStoreError::Rejected {
                status: response.status().as_u16(),
                message: "record store is not ready".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://demo.supabase.co/rest/v1/education").unwrap()
    }

    #[test]
    fn test_select_by_id_builds_eq_filter() {
        let mut url = base();
        apply_select(&mut url, &SelectQuery::by_id(RecordId::parse("12").unwrap()));

        assert_eq!(url.query(), Some("select=*&id=eq.12"));
    }

    #[test]
    fn test_ordered_select_puts_nulls_last() {
        let mut url = base();
        apply_select(
            &mut url,
            &SelectQuery::ordered(Some(OrderBy::desc("start_date"))),
        );

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("order".to_string(), "start_date.desc.nullslast".to_string())));
    }

    #[test]
    fn test_schema_cache_code_is_classified() {
        let body = r#"{"code":"PGRST204","message":"Could not find the 'logo' column of 'education' in the schema cache"}"#;

        let err = classify_error(StatusCode::BAD_REQUEST, body);

        assert!(matches!(err, RecordStoreError::SchemaCache(msg) if msg.contains("'logo' column")));
    }

    #[test]
    fn test_schema_cache_hint_without_code_is_classified() {
        let body = r#"{"code":"42703","message":"column missing","hint":"Reload the Schema Cache"}"#;

        assert!(matches!(
            classify_error(StatusCode::BAD_REQUEST, body),
            RecordStoreError::SchemaCache(_)
        ));
    }

    #[test]
    fn test_non_numeric_id_matches_no_row() {
        let body = r#"{"code":"22P02","details":null,"hint":null,"message":"invalid input syntax for type bigint: \"abc\""}"#;
        let err = classify_error(StatusCode::BAD_REQUEST, body);
        assert!(matches!(err, RecordStoreError::InvalidInput(_)));

        let id = RecordId::parse("abc").unwrap();
        assert_eq!(unmatched_id(Err(err), &id), Ok(Vec::new()));
    }

    #[test]
    fn test_invalid_body_value_is_still_an_error() {
        let body = r#"{"code":"22P02","message":"invalid input syntax for type date: \"soon\""}"#;
        let err = classify_error(StatusCode::BAD_REQUEST, body);

        let id = RecordId::parse("7").unwrap();
        assert!(matches!(
            unmatched_id(Err(err), &id),
            Err(RecordStoreError::InvalidInput(msg)) if msg.contains("soon")
        ));
    }

    #[test]
    fn test_other_failures_keep_status_and_message() {
        let body = r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#;

        let err = classify_error(StatusCode::CONFLICT, body);

        assert_eq!(
            err,
            RecordStoreError::Rejected {
                status: 409,
                message: "duplicate key value violates unique constraint".to_string()
            }
        );
    }

    #[test]
    fn test_non_json_error_body_is_used_verbatim() {
        let err = classify_error(StatusCode::BAD_GATEWAY, "upstream timeout");

        assert!(matches!(err, RecordStoreError::Rejected { status: 502, message } if message == "upstream timeout"));
    }

    #[test]
    fn test_decode_rows_accepts_arrays_objects_and_empty_bodies() {
        assert_eq!(decode_rows(r#"[{"id":1},{"id":2}]"#).unwrap().len(), 2);
        assert_eq!(decode_rows(r#"{"id":1}"#).unwrap().len(), 1);
        assert!(decode_rows("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rows_rejects_scalars() {
        assert!(matches!(decode_rows("[1]"), Err(RecordStoreError::Decode(_))));
        assert!(matches!(decode_rows("not json"), Err(RecordStoreError::Decode(_))));
    }
}
