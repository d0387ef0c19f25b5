use std::sync::Arc;

use actix_web::{get, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use crate::modules::record::application::ports::outgoing::RecordStore;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessResponse {
    status: &'static str,
    record_store: &'static str,
    checked_at: DateTime<Utc>,
}

/// LIVENESS PROBE
/// - No I/O
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Process is up", body = HealthResponse))
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the record store
#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    responses(
        (status = 200, description = "Record store reachable", body = ReadinessResponse),
        (status = 503, description = "Record store unreachable", body = ReadinessResponse),
    )
)]
#[get("/ready")]
pub async fn readiness(store: web::Data<Arc<dyn RecordStore + Send + Sync>>) -> impl Responder {
    let record_store = match store.ping().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            "unhealthy"
        }
    };

    let body = ReadinessResponse {
        status: record_store,
        record_store,
        checked_at: Utc::now(),
    };

    if record_store == "ok" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
