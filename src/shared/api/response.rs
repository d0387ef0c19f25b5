// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every mutation response: the affected rows plus a human message.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

/// Body of every error response.
#[derive(Serialize, Clone, ToSchema)]
pub struct ApiError {
    #[schema(example = "Skill not found")]
    pub error: String,
}

#[derive(Serialize, Clone, ToSchema)]
pub struct ApiMessage {
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Plain JSON body, no envelope (listings, single records).
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn updated(data: T, message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            data,
            message: message.to_string(),
        })
    }

    pub fn created(data: T, message: &str) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            data,
            message: message.to_string(),
        })
    }
}

impl ApiResponse<()> {
    pub fn message(message: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiMessage {
            message: message.to_string(),
        })
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            error: message.to_string(),
        })
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, message)
    }

    pub fn payload_too_large(message: &str) -> HttpResponse {
        Self::error(StatusCode::PAYLOAD_TOO_LARGE, message)
    }

    /// Upstream failures surface their message; nothing is retried.
    pub fn upstream_error(message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}
