use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::portfolio::application::domain::PortfolioSnapshot;
use crate::modules::portfolio::application::ports::incoming::use_cases::GetPortfolioError;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;

/// Whole portfolio
///
/// Skills, education, work, community service and projects in one response.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "portfolio",
    responses(
        (status = 200, description = "Every section", body = PortfolioSnapshot),
        (status = 500, description = "One of the reads failed", body = ApiError),
    )
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    match data.portfolio.execute().await {
        Ok(snapshot) => ApiResponse::success(snapshot),
        Err(GetPortfolioError::RepositoryError(msg)) => {
            error!(error = %msg, "Failed to assemble portfolio");
            ApiResponse::upstream_error(&msg)
        }
    }
}
