use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::record::application::domain::Record;

/// Every public section of the portfolio, read in one call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct PortfolioSnapshot {
    #[schema(value_type = Vec<Object>)]
    pub skills: Vec<Record>,
    #[schema(value_type = Vec<Object>)]
    pub education: Vec<Record>,
    #[schema(value_type = Vec<Object>)]
    pub work: Vec<Record>,
    #[schema(value_type = Vec<Object>)]
    pub community: Vec<Record>,
    #[schema(value_type = Vec<Object>)]
    pub projects: Vec<Record>,
}
