mod create_record;
mod delete_record;
mod get_record;
mod list_records;
mod update_record;

pub use create_record::*;
pub use delete_record::*;
pub use get_record::*;
pub use list_records::*;
pub use update_record::*;

use actix_web::{web, Scope};

use crate::modules::record::application::domain::ResourceKind;

/// `/api/<resource>` scope carrying the CRUD routes; the kind travels as app data.
pub fn resource_scope(kind: ResourceKind) -> Scope {
    web::scope(&format!("/api/{}", kind.path_segment()))
        .app_data(web::Data::new(kind))
        .route("", web::get().to(list_records_handler))
        .route("", web::post().to(create_record_handler))
        .route("/{id}", web::get().to(get_record_handler))
        .route("/{id}", web::put().to(update_record_handler))
        .route("/{id}", web::delete().to(delete_record_handler))
}
