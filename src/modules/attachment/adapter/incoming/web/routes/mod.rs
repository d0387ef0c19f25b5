mod fetch_attachment;
mod upload_attachment;

pub use fetch_attachment::*;
pub use upload_attachment::*;

use actix_web::web;

use crate::modules::attachment::application::domain::{AttachmentSlot, SizeClass};
use crate::modules::record::application::domain::ResourceKind;

/// Registers the file routes of every slot `kind` owns, inside its `/api/<resource>` scope.
pub fn configure_attachment_routes(cfg: &mut web::ServiceConfig, kind: ResourceKind) {
    for slot in AttachmentSlot::for_resource(kind) {
        match slot.class {
            SizeClass::Logo => {
                cfg.service(
                    web::resource("/{id}/logo")
                        .app_data(web::Data::new(slot))
                        .route(web::post().to(upload_attachment_handler))
                        .route(web::get().to(get_logo_handler)),
                );
            }
            SizeClass::Evidence => {
                cfg.service(
                    web::resource("/{id}/upload")
                        .app_data(web::Data::new(slot))
                        .route(web::post().to(upload_attachment_handler)),
                )
                .service(
                    web::resource("/{id}/download/{index}")
                        .app_data(web::Data::new(slot))
                        .route(web::get().to(download_attachment_handler)),
                )
                .service(
                    web::resource("/{id}/preview/{index}")
                        .app_data(web::Data::new(slot))
                        .route(web::get().to(preview_attachment_handler)),
                );
            }
        }
    }
}
