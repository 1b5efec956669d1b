pub mod templates;

use actix_web::web;

/// Configure API v1 routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/templates")
            .route("", web::get().to(templates::list))
            .route("/{id}", web::get().to(templates::read))
    );
}
