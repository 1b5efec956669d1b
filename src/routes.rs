use std::path::Path;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{HttpResponse, cookie::Key, web};

use crate::handlers;

/// Cookie-backed session holding the deck key, CSRF token and flash message.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Register every route. App data (`AppConfig`, `Catalog`, `DeckStore`) is
/// attached by the caller.
pub fn configure(cfg: &mut web::ServiceConfig, static_dir: &Path) {
    cfg
        .service(actix_files::Files::new("/static", static_dir))
        .route("/placeholder.svg", web::get().to(handlers::template_handlers::placeholder))
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/templates"))
                .finish()
        }))
        // Template gallery
        .route("/templates", web::get().to(handlers::template_handlers::gallery))
        .route("/templates/{id}/use", web::get().to(handlers::template_handlers::use_template))
        // Slide editor — /create/slides/{id}/... BEFORE /create/slides/{id}
        .route("/create", web::get().to(handlers::editor_handlers::index))
        .route("/create/name", web::post().to(handlers::editor_handlers::rename))
        .route("/create/slides", web::post().to(handlers::editor_handlers::add_slide))
        .route("/create/slides/{id}/select", web::post().to(handlers::editor_handlers::select_slide))
        .route("/create/slides/{id}/delete", web::post().to(handlers::editor_handlers::delete_slide))
        .route("/create/slides/{id}", web::post().to(handlers::editor_handlers::update_slide))
        // Read-only JSON API
        .service(web::scope("/api/v1").configure(handlers::api_v1::configure))
        // Default 404 handler (must be registered last)
        .default_service(web::to(|| async {
            HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(include_str!("../templates/errors/404.html"))
        }));
}
