//! Shared test infrastructure.
//!
//! - `sample_catalog()` - small injected catalog, independent of the built-in one
//! - `init_app!(catalog)` - full route table behind a fresh cookie session
//! - `init_app!(catalog, store)` - same, sharing a deck store the test can inspect
//! - `csrf_token()` / `session_cookie()` - carry session state between requests

#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use regex::Regex;

use deckhand::models::template::{Catalog, Category, Template};

// ============================================================================
// CATALOG FIXTURES
// ============================================================================

pub fn template(id: &str, title: &str, category: Category, tags: &[&str]) -> Template {
    Template {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        thumbnail_url: String::new(),
        slide_count: 5,
        popular: false,
        updated: None,
    }
}

/// Three templates in two categories; creative is seen first.
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        template("moodboard", "Moodboard", Category::Creative, &["Visual", "board"]),
        template("lesson", "Lesson Plan", Category::Education, &["school"]),
        template("sketchbook", "Sketchbook", Category::Creative, &["drawing"]),
    ])
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Build the application with the given catalog and a fresh (or given) deck store.
macro_rules! init_app {
    ($catalog:expr) => {
        init_app!($catalog, deckhand::session::DeckStore::default())
    };
    ($catalog:expr, $store:expr) => {{
        let config = deckhand::config::AppConfig::default();
        let static_dir = config.static_dir.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(deckhand::routes::session_middleware(actix_web::cookie::Key::generate()))
                .app_data(actix_web::web::Data::new(config))
                .app_data(actix_web::web::Data::new($catalog))
                .app_data(actix_web::web::Data::new($store))
                .configure(|cfg| deckhand::routes::configure(cfg, &static_dir)),
        )
        .await
    }};
}

/// Session cookie set by a response, if the session changed.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response().cookies().next().map(|c| c.into_owned())
}

/// CSRF token embedded in a rendered form.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page has a CSRF token")
}

/// Every `href` in a page, with HTML escapes undone.
pub fn hrefs(html: &str) -> Vec<String> {
    let re = Regex::new(r#"href="([^"]*)""#).expect("valid regex");
    re.captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().replace("&#38;", "&").replace("&amp;", "&"))
        .collect()
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
