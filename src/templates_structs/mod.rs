// Template context structures for Askama templates, organized by page.
// All types are re-exported: `use deckhand::templates_structs::*`

use actix_session::Session;

use crate::config::AppConfig;
use crate::session::{csrf, take_flash};

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.flash`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<String>,
    pub csrf_token: String,
    pub current_path: String,
}

impl PageContext {
    pub fn build(session: &Session, config: &AppConfig, current_path: &str) -> Self {
        Self {
            app_name: config.app_name.clone(),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
            current_path: current_path.to_string(),
        }
    }
}

mod editor;
mod gallery;
mod api;

pub use editor::*;
pub use gallery::*;
pub use api::*;
