use askama::Template;

use crate::models::slide::Slide;
use crate::models::template::Template as CatalogTemplate;
use super::PageContext;

/// Right-hand pane of the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    Edit,
    Preview,
}

impl EditorTab {
    /// Unknown values open the edit pane.
    pub fn parse(s: Option<&str>) -> Self {
        match s {
            Some("preview") => EditorTab::Preview,
            _ => EditorTab::Edit,
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, EditorTab::Preview)
    }
}

#[derive(Template)]
#[template(path = "editor.html")]
pub struct EditorTemplate {
    pub ctx: PageContext,
    pub deck_name: String,
    pub slides: Vec<Slide>,
    pub selected_id: i64,
    pub current: Slide,
    pub tab: EditorTab,
    pub can_delete: bool,
    pub source_template: Option<CatalogTemplate>,
}
