use askama::Template;

use crate::models::template::{Template as CatalogTemplate, TemplatePreview};
use super::PageContext;

pub struct CategoryTab {
    pub value: String,
    pub href: String,
    pub active: bool,
}

pub struct TemplateCard {
    pub template: CatalogTemplate,
    pub preview_href: String,
    pub use_href: String,
}

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub ctx: PageContext,
    pub query: String,
    pub active_category: String,
    pub tabs: Vec<CategoryTab>,
    pub cards: Vec<TemplateCard>,
    pub preview: Option<TemplatePreview>,
    /// Where "Cancel" in the preview dialog returns to.
    pub close_href: String,
    pub use_preview_href: String,
}
