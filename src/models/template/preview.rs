use super::types::Template;

/// Number of slide tiles under the hero image in the preview dialog.
pub const PREVIEW_TILES: usize = 4;

/// Snapshot of a template for the preview dialog. Every tile repeats the
/// template thumbnail; there is no per-slide renderer.
#[derive(Debug, Clone)]
pub struct TemplatePreview {
    pub template: Template,
    pub tiles: Vec<String>,
}

impl TemplatePreview {
    pub fn new(template: &Template) -> Self {
        let thumb = template.thumbnail_or_placeholder().to_string();
        Self {
            template: template.clone(),
            tiles: vec![thumb; PREVIEW_TILES],
        }
    }
}

/// Editor location that starts a new presentation from `template`.
pub fn use_template_url(template: &Template) -> String {
    let query = serde_urlencoded::to_string(&[("template", template.id.as_str())])
        .unwrap_or_default();
    format!("/create?{query}")
}

/// Gallery action that resolves `template` and redirects to the editor.
/// The id is encoded as a single path segment.
pub fn use_template_path(template: &Template) -> String {
    format!("/templates/{}/use", urlencoding::encode(&template.id))
}
