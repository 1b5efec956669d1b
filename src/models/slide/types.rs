use serde::{Deserialize, Serialize};

/// Placeholder body for slides created through "add slide".
pub const DEFAULT_CONTENT: &str = "Add your content here";

/// Rendering variant of a slide. Title slides are centered and larger in the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Title,
    Content,
}

impl SlideKind {
    pub fn is_title(&self) -> bool {
        matches!(self, SlideKind::Title)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Content => "content",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub kind: SlideKind,
}

impl Slide {
    pub fn new(id: i64, title: impl Into<String>, content: impl Into<String>, kind: SlideKind) -> Self {
        Self { id, title: title.into(), content: content.into(), kind }
    }
}

/// Form payload for editing a slide in place.
#[derive(Debug, Deserialize)]
pub struct SlideForm {
    pub title: String,
    pub content: String,
    pub csrf_token: String,
}
