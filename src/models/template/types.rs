use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Image shown when a template has no thumbnail of its own.
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder.svg";

/// Number of tags shown on a gallery card.
pub const CARD_TAG_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Creative,
    Education,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Creative => "creative",
            Category::Education => "education",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "business" => Some(Category::Business),
            "creative" => Some(Category::Creative),
            "education" => Some(Category::Education),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gallery tab: either the `all` sentinel or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a tab value. Unknown values yield `None`; callers decide the fallback.
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(CategoryFilter::All);
        }
        Category::parse(s).map(CategoryFilter::Only)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only catalog entry describing a pre-built presentation style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub thumbnail_url: String,
    pub slide_count: i64,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub updated: Option<NaiveDate>,
}

impl Template {
    pub fn thumbnail_or_placeholder(&self) -> &str {
        if self.thumbnail_url.is_empty() {
            PLACEHOLDER_THUMBNAIL
        } else {
            &self.thumbnail_url
        }
    }

    /// Tags shown on the gallery card.
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(CARD_TAG_LIMIT)]
    }

    /// "March 2023" style label for the preview dialog.
    pub fn updated_label(&self) -> Option<String> {
        self.updated.map(|d| d.format("%B %Y").to_string())
    }

    /// Case-insensitive substring match against title, description or any tag.
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}
