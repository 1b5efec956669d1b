use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;

use super::types::{Category, Template};
use crate::errors::AppError;

const SAMPLE_THUMBNAIL: &str = "/placeholder.svg?height=400&width=600";

/// Built once on first use; shared by every worker that serves the built-in catalog.
static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog { templates: builtin_templates() });

/// Ordered, immutable set of templates served by the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    templates: Vec<Template>,
}

impl Catalog {
    /// Build a catalog from explicit entries. Later duplicates of an id are dropped.
    pub fn new(templates: Vec<Template>) -> Self {
        let mut seen = HashSet::new();
        let templates = templates
            .into_iter()
            .filter(|t| seen.insert(t.id.clone()))
            .collect();
        Self { templates }
    }

    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Parse a JSON array of templates.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let templates: Vec<Template> = serde_json::from_str(json)
            .map_err(|e| AppError::Catalog(format!("invalid catalog JSON: {e}")))?;
        let count = templates.len();
        let catalog = Self::new(templates);
        if catalog.len() != count {
            log::warn!("Catalog contained {} duplicate template id(s); kept first occurrences", count - catalog.len());
        }
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Catalog(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }
}

fn sample(
    id: &str,
    title: &str,
    description: &str,
    category: Category,
    tags: &[&str],
    slide_count: i64,
    popular: bool,
) -> Template {
    Template {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        thumbnail_url: SAMPLE_THUMBNAIL.to_string(),
        slide_count,
        popular,
        updated: NaiveDate::from_ymd_opt(2023, 3, 1),
    }
}

fn builtin_templates() -> Vec<Template> {
    use Category::*;
    vec![
        sample("business-pitch", "Business Pitch Deck",
            "Perfect for startups seeking investment or presenting business ideas",
            Business, &["pitch", "startup", "investment"], 12, true),
        sample("marketing-plan", "Marketing Strategy",
            "Present your marketing campaigns and strategies effectively",
            Business, &["marketing", "strategy", "campaign"], 10, false),
        sample("quarterly-report", "Quarterly Business Report",
            "Share financial results and business performance",
            Business, &["report", "finance", "quarterly"], 15, true),
        sample("creative-portfolio", "Creative Portfolio",
            "Showcase your creative work with this visually stunning template",
            Creative, &["portfolio", "design", "creative"], 8, true),
        sample("product-launch", "Product Launch",
            "Introduce your new product with impact and style",
            Business, &["product", "launch", "marketing"], 10, true),
        sample("educational-course", "Educational Course",
            "Perfect for teachers and trainers presenting educational content",
            Education, &["education", "course", "training"], 20, false),
        sample("research-presentation", "Research Findings",
            "Present your research findings in a clear, academic format",
            Education, &["research", "academic", "data"], 18, false),
        sample("minimal-portfolio", "Minimal Portfolio",
            "A clean, minimalist approach to showcase your work",
            Creative, &["portfolio", "minimal", "clean"], 12, true),
        sample("annual-report", "Annual Report",
            "Comprehensive template for annual business reporting",
            Business, &["annual", "report", "business"], 25, false),
    ]
}
