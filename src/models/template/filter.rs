use super::catalog::Catalog;
use super::types::{CategoryFilter, Template};

/// Templates matching the search query and category tab, in catalog order.
///
/// An empty query matches everything. Otherwise the query is matched as a
/// case-insensitive substring of the title, the description or any tag.
pub fn filter_templates<'a>(catalog: &'a Catalog, query: &str, category: CategoryFilter) -> Vec<&'a Template> {
    let needle = query.to_lowercase();
    catalog
        .templates()
        .iter()
        .filter(|t| query.is_empty() || t.matches_lowercase(&needle))
        .filter(|t| category.matches(t.category))
        .collect()
}

/// Gallery tabs: `all` followed by each category present, in first-seen order.
pub fn categories(catalog: &Catalog) -> Vec<CategoryFilter> {
    let mut tabs = vec![CategoryFilter::All];
    for t in catalog.templates() {
        let tab = CategoryFilter::Only(t.category);
        if !tabs.contains(&tab) {
            tabs.push(tab);
        }
    }
    tabs
}
