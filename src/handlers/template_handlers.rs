use actix_files::NamedFile;
use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::template::{self as tpl, Catalog, CategoryFilter, TemplatePreview};
use crate::templates_structs::{CategoryTab, GalleryTemplate, PageContext, TemplateCard};

#[derive(Deserialize, Default)]
pub struct GalleryQuery {
    #[serde(default)]
    pub q: String,
    pub category: Option<String>,
    pub preview: Option<String>,
}

/// Gallery location for a search/tab/preview combination. Defaults are left out.
pub fn gallery_href(query: &str, category: CategoryFilter, preview: Option<&str>) -> String {
    let mut params: Vec<(&str, &str)> = Vec::new();
    if !query.is_empty() {
        params.push(("q", query));
    }
    if category != CategoryFilter::All {
        params.push(("category", category.as_str()));
    }
    if let Some(id) = preview {
        params.push(("preview", id));
    }
    if params.is_empty() {
        return "/templates".to_string();
    }
    format!("/templates?{}", serde_urlencoded::to_string(&params).unwrap_or_default())
}

/// Resolve a `category` query value; missing or unknown values select the `all` tab.
pub fn parse_category(raw: Option<&str>) -> CategoryFilter {
    match raw {
        Some(s) => CategoryFilter::parse(s).unwrap_or_else(|| {
            log::debug!("Unknown category tab {s:?}, showing all");
            CategoryFilter::All
        }),
        None => CategoryFilter::All,
    }
}

/// GET /templates — searchable, tabbed gallery with an optional preview dialog.
pub async fn gallery(
    config: web::Data<AppConfig>,
    catalog: web::Data<Catalog>,
    session: Session,
    query: web::Query<GalleryQuery>,
) -> Result<HttpResponse, AppError> {
    let search = query.q.as_str();
    let active = parse_category(query.category.as_deref());

    let tabs = tpl::categories(&catalog)
        .into_iter()
        .map(|tab| CategoryTab {
            value: tab.as_str().to_string(),
            href: gallery_href(search, tab, None),
            active: tab == active,
        })
        .collect();

    let cards = tpl::filter_templates(&catalog, search, active)
        .into_iter()
        .map(|t| TemplateCard {
            preview_href: gallery_href(search, active, Some(t.id.as_str())),
            use_href: tpl::use_template_path(t),
            template: t.clone(),
        })
        .collect();

    let preview = query
        .preview
        .as_deref()
        .and_then(|id| catalog.find(id))
        .map(TemplatePreview::new);
    let use_preview_href = preview
        .as_ref()
        .map(|p| tpl::use_template_url(&p.template))
        .unwrap_or_default();

    let tmpl = GalleryTemplate {
        ctx: PageContext::build(&session, &config, "/templates"),
        query: search.to_string(),
        active_category: active.as_str().to_string(),
        tabs,
        cards,
        preview,
        close_href: gallery_href(search, active, None),
        use_preview_href,
    };
    render(tmpl)
}

/// GET /templates/{id}/use — hand the chosen template to the editor.
pub async fn use_template(
    catalog: web::Data<Catalog>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let template = catalog.find(&id).ok_or(AppError::NotFound)?;
    log::info!("Using template '{}'", template.id);
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", tpl::use_template_url(template)))
        .finish())
}

/// GET /placeholder.svg — fallback thumbnail, query string ignored.
pub async fn placeholder(config: web::Data<AppConfig>) -> Result<NamedFile, AppError> {
    NamedFile::open(config.static_dir.join("placeholder.svg")).map_err(|e| {
        log::warn!("Placeholder image unavailable: {e}");
        AppError::NotFound
    })
}
