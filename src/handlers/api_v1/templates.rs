use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::handlers::template_handlers::{GalleryQuery, parse_category};
use crate::models::template::{self as tpl, Catalog};
use crate::templates_structs::{ApiErrorResponse, ApiTemplateList};

/// GET /api/v1/templates - Filtered catalog.
/// Query params: q (search), category (tab value, default all)
pub async fn list(
    catalog: web::Data<Catalog>,
    query: web::Query<GalleryQuery>,
) -> Result<HttpResponse, AppError> {
    let category = parse_category(query.category.as_deref());
    let items: Vec<_> = tpl::filter_templates(&catalog, &query.q, category)
        .into_iter()
        .cloned()
        .collect();

    let response = ApiTemplateList {
        total: items.len(),
        items,
        categories: tpl::categories(&catalog).iter().map(|c| c.as_str().to_string()).collect(),
    };
    Ok(HttpResponse::Ok().json(response))
}

/// GET /api/v1/templates/{id}
pub async fn read(
    catalog: web::Data<Catalog>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    match catalog.find(&id) {
        Some(template) => Ok(HttpResponse::Ok().json(template)),
        None => Ok(HttpResponse::NotFound().json(ApiErrorResponse {
            error: format!("Template '{id}' not found"),
        })),
    }
}
