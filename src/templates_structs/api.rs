use serde::Serialize;

use crate::models::template::Template;

/// GET /api/v1/templates response.
#[derive(Serialize, Debug, Clone)]
pub struct ApiTemplateList {
    pub items: Vec<Template>,
    pub total: usize,
    pub categories: Vec<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct ApiErrorResponse {
    pub error: String,
}
