//! Axum route handlers for the template catalog and stateless resume rendering.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;
use crate::templates::html::RenderedResume;
use crate::templates::{TemplateDescriptor, TEMPLATE_CATALOG};

#[derive(Debug, Serialize)]
pub struct TemplateCatalogResponse {
    pub templates: &'static [TemplateDescriptor],
}

/// GET /api/v1/templates
pub async fn handle_list_templates() -> Json<TemplateCatalogResponse> {
    Json(TemplateCatalogResponse {
        templates: TEMPLATE_CATALOG,
    })
}

/// POST /api/v1/resumes/render
///
/// Renders a full form record without touching any session.
pub async fn handle_render_resume(
    State(state): State<AppState>,
    Json(data): Json<ResumeData>,
) -> Result<Json<RenderedResume>, AppError> {
    Ok(Json(state.renderer.render_record(&data)?))
}
