//! Axum route handlers for sessions, navigation and form edits.
//!
//! Edits arrive in batches and are applied in order, each through the panel's
//! pure edit function; the stored record is replaced with the result.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::forms::cover_letter::{apply_cover_letter_edit, CoverLetterEdit};
use crate::forms::linkedin::{apply_linkedin_edit, LinkedInEdit};
use crate::forms::resume::{apply_resume_edit, ResumeEdit};
use crate::session::workspace::{
    CoverLetterPanelView, LinkedInPanelView, MenuItem, NavTarget, ResumePanelView, Tab,
    WorkspaceView, MENU,
};
use crate::state::AppState;
use crate::templates::html::RenderedResume;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct EditBatch<E> {
    pub edits: Vec<E>,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub target: NavTarget,
}

#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub active_tab: Tab,
}

#[derive(Debug, Serialize)]
pub struct MenuResponse {
    pub items: &'static [MenuItem],
}

// ────────────────────────────────────────────────────────────────────────────
// Session lifecycle
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<WorkspaceView>) {
    let workspace = state.sessions.create().await;
    (StatusCode::CREATED, Json(workspace.view()))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<WorkspaceView>, AppError> {
    Ok(Json(state.sessions.get(id).await?.view()))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.sessions.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ────────────────────────────────────────────────────────────────────────────
// Navigation
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/navigation
pub async fn handle_navigation_menu() -> Json<MenuResponse> {
    Json(MenuResponse { items: MENU })
}

/// POST /api/v1/sessions/:id/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<NavigateResponse>, AppError> {
    let active_tab = state
        .sessions
        .update(id, |ws| ws.navigate(request.target))
        .await?;
    Ok(Json(NavigateResponse { active_tab }))
}

// ────────────────────────────────────────────────────────────────────────────
// Resume panel
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/resume/edits
pub async fn handle_resume_edits(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(batch): Json<EditBatch<ResumeEdit>>,
) -> Result<Json<ResumePanelView>, AppError> {
    debug!("Applying {} resume edits to session {id}", batch.edits.len());
    let view = state
        .sessions
        .update(id, |ws| {
            ws.resume.data = batch
                .edits
                .into_iter()
                .fold(ws.resume.data.clone(), |data, edit| {
                    apply_resume_edit(&data, edit)
                });
            ws.resume.view()
        })
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/resume/preview
pub async fn handle_toggle_resume_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumePanelView>, AppError> {
    let view = state
        .sessions
        .update(id, |ws| {
            ws.resume.show_preview = !ws.resume.show_preview;
            ws.resume.view()
        })
        .await?;
    Ok(Json(view))
}

/// GET /api/v1/sessions/:id/resume/document
///
/// Renders whatever the resume form currently holds.
pub async fn handle_resume_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RenderedResume>, AppError> {
    let workspace = state.sessions.get(id).await?;
    Ok(Json(state.renderer.render_record(&workspace.resume.data)?))
}

// ────────────────────────────────────────────────────────────────────────────
// Cover letter panel
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/cover-letter/edits
pub async fn handle_cover_letter_edits(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(batch): Json<EditBatch<CoverLetterEdit>>,
) -> Result<Json<CoverLetterPanelView>, AppError> {
    debug!(
        "Applying {} cover letter edits to session {id}",
        batch.edits.len()
    );
    let view = state
        .sessions
        .update(id, |ws| {
            ws.cover_letter.data = batch
                .edits
                .into_iter()
                .fold(ws.cover_letter.data.clone(), |data, edit| {
                    apply_cover_letter_edit(&data, edit)
                });
            ws.cover_letter.view()
        })
        .await?;
    Ok(Json(view))
}

/// POST /api/v1/sessions/:id/cover-letter/preview
pub async fn handle_toggle_cover_letter_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CoverLetterPanelView>, AppError> {
    let view = state
        .sessions
        .update(id, |ws| {
            ws.cover_letter.show_preview = !ws.cover_letter.show_preview;
            ws.cover_letter.view()
        })
        .await?;
    Ok(Json(view))
}

// ────────────────────────────────────────────────────────────────────────────
// LinkedIn panel
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions/:id/linkedin/edits
pub async fn handle_linkedin_edits(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(batch): Json<EditBatch<LinkedInEdit>>,
) -> Result<Json<LinkedInPanelView>, AppError> {
    debug!("Applying {} profile edits to session {id}", batch.edits.len());
    let view = state
        .sessions
        .update(id, |ws| {
            ws.linkedin.data = batch
                .edits
                .into_iter()
                .fold(ws.linkedin.data.clone(), |data, edit| {
                    apply_linkedin_edit(&data, edit)
                });
            ws.linkedin.view()
        })
        .await?;
    Ok(Json(view))
}
