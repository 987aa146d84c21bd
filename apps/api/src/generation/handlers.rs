//! Axum route handlers for the simulated generate / analyze steps.
//!
//! Each handler snapshots the panel's record at submit time, runs the step
//! behind the panel's busy flag, writes the outcome back to the session, and
//! returns a fresh view once the flag has been released.
//!
//! If the user navigated away while the step was pending, the panel was reset
//! and carries a new flag; the outcome is then dropped instead of written to
//! the fresh panel.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::analyzer::ProfileAnalysis;
use crate::generation::simulated::run_simulated;
use crate::letter::assemble_cover_letter;
use crate::models::linkedin::LinkedInProfileData;
use crate::session::workspace::{CoverLetterPanelView, LinkedInPanelView, ResumePanelView};
use crate::state::AppState;
use crate::templates::html::RenderedResume;

#[derive(Debug, Serialize)]
pub struct ResumeGenerateResponse {
    pub panel: ResumePanelView,
    pub preview: RenderedResume,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: ProfileAnalysis,
    pub panel: LinkedInPanelView,
}

/// POST /api/v1/sessions/:id/resume/generate
///
/// After the delay, switches the resume panel to preview and returns the
/// rendering of the record as submitted.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ResumeGenerateResponse>, AppError> {
    let workspace = state.sessions.get(id).await?;
    let submitted = &workspace.resume.data;
    let flag = &workspace.resume.generating;
    let renderer = &state.renderer;
    let sessions = &state.sessions;

    let preview = run_simulated(
        flag,
        state.generation_delay(),
        "Resume generation",
        move || async move {
            let preview = renderer.render_record(submitted)?;
            sessions
                .update(id, |ws| {
                    if ws.resume.generating.same_as(flag) {
                        ws.resume.show_preview = true;
                    } else {
                        debug!("Resume panel was reset; preview not switched on");
                    }
                })
                .await?;
            Ok(preview)
        },
    )
    .await?;

    let panel = state.sessions.get(id).await?.resume.view();
    Ok(Json(ResumeGenerateResponse { panel, preview }))
}

/// POST /api/v1/sessions/:id/cover-letter/generate
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CoverLetterPanelView>, AppError> {
    let workspace = state.sessions.get(id).await?;
    let submitted = &workspace.cover_letter.data;
    let flag = &workspace.cover_letter.generating;
    let sessions = &state.sessions;

    run_simulated(
        flag,
        state.generation_delay(),
        "Cover letter generation",
        move || async move {
            let letter = assemble_cover_letter(submitted);
            sessions
                .update(id, |ws| {
                    if !ws.cover_letter.generating.same_as(flag) {
                        debug!("Cover letter panel was reset; letter discarded");
                        return;
                    }
                    ws.cover_letter.generated_letter = Some(letter);
                    ws.cover_letter.show_preview = true;
                })
                .await
        },
    )
    .await?;

    Ok(Json(state.sessions.get(id).await?.cover_letter.view()))
}

/// POST /api/v1/sessions/:id/linkedin/analyze
///
/// The analyzer sees the profile as submitted; its recommendations replace
/// whatever the panel held before.
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let workspace = state.sessions.get(id).await?;
    let submitted = &workspace.linkedin.data;
    let flag = &workspace.linkedin.analyzing;
    let analyzer = state.analyzer.as_ref();
    let sessions = &state.sessions;

    let analysis = run_simulated(
        flag,
        state.generation_delay(),
        "Profile analysis",
        move || async move {
            let analysis = analyzer.analyze(submitted).await?;
            let recommendations = analysis.recommendations.clone();
            let score = analysis.score;
            sessions
                .update(id, |ws| {
                    if !ws.linkedin.analyzing.same_as(flag) {
                        debug!("LinkedIn panel was reset; analysis discarded");
                        return;
                    }
                    ws.linkedin.data = LinkedInProfileData {
                        recommendations,
                        ..ws.linkedin.data.clone()
                    };
                    ws.linkedin.score = Some(score);
                })
                .await?;
            Ok(analysis)
        },
    )
    .await?;

    let panel = state.sessions.get(id).await?.linkedin.view();
    Ok(Json(AnalyzeResponse { analysis, panel }))
}
