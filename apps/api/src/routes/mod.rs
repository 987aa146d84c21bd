pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::generation::handlers as generation;
use crate::letter::handlers as letter;
use crate::session::handlers as session;
use crate::state::AppState;
use crate::templates::handlers as templates;

async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalogs
        .route("/api/v1/templates", get(templates::handle_list_templates))
        .route("/api/v1/navigation", get(session::handle_navigation_menu))
        // Stateless rendering
        .route("/api/v1/resumes/render", post(templates::handle_render_resume))
        .route(
            "/api/v1/cover-letters/assemble",
            post(letter::handle_assemble_cover_letter),
        )
        // Sessions
        .route("/api/v1/sessions", post(session::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(session::handle_get_session).delete(session::handle_delete_session),
        )
        .route("/api/v1/sessions/:id/navigate", post(session::handle_navigate))
        // Resume panel
        .route(
            "/api/v1/sessions/:id/resume/edits",
            post(session::handle_resume_edits),
        )
        .route(
            "/api/v1/sessions/:id/resume/preview",
            post(session::handle_toggle_resume_preview),
        )
        .route(
            "/api/v1/sessions/:id/resume/document",
            get(session::handle_resume_document),
        )
        .route(
            "/api/v1/sessions/:id/resume/generate",
            post(generation::handle_generate_resume),
        )
        // Cover letter panel
        .route(
            "/api/v1/sessions/:id/cover-letter/edits",
            post(session::handle_cover_letter_edits),
        )
        .route(
            "/api/v1/sessions/:id/cover-letter/preview",
            post(session::handle_toggle_cover_letter_preview),
        )
        .route(
            "/api/v1/sessions/:id/cover-letter/generate",
            post(generation::handle_generate_cover_letter),
        )
        // LinkedIn panel
        .route(
            "/api/v1/sessions/:id/linkedin/edits",
            post(session::handle_linkedin_edits),
        )
        .route(
            "/api/v1/sessions/:id/linkedin/analyze",
            post(generation::handle_analyze_profile),
        )
        // Export / import / download affordances (not wired)
        .route("/api/v1/sessions/:id/resume/export", post(not_implemented))
        .route("/api/v1/sessions/:id/resume/import", post(not_implemented))
        .route(
            "/api/v1/sessions/:id/cover-letter/download",
            post(not_implemented),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;
    use uuid::Uuid;

    use super::*;
    use crate::config::Config;
    use crate::generation::analyzer::FixedProfileAnalyzer;
    use crate::session::store::SessionStore;
    use crate::templates::html::ResumeRenderer;

    fn test_state() -> AppState {
        test_state_with(Duration::ZERO)
    }

    fn test_state_with(generation_delay: Duration) -> AppState {
        let config = Config {
            port: 0,
            rust_log: "debug".to_string(),
            generation_delay,
            session_ttl: Duration::from_secs(60),
        };
        AppState {
            sessions: SessionStore::new(config.session_ttl),
            config,
            renderer: Arc::new(ResumeRenderer::new().unwrap()),
            analyzer: Arc::new(FixedProfileAnalyzer),
        }
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(match body {
                Some(v) => Body::from(v.to_string()),
                None => Body::empty(),
            })
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn new_session(app: &Router) -> String {
        let (status, body) = send(app, "POST", "/api/v1/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_health() {
        let app = build_router(test_state());
        let (status, body) = send(&app, "GET", "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_template_catalog() {
        let app = build_router(test_state());
        let (status, body) = send(&app, "GET", "/api/v1/templates", None).await;
        assert_eq!(status, StatusCode::OK);
        let ids: Vec<&str> = body["templates"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["modern", "classic", "creative"]);
    }

    #[tokio::test]
    async fn test_stateless_render_falls_back_to_modern() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/resumes/render",
            Some(json!({
                "job_title": "Analyst",
                "skills": "A, B ,C",
                "work_history": [{"company": "One"}, {"company": "Two"}],
                "education": [{"school": "Uni"}],
                "selected_template": "glossy"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["document"]["layout"], "modern");
        assert_eq!(body["document"]["skills"], json!(["A", "B", "C"]));
        assert_eq!(body["document"]["experience"].as_array().unwrap().len(), 2);
        assert!(body["html"].as_str().unwrap().contains("resume--modern"));
    }

    #[tokio::test]
    async fn test_stateless_letter_assembly() {
        let app = build_router(test_state());
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/cover-letters/assemble",
            Some(json!({
                "job_title": "PM",
                "company": "Acme",
                "hiring_manager": "Jane Doe",
                "key_points": ["Led team of 5"],
                "tone": "friendly"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["paragraphs"][0], "Dear Jane Doe,");
        assert!(body["letter"].as_str().unwrap().contains("\n• Led team of 5"));
    }

    #[tokio::test]
    async fn test_resume_edits_flow_into_document() {
        let app = build_router(test_state());
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/resume/edits"),
            Some(json!({"edits": [
                {"op": "set_field", "field": "job_title", "value": "Engineer"},
                {"op": "update_work", "index": 0, "field": "company", "value": "Acme"},
                {"op": "add_work"},
                {"op": "update_work", "index": 1, "field": "company", "value": "Globex"},
                {"op": "select_template", "template": "classic"}
            ]})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["work_history"].as_array().unwrap().len(), 2);

        let (status, body) = send(
            &app,
            "GET",
            &format!("/api/v1/sessions/{id}/resume/document"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["document"]["layout"], "classic");
        assert_eq!(body["document"]["experience"][0]["company"], "Acme");
        assert_eq!(body["document"]["experience"][1]["company"], "Globex");
        assert_eq!(
            body["html"].as_str().unwrap().matches("entry--work").count(),
            2
        );
    }

    #[tokio::test]
    async fn test_resume_generate_turns_preview_on() {
        let app = build_router(test_state());
        let id = new_session(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/resume/generate"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["panel"]["show_preview"], true);
        assert_eq!(body["panel"]["generating"], false);
        assert_eq!(body["preview"]["document"]["header"]["title"], "Your Name");

        let (_, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/resume/preview"),
            None,
        )
        .await;
        assert_eq!(body["show_preview"], false);
    }

    #[tokio::test]
    async fn test_cover_letter_key_points_and_generation() {
        let app = build_router(test_state());
        let id = new_session(&app).await;
        let edits = format!("/api/v1/sessions/{id}/cover-letter/edits");

        let (_, body) = send(
            &app,
            "POST",
            &edits,
            Some(json!({"edits": [
                {"op": "set_field", "field": "company", "value": "Initech"},
                {"op": "update_key_point", "index": 0, "value": "Led team of 5"},
                {"op": "add_key_point"},
                {"op": "update_key_point", "index": 1, "value": "Shipped X"}
            ]})),
        )
        .await;
        assert_eq!(body["can_remove_key_points"], true);
        assert_eq!(body["letter_visible"], false);

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/cover-letter/generate"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["letter_visible"], true);
        let letter = body["generated_letter"].as_str().unwrap();
        assert!(letter.starts_with("Dear Hiring Manager,"));
        let first = letter.find("• Led team of 5").unwrap();
        let second = letter.find("• Shipped X").unwrap();
        assert!(first < second);

        let (_, body) = send(
            &app,
            "POST",
            &edits,
            Some(json!({"edits": [{"op": "remove_key_point", "index": 1}]})),
        )
        .await;
        assert_eq!(body["data"]["key_points"], json!(["Led team of 5"]));
        assert_eq!(body["can_remove_key_points"], false);

        let (_, body) = send(
            &app,
            "POST",
            &edits,
            Some(json!({"edits": [{"op": "remove_key_point", "index": 0}]})),
        )
        .await;
        assert_eq!(body["data"]["key_points"], json!(["Led team of 5"]));
    }

    #[tokio::test]
    async fn test_linkedin_analysis_is_fixed() {
        let app = build_router(test_state());
        let id = new_session(&app).await;

        send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/linkedin/edits"),
            Some(json!({"edits": [
                {"op": "set_headline", "value": "Staff Engineer"},
                {"op": "update_skill", "index": 0, "value": "Rust"}
            ]})),
        )
        .await;

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/linkedin/analyze"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["score"], 85);
        assert_eq!(body["panel"]["score"], 85);
        let sections: Vec<&str> = body["panel"]["data"]["recommendations"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["section"].as_str().unwrap())
            .collect();
        assert_eq!(sections, vec!["Headline", "Summary", "Experience"]);
        assert_eq!(body["panel"]["data"]["headline"], "Staff Engineer");
    }

    #[tokio::test]
    async fn test_navigation() {
        let app = build_router(test_state());
        let id = new_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}/navigate");

        let (_, body) = send(&app, "POST", &uri, Some(json!({"target": "cover-letter"}))).await;
        assert_eq!(body["active_tab"], "cover-letter");

        let (_, body) = send(&app, "POST", &uri, Some(json!({"target": "settings"}))).await;
        assert_eq!(body["active_tab"], "cover-letter");

        let (_, body) = send(&app, "GET", "/api/v1/navigation", None).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_switching_tabs_resets_the_panel_left() {
        let app = build_router(test_state());
        let id = new_session(&app).await;
        let navigate = format!("/api/v1/sessions/{id}/navigate");

        send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/resume/edits"),
            Some(json!({"edits": [{"op": "set_field", "field": "job_title", "value": "SRE"}]})),
        )
        .await;
        send(&app, "POST", &navigate, Some(json!({"target": "cover-letter"}))).await;
        let (_, body) = send(&app, "POST", &navigate, Some(json!({"target": "resume"}))).await;
        assert_eq!(body["active_tab"], "resume");

        let (_, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(body["resume"]["data"]["job_title"], "");
        assert_eq!(
            body["resume"]["data"]["work_history"].as_array().unwrap().len(),
            1
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_result_dropped_when_panel_left_mid_generation() {
        let app = build_router(test_state_with(Duration::from_secs(2)));
        let id = new_session(&app).await;
        let navigate = format!("/api/v1/sessions/{id}/navigate");
        send(&app, "POST", &navigate, Some(json!({"target": "cover-letter"}))).await;

        let pending = tokio::spawn({
            let app = app.clone();
            let uri = format!("/api/v1/sessions/{id}/cover-letter/generate");
            async move { send(&app, "POST", &uri, None).await }
        });
        tokio::time::sleep(Duration::from_secs(1)).await;
        send(&app, "POST", &navigate, Some(json!({"target": "linkedin"}))).await;

        let (status, body) = pending.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["generated_letter"], Value::Null);
        assert_eq!(body["generating"], false);

        let (_, body) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(body["active_tab"], "linkedin");
        assert_eq!(body["cover_letter"]["generated_letter"], Value::Null);
        assert_eq!(body["cover_letter"]["show_preview"], false);
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_session_expires() {
        let app = build_router(test_state());
        let id = new_session(&app).await;
        let uri = format!("/api/v1/sessions/{id}");

        tokio::time::advance(Duration::from_secs(30)).await;
        let (status, _) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        tokio::time::advance(Duration::from_secs(61)).await;
        let (status, body) = send(&app, "GET", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_generate_while_busy_conflicts() {
        let state = test_state();
        let app = build_router(state.clone());
        let id = new_session(&app).await;

        let workspace = state
            .sessions
            .get(Uuid::parse_str(&id).unwrap())
            .await
            .unwrap();
        let _guard = workspace.cover_letter.generating.try_acquire().unwrap();

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/cover-letter/generate"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn test_unknown_session_and_unwired_routes() {
        let app = build_router(test_state());
        let missing = Uuid::new_v4();
        let (status, _) = send(&app, "GET", &format!("/api/v1/sessions/{missing}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let id = new_session(&app).await;
        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/v1/sessions/{id}/resume/export"),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body["error"]["code"], "NOT_IMPLEMENTED");

        let (status, _) = send(&app, "DELETE", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, "GET", &format!("/api/v1/sessions/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
