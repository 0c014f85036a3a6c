pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze_job;
use crate::outreach::handlers::handle_write_mail;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/jobs/analyze", post(handle_analyze_job))
        .route("/api/v1/emails", post(handle_write_mail))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::testing::ScriptedModel;
    use crate::outreach::email_composer::CandidateProfile;

    fn app_with(model: Arc<ScriptedModel>) -> Router {
        build_router(AppState {
            llm: model,
            profile: CandidateProfile::default(),
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(Arc::new(ScriptedModel::default()));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "outreach-api");
    }

    #[tokio::test]
    async fn test_analyze_returns_job_record() {
        let model = Arc::new(ScriptedModel::replying(
            r#"{"role": "Engineer", "company": "Initech", "required_skills": ["React.js", "AWS"]}"#,
        ));
        let (status, body) = post_json(
            app_with(model.clone()),
            "/api/v1/jobs/analyze",
            json!({"scraped_text": "Engineer at Initech. React.js and AWS."}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["job"]["company"], "Initech");
        assert_eq!(body["job"]["normalized_required_skills"], json!(["aws", "react"]));
        assert_eq!(body["job"]["visa_analysis"]["no_h1b"], false);
        assert!(model.prompts()[0].contains("Engineer at Initech."));
    }

    #[tokio::test]
    async fn test_analyze_rejects_blank_text_without_calling_model() {
        let model = Arc::new(ScriptedModel::default());
        let (status, body) = post_json(
            app_with(model.clone()),
            "/api/v1/jobs/analyze",
            json!({"scraped_text": "   "}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(model.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_analyze_unparseable_output_is_bad_gateway() {
        let model = Arc::new(ScriptedModel::replying("Sorry, I cannot help with that."));
        let (status, body) = post_json(
            app_with(model),
            "/api/v1/jobs/analyze",
            json!({"scraped_text": "some posting"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "PARSE_ERROR");
        assert_eq!(body["error"]["message"], "Unable to parse job analysis");
    }

    #[tokio::test]
    async fn test_write_mail_returns_email() {
        let model = Arc::new(ScriptedModel::replying("Hello Initech,\nI build React apps."));
        let (status, body) = post_json(
            app_with(model.clone()),
            "/api/v1/emails",
            json!({
                "job": {"role": "Engineer", "company": "Initech"},
                "links": "https://example.com/portfolio",
                "matched_skills": ["React", "AWS"]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["email"], "Hello Initech,\nI build React apps.");
        let prompt = &model.prompts()[0];
        assert!(prompt.contains("React, AWS"));
        assert!(prompt.contains("https://example.com/portfolio"));
    }

    #[tokio::test]
    async fn test_write_mail_requires_job() {
        let model = Arc::new(ScriptedModel::default());
        let (status, body) = post_json(
            app_with(model),
            "/api/v1/emails",
            json!({"job": null, "matched_skills": []}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_write_mail_model_failure_is_bad_gateway() {
        let model = Arc::new(ScriptedModel::default());
        let (status, body) = post_json(
            app_with(model),
            "/api/v1/emails",
            json!({"job": {"role": "Engineer"}}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "LLM_ERROR");
    }
}
