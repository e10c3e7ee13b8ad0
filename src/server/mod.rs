// file: src/server/mod.rs
// description: http front end for scripture retrieval and translation
// reference: https://docs.rs/axum

pub mod error;
pub mod routes;

pub use error::{ApiError, ErrorBody};
pub use routes::{AppState, TranslateBody, create_router};

use crate::config::ServerConfig;
use crate::error::Result;
use tokio::net::TcpListener;
use tracing::info;

pub async fn serve(server: &ServerConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", server.host, server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("WisdomWell listening on http://{}", addr);

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::WellError;
    use crate::llm::{GenerativeModel, ModelRequest, UnavailableModel};
    use crate::prompts::{SCRIPTURE_PROMPT_NAME, TRANSLATION_PROMPT_NAME};
    use async_trait::async_trait;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode},
    };
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };
    use tower::ServiceExt;

    #[derive(Default)]
    struct CannedModel {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl GenerativeModel for CannedModel {
        fn name(&self) -> &str {
            "canned"
        }

        async fn generate(&self, request: &ModelRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(WellError::Model("upstream unavailable".to_string()));
            }

            let reply = match request.prompt_name {
                SCRIPTURE_PROMPT_NAME => json!({
                    "scriptureEntries": [{
                        "scripture": "Dhammapada",
                        "chapter": "1",
                        "verses": "5",
                        "answer": "Hatred is never appeased by hatred.",
                        "aiInsight": "Purpose according to Dhammapada: Meet hatred with love.",
                        "religion": "Buddhism"
                    }]
                }),
                TRANSLATION_PROMPT_NAME => json!({ "translatedText": "শান্তি" }),
                other => return Err(WellError::Model(format!("unknown prompt {}", other))),
            };
            Ok(reply.to_string())
        }
    }

    fn app(model: Arc<CannedModel>) -> axum::Router {
        create_router(AppState::new(Config::default_config(), model))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_scripture_retrieval_strips_labels() {
        let model = Arc::new(CannedModel::default());
        let response = app(model.clone())
            .oneshot(post_json(
                "/api/scripture-retrieval",
                json!({
                    "question": "How do I overcome hatred?",
                    "religions": ["Buddhism"]
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(
            body["scriptureEntries"][0]["aiInsight"],
            json!("Meet hatred with love.")
        );
        assert_eq!(body["scriptureEntries"][0]["religion"], json!("Buddhism"));
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_short_question_is_rejected_before_model_call() {
        let model = Arc::new(CannedModel::default());
        let response = app(model.clone())
            .oneshot(post_json(
                "/api/scripture-retrieval",
                json!({ "question": "peace?", "religions": ["Islam"] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json(response).await;
        assert_eq!(body["field"], json!("question"));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_religions_is_rejected() {
        let model = Arc::new(CannedModel::default());
        let response = app(model.clone())
            .oneshot(post_json(
                "/api/scripture-retrieval",
                json!({ "question": "What is the meaning of life?", "religions": [] }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json(response).await;
        assert_eq!(body["field"], json!("religions"));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_religion_fails_deserialization() {
        let model = Arc::new(CannedModel::default());
        let response = app(model.clone())
            .oneshot(post_json(
                "/api/scripture-retrieval",
                json!({ "question": "What is the meaning of life?", "religions": ["Zoroastrianism"] }),
            ))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_translate_defaults_language() {
        let model = Arc::new(CannedModel::default());
        let response = app(model)
            .oneshot(post_json(
                "/api/translate",
                json!({ "textToTranslate": "Peace" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body, json!({ "translatedText": "শান্তি" }));
    }

    #[tokio::test]
    async fn test_translate_rejects_bad_language_code() {
        let model = Arc::new(CannedModel::default());
        let response = app(model.clone())
            .oneshot(post_json(
                "/api/translate",
                json!({ "textToTranslate": "Peace", "targetLanguage": "bengali!" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_model_failure_maps_to_bad_gateway() {
        let model = Arc::new(CannedModel {
            fail: true,
            ..Default::default()
        });
        let response = app(model)
            .oneshot(post_json(
                "/api/translate",
                json!({ "textToTranslate": "Peace", "targetLanguage": "es" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = read_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("upstream unavailable"));
    }

    #[tokio::test]
    async fn test_religions_endpoint_lists_all_eight() {
        let model = Arc::new(CannedModel::default());
        let response = app(model)
            .oneshot(
                Request::builder()
                    .uri("/api/religions")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 8);
        assert_eq!(body[0], json!("Hinduism"));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let model = Arc::new(CannedModel::default());
        let response = app(model)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert!(body["status"].is_string());
        assert!(body["checks"].is_array());
    }

    #[tokio::test]
    async fn test_degraded_startup_reports_health_and_fails_model_calls() {
        let state = AppState::new(
            Config::default_config(),
            Arc::new(UnavailableModel::new("No API key configured")),
        );
        let router = create_router(state);

        let health = router
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);
        assert_eq!(read_json(health).await["status"], json!("degraded"));

        let translate = router
            .oneshot(post_json(
                "/api/translate",
                json!({ "textToTranslate": "Peace" }),
            ))
            .await
            .unwrap();
        assert_eq!(translate.status(), StatusCode::BAD_GATEWAY);
        let body = read_json(translate).await;
        assert!(body["error"].as_str().unwrap().contains("No API key configured"));
    }
}
