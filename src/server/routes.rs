// file: src/server/routes.rs
// description: axum router and handlers exposing both contracts over JSON
// reference: https://docs.rs/axum

use crate::config::Config;
use crate::flows::{ScriptureRetrievalFlow, TranslationFlow};
use crate::llm::GenerativeModel;
use crate::models::{
    Religion, ScriptureRetrievalInput, ScriptureRetrievalOutput, TranslateTextOutput,
};
use crate::server::error::ApiError;
use crate::utils::{HealthReport, Validator};
use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub retrieval: ScriptureRetrievalFlow,
    pub translation: TranslationFlow,
}

impl AppState {
    pub fn new(config: Config, model: Arc<dyn GenerativeModel>) -> Self {
        let translation = TranslationFlow::new(model.clone())
            .with_default_language(&config.translation.default_language);

        Self {
            config: Arc::new(config),
            retrieval: ScriptureRetrievalFlow::new(model),
            translation,
        }
    }
}

/// Body of `POST /api/translate`; the language falls back to the configured default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateBody {
    pub text_to_translate: String,
    pub target_language: Option<String>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/religions", get(list_religions))
        .route("/api/scripture-retrieval", post(scripture_retrieval))
        .route("/api/translate", post(translate_text))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::for_config(&state.config))
}

async fn list_religions() -> Json<Vec<Religion>> {
    Json(Religion::ALL.to_vec())
}

async fn scripture_retrieval(
    State(state): State<AppState>,
    Json(input): Json<ScriptureRetrievalInput>,
) -> Result<Json<ScriptureRetrievalOutput>, ApiError> {
    Validator::validate_question(&input.question, state.config.retrieval.min_question_length)?;
    Validator::validate_religions(&input.religions)?;

    info!(
        "Scripture retrieval for {} religion(s): {}",
        input.religions.len(),
        Validator::truncate_text(&input.question, 80)
    );

    let output = state.retrieval.run(&input).await?;
    Ok(Json(output))
}

async fn translate_text(
    State(state): State<AppState>,
    Json(body): Json<TranslateBody>,
) -> Result<Json<TranslateTextOutput>, ApiError> {
    Validator::validate_text_not_empty("textToTranslate", &body.text_to_translate)?;
    if let Some(language) = body.target_language.as_deref() {
        Validator::validate_language_code(language)?;
    }

    let output = state
        .translation
        .translate(&body.text_to_translate, body.target_language.as_deref())
        .await?;
    Ok(Json(output))
}
