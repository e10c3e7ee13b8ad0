// file: src/server/error.rs
// description: maps crate errors onto JSON error responses

use crate::error::WellError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug)]
pub struct ApiError(pub WellError);

impl From<WellError> for ApiError {
    fn from(err: WellError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            WellError::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: message,
                    field: Some(field),
                },
            ),
            err if err.is_upstream() => {
                error!("Model call failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody {
                        error: err.to_string(),
                        field: None,
                    },
                )
            }
            err => {
                error!("Request failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "An unexpected error occurred.".to_string(),
                        field: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
