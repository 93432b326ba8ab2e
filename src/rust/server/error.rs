use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use super::schema::{LocSegment, ValidationIssue};
use crate::classifier::ClassifierError;
use crate::inference::PredictError;

/// Errors surfaced by the HTTP layer, each mapped to one status code.
#[derive(Debug)]
pub enum ApiError {
    /// The body does not have the shape `/predict` accepts (422)
    Validation(Vec<ValidationIssue>),
    /// No model was loaded at startup (500)
    ModelUnavailable,
    /// The classifier failed while predicting (500)
    Prediction(String),
}

impl ApiError {
    pub fn validation(loc: Vec<LocSegment>, msg: impl Into<String>, kind: &str) -> Self {
        ApiError::Validation(vec![ValidationIssue::new(loc, msg, kind)])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ModelUnavailable | ApiError::Prediction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(issues) => json!({ "detail": issues }),
            ApiError::ModelUnavailable => json!({ "detail": crate::inference::MODEL_UNAVAILABLE_DETAIL }),
            ApiError::Prediction(msg) => json!({ "detail": format!("Prediction error: {}", msg) }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<PredictError> for ApiError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::EmptyFeatures => {
                ApiError::validation(vec!["body".into(), "features".into()], err.to_string(), "too_short")
            }
            PredictError::ModelUnavailable => {
                log::warn!("Prediction requested but no model is loaded");
                ApiError::ModelUnavailable
            }
            PredictError::Classifier(e) => {
                log::error!("Prediction failed: {}", e);
                match e {
                    ClassifierError::PredictionError(msg) => ApiError::Prediction(msg),
                    other => ApiError::Prediction(other.to_string()),
                }
            }
        }
    }
}

impl From<Vec<ValidationIssue>> for ApiError {
    fn from(issues: Vec<ValidationIssue>) -> Self {
        ApiError::Validation(issues)
    }
}
