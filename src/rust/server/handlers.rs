use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    response::Json,
};

use super::error::ApiError;
use super::schema::{EndpointInfo, HealthResponse, IndexResponse, PredictRequest, PredictResponse};
use super::AppState;
use crate::inference::predict_first;

pub const SERVICE_TITLE: &str = "Iris Species Predictor API";
pub const SERVICE_DESCRIPTION: &str = "API to predict Iris species from sepal/petal measurements.";

pub async fn root() -> Json<IndexResponse> {
    Json(IndexResponse {
        service: SERVICE_TITLE.to_string(),
        description: SERVICE_DESCRIPTION.to_string(),
        status: "running".to_string(),
        endpoints: vec![
            EndpointInfo::new("GET", "/health"),
            EndpointInfo::new("POST", "/predict"),
        ],
    })
}

/// `GET /health`. Always succeeds; reports whether a model was loaded.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model_loaded: state.model.is_loaded(),
    })
}

/// `POST /predict`. Classifies the first feature vector of the body.
///
/// A body without a content type is still read as JSON. Any declared content
/// type other than JSON is a validation error.
pub async fn predict(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<PredictResponse>, ApiError> {
    if !accepts_json(&headers) {
        return Err(ApiError::validation(
            vec!["body".into()],
            "Input should be a valid dictionary or object to extract fields from",
            "model_attributes_type",
        ));
    }
    let request = PredictRequest::from_slice(&body)?;

    let prediction = predict_first(&state.model, &request.features)?;
    log::debug!(
        "Predicted {} ({}) for {:?}",
        prediction.class_id,
        prediction.species_name,
        prediction.features
    );

    Ok(Json(prediction.into()))
}

fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return true;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let mime = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
