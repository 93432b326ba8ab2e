use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::classifier::{FeatureVector, FEATURE_COUNT};
use crate::inference::Prediction;

/// Body of `POST /predict`.
///
/// Each vector must hold exactly four numbers; integers are accepted as floats.
/// The list is batch-shaped but only its first vector is classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<FeatureVector>,
}

impl PredictRequest {
    /// Parses a raw request body, reporting every shape problem with its location.
    pub fn from_slice(body: &[u8]) -> Result<Self, Vec<ValidationIssue>> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(vec![ValidationIssue::new(vec!["body".into()], "Field required", "missing")]);
        }

        let value: Value = serde_json::from_slice(body).map_err(|e| {
            vec![ValidationIssue::new(
                vec!["body".into()],
                format!("JSON decode error: {}", e),
                "json_invalid",
            )]
        })?;
        Self::from_value(&value)
    }

    /// Validates an already decoded JSON body.
    pub fn from_value(value: &Value) -> Result<Self, Vec<ValidationIssue>> {
        let Some(object) = value.as_object() else {
            return Err(vec![ValidationIssue::new(
                vec!["body".into()],
                "Input should be a valid dictionary or object to extract fields from",
                "model_attributes_type",
            )]);
        };

        let loc = || vec![LocSegment::from("body"), LocSegment::from("features")];
        let rows = match object.get("features") {
            None => return Err(vec![ValidationIssue::new(loc(), "Field required", "missing")]),
            Some(Value::Array(rows)) => rows,
            Some(_) => return Err(vec![ValidationIssue::new(loc(), "Input should be a valid list", "list_type")]),
        };

        let mut features = Vec::with_capacity(rows.len());
        let mut issues = Vec::new();
        for (index, row) in rows.iter().enumerate() {
            let mut row_loc = loc();
            row_loc.push(index.into());
            match parse_vector(row, row_loc) {
                Ok(vector) => features.push(vector),
                Err(mut row_issues) => issues.append(&mut row_issues),
            }
        }

        if issues.is_empty() {
            Ok(Self { features })
        } else {
            Err(issues)
        }
    }
}

fn parse_vector(row: &Value, loc: Vec<LocSegment>) -> Result<FeatureVector, Vec<ValidationIssue>> {
    let Some(items) = row.as_array() else {
        return Err(vec![ValidationIssue::new(loc, "Input should be a valid list", "list_type")]);
    };

    let mut issues = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if !item.is_number() {
            let mut item_loc = loc.clone();
            item_loc.push(index.into());
            issues.push(ValidationIssue::new(item_loc, "Input should be a valid number", "float_type"));
        }
    }
    if items.len() < FEATURE_COUNT {
        issues.push(ValidationIssue::new(
            loc,
            format!("List should have at least {} items after validation, not {}", FEATURE_COUNT, items.len()),
            "too_short",
        ));
    } else if items.len() > FEATURE_COUNT {
        issues.push(ValidationIssue::new(
            loc,
            format!("List should have at most {} items after validation, not {}", FEATURE_COUNT, items.len()),
            "too_long",
        ));
    }
    if !issues.is_empty() {
        return Err(issues);
    }

    let mut vector = [0.0; FEATURE_COUNT];
    for (slot, item) in vector.iter_mut().zip(items) {
        // Every item was checked to be a number above
        *slot = item.as_f64().unwrap_or_default();
    }
    Ok(vector)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: i64,
    pub species_name: String,
    pub input_features: FeatureVector,
}

impl From<Prediction> for PredictResponse {
    fn from(prediction: Prediction) -> Self {
        Self {
            prediction: prediction.class_id,
            species_name: prediction.species_name.to_string(),
            input_features: prediction.features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub service: String,
    pub description: String,
    pub status: String,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
}

impl EndpointInfo {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
        }
    }
}

/// One step of a `loc` path: an object key or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocSegment {
    Index(usize),
    Field(String),
}

impl From<&str> for LocSegment {
    fn from(field: &str) -> Self {
        LocSegment::Field(field.to_string())
    }
}

impl From<usize> for LocSegment {
    fn from(index: usize) -> Self {
        LocSegment::Index(index)
    }
}

/// One entry of a 422 response's `detail` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub loc: Vec<LocSegment>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationIssue {
    pub fn new(loc: Vec<LocSegment>, msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc,
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}
