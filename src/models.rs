// src/models.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /api/evaluate`.
#[derive(Deserialize, Debug, Clone)]
pub struct EvaluationRequest {
    /// Raw lab report text, one result per line.
    #[serde(default)]
    pub text: String,
}

/// One lab result pulled out of a report line.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LabItem {
    pub code: String,
    pub value: f64,
    /// Empty when no grading table exists for `code`.
    pub grade: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct EvaluationResponse {
    pub items: Vec<LabItem>,
}
