// src/api/handlers/evaluate.rs
use actix_web::{web, HttpResponse};
use crate::errors::{CtcaeError, Result};
use crate::grader;
use crate::models::{EvaluationRequest, EvaluationResponse};

/// POST /api/evaluate - Parse and grade a pasted lab report
///
/// The body is decoded by hand so a missing or odd content type is accepted.
pub async fn evaluate(body: web::Bytes) -> Result<HttpResponse> {
    let req: EvaluationRequest = serde_json::from_slice(&body).map_err(|e| {
        log::debug!("Rejecting evaluate request: {}", e);
        CtcaeError::BadJson(e)
    })?;

    let items = grader::evaluate(&req.text);
    log::debug!("Evaluated {} lab item(s)", items.len());

    Ok(HttpResponse::Ok().json(EvaluationResponse { items }))
}

/// Any non-POST request to /api/evaluate
pub async fn method_not_allowed() -> Result<HttpResponse> {
    Err(CtcaeError::MethodNotAllowed)
}
