// src/api/handlers/health.rs
use actix_web::{HttpResponse, Result};
use serde_json::json;

pub const SERVICE_NAME: &str = "ctcae-local-api";
pub const API_VERSION: &str = "1.0";

pub async fn health_check() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "ok": true,
        "name": SERVICE_NAME,
        "version": API_VERSION
    })))
}
