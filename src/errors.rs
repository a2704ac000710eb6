// src/errors.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtcaeError {
    #[error("bad json: {0}")]
    BadJson(#[from] serde_json::Error),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ResponseError for CtcaeError {
    fn status_code(&self) -> StatusCode {
        match self {
            CtcaeError::BadJson(_) => StatusCode::BAD_REQUEST,
            CtcaeError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let CtcaeError::MethodNotAllowed = self {
            builder.insert_header(("Allow", "POST"));
        }
        builder.json(json!({ "error": self.to_string() }))
    }
}

pub type Result<T> = std::result::Result<T, CtcaeError>;
