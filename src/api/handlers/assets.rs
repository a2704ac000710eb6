// src/api/handlers/assets.rs
use actix_web::{HttpRequest, HttpResponse, Responder};
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// UI compiled into the binary, used when no UI directory exists on disk.
#[derive(RustEmbed)]
#[folder = "ui/"]
pub struct BundledUi;

pub async fn bundled_ui(req: HttpRequest) -> impl Responder {
    let path = match req.path().trim_start_matches('/') {
        "" => "index.html",
        p => p,
    };

    match BundledUi::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            HttpResponse::Ok().content_type(mime.as_ref()).body(Cow::into_owned(content.data))
        }
        None => HttpResponse::NotFound().body("404 Not Found"),
    }
}
