// src/api/routes.rs
use actix_files::Files;
use actix_web::web;
use std::path::Path;
use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/evaluate")
            .route(web::post().to(handlers::evaluate))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(web::resource("/health").to(handlers::health_check));
}

/// Serves the UI from `ui_dir`, or the bundled copy if that isn't a
/// directory. Register after [`configure_routes`]; it matches every path.
pub fn configure_ui(cfg: &mut web::ServiceConfig, ui_dir: &Path) {
    if ui_dir.is_dir() {
        cfg.service(Files::new("/", ui_dir).index_file("index.html"));
    } else {
        cfg.route("/{_:.*}", web::get().to(handlers::bundled_ui));
    }
}
