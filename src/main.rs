use actix_web::{middleware, App, HttpServer};
use ctcae_local::api::{configure_routes, configure_ui};
use ctcae_local::{banner, browser, config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    let dotenv = dotenvy::dotenv();

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = dotenv {
        log::debug!("No .env file loaded: {}", e);
    }

    let app_config = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let ui_dir = app_config.ui_dir.clone();
    if ui_dir.is_dir() {
        log::info!("Serving UI from {}", ui_dir.display());
    } else {
        log::info!("UI directory {} not found, serving bundled UI", ui_dir.display());
    }

    let server = HttpServer::new(move || {
        let ui_dir = ui_dir.clone();
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
            .configure(move |cfg| configure_ui(cfg, &ui_dir))
    })
    .bind(app_config.bind_addr());

    let server = match server {
        Ok(s) => s,
        Err(e) => {
            log::error!("Failed to bind {}:{}: {}", config::BIND_HOST, app_config.port, e);
            std::process::exit(1);
        }
    };

    let url = app_config.base_url();
    if app_config.open_browser {
        browser::open_after_delay(url.clone());
    }
    log::info!("listening on {}", url);

    server.run().await
}
