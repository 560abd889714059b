use actix_web::{web, App, HttpServer};
use backend::config::AppConfig;
use backend::state::AppState;
use backend::{db, pages, services};
use env_logger::Env;
use log::info;
use std::fs;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = AppConfig::from_env();
    fs::create_dir_all(&config.upload_dir)?;
    db::init(&config.database_path).map_err(|e| std::io::Error::other(e.to_string()))?;

    let url = format!("http://{}:{}", config.host, config.port);
    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    let bind = (config.host.clone(), config.port);
    let state = AppState::new(config);

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .service(services::tasks::configure_routes())
            .service(services::books::configure_routes())
            .default_service(web::route().to(pages::serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}
