use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use mall_directory::config::Config;
use mall_directory::db::{JsonFileStore, Store};
use mall_directory::handlers::AppState;
use mall_directory::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env()
        .map_err(|msg| std::io::Error::new(std::io::ErrorKind::InvalidInput, msg))?;

    // Create the document up front so a bad DB_PATH fails at startup.
    let store = JsonFileStore::new(config.db_path.clone());
    store
        .load()
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    info!("Using document at {}", store.path().display());

    let state = web::Data::new(AppState::new(Arc::new(store)));

    info!("Starting server at {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
