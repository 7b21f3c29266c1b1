mod api;
mod config;
mod database;
mod middleware;
mod models;
mod services;
mod utils;
mod views;

use actix_web::{
    middleware::{Compress, Logger},
    web, App, HttpServer,
};
use dotenv::dotenv;
use std::sync::Arc;

use crate::config::Config;
use crate::database::FamilyStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(std::io::Error::other)?;

    log::info!("🚀 Starting Family List...");
    log::info!("📊 Database: {}", config.mongo_dbname);

    // Store criado uma vez e injetado nos handlers
    let db = database::MongoDB::new(&config)
        .await
        .map_err(std::io::Error::other)?;
    db.prepare().await;

    let store: Arc<dyn FamilyStore> = Arc::new(db);
    let store_data = web::Data::from(store);

    log::info!("🌐 Server starting on {}", config.bind_address());

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(middleware::SecurityHeaders)
            .wrap(Compress::default())
            .wrap(Logger::default())
            .configure(api::configure)
            .default_service(web::to(api::not_found))
    })
    .bind(config.bind_address())?
    .run()
    .await
}
