use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use dotenv::dotenv;
use env_logger::Env;

mod config;
mod db;
mod error;
mod handlers;
mod models;

use config::Config;
use db::store::{HotelStore, PgHotelStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger and environment
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().context("Invalid configuration")?;

    log::info!("Connecting to database...");
    let pool = db::get_db_pool(&config)
        .await
        .context("Failed to create pool")?;

    if config.run_migrations {
        log::info!("Running migrations...");
        db::run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    log::info!("Backend rodando em http://{}:{}", config.host, config.port);

    let store: Arc<dyn HotelStore> = Arc::new(PgHotelStore::new(pool));
    let store_data = web::Data::from(store);

    HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(middleware::Logger::default())
            .wrap(handlers::cors_headers())
            .configure(handlers::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
