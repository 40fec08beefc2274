use actix_web::HttpServer;
use anyhow::Context;
use env_logger::fmt::TimestampPrecision;
use log::info;

use fl_api::app::create_app;
use fl_api::routes::demo::demo_error_config;
use fl_shared::{AppConfig, Environment, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, environment specific file first
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::try_from_env().context("Invalid configuration")?;

    init_logger(&config.logging);

    info!("Starting Faultline API Server ({})", config.environment);

    let fault_handler = demo_error_config(config.handling.clone())
        .context("Failed to register error catalogs")?
        .into_handler();

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || create_app(fault_handler.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}

fn init_logger(logging: &LoggingConfig) {
    let timestamp = if logging.timestamp {
        Some(TimestampPrecision::Seconds)
    } else {
        None
    };

    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or(logging.level.as_str()))
        .format_timestamp(timestamp)
        .format_module_path(logging.module_path)
        .init();
}
