//! Binary serving `GET /weather`.

use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::{Config, WeatherProvider, provider_from_config};
use weather_proxy::AppState;

#[derive(Debug, Parser)]
#[command(name = "weather-proxy", version, about = "Weather proxy server")]
struct Args {
    /// Address to listen on; overrides `[server].bind` from the config file.
    #[arg(long)]
    bind: Option<String>,

    /// Path to a config file instead of the platform default.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_proxy=info,weather_core=info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());

    let provider: Arc<dyn WeatherProvider> =
        Arc::from(provider_from_config(config.http_client()?, &config));
    let state = web::Data::new(AppState::new(provider));

    tracing::info!("Starting weather proxy on {}", bind);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(weather_proxy::configure)
    })
    .bind(bind.as_str())
    .with_context(|| format!("Failed to bind {bind}"))?
    .run()
    .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
