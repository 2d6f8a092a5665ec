//! HTTP server for the Roster Ranking Engine.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_ranking::api::{AppState, create_router};
use roster_ranking::config::{ConfigLoader, GRADING_FILE};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config_dir =
        env::var("ROSTER_RANKING_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = env::var("ROSTER_RANKING_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let config = if Path::new(&config_dir).join(GRADING_FILE).exists() {
        ConfigLoader::load(&config_dir)
            .with_context(|| format!("loading grading configuration from {}", config_dir))?
    } else {
        tracing::warn!(
            config_dir = %config_dir,
            "No grading configuration found, using default policy"
        );
        ConfigLoader::default()
    };

    tracing::info!(
        institution = %config.metadata().institution,
        pass_threshold = %config.policy().pass_threshold,
        borderline_threshold = %config.policy().borderline_threshold,
        "Loaded grading policy"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;

    tracing::info!(addr = %addr, "Roster ranking server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_ranking=info,tower=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
