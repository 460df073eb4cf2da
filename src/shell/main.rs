use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use motorcycles::shell::config::AppConfig;
use motorcycles::shell::http::GRAPHQL_PATH;
use motorcycles::shell::startup::build_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env()?;

    let app = match build_app(&config) {
        Ok(app) => app,
        Err(error) => {
            tracing::error!(error = ?anyhow::Error::from(error), "refusing to start");
            anyhow::bail!("startup failed");
        }
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    tracing::info!("GraphQL endpoint: http://{}{}", config.bind_addr, GRAPHQL_PATH);
    axum::serve(listener, app).await?;
    Ok(())
}
