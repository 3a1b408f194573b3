//! Active recall scheduler HTTP server.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use recall_core::scheduler::ReviewSchedule;
use recall_core::web::{router, AppState};
use recall_core::{config::RecallConfig, database, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let config = RecallConfig::from_env().context("loading configuration")?;

    let pool = database::connect(&config.database_url)
        .await
        .with_context(|| format!("connecting to {}", config.database_url))?;
    database::migrate(&pool).await.context("running migrations")?;

    let bind_address = config.bind_address.clone();
    let state = AppState::new(pool, ReviewSchedule::default(), config);
    let app = router(state);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {bind_address}"))?;
    info!(%bind_address, "recall server listening");

    axum::serve(listener, app).await.context("serving")?;
    Ok(())
}
