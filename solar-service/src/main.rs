use anyhow::Result;
use solar_service::{
    app_router,
    config::AppConfig,
    observability, AppState,
};
use sqlx::postgres::PgPoolOptions;

fn main() -> Result<()> {
    // Resolve the local offset while the process is still single-threaded;
    // the time crate refuses the TZ lookup once worker threads exist. The
    // measurement reader's "start of today" depends on it.
    solar_client::db::init_local_offset();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run())
}

async fn run() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::from_env()?;

    // Start metrics listener if configured
    if let Some(metrics_addr) = &cfg.metrics_bind_addr {
        observability::init_metrics(metrics_addr)?;
    }

    // Lazy pool: the service comes up even while the database is unreachable,
    // and /db-health reports the degraded state.
    let pool = PgPoolOptions::new()
        .max_connections(cfg.database.max_connections)
        .connect_lazy_with(cfg.database.connect_options());

    let app = app_router(AppState { pool });

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "solar service listening");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
