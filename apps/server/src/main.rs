use atlasboard_server::api::app_router;
use atlasboard_server::{build_state, init_tracing, scheduler, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();
    let state = build_state();

    // Start the hourly cache purge in the background
    scheduler::start_cache_purge_scheduler(state.clone());

    let router = app_router(state);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
