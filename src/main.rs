use std::net::SocketAddr;

use hr_central_backend::{
    config::{get_config, init_config},
    store::entity_store::EntityStore,
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store = EntityStore::with_seed();
    info!(
        jobs = store.job_count(),
        candidates = store.candidate_count(),
        "seeded in-memory entity store"
    );

    let state = AppState::new(store);
    let app = hr_central_backend::build_router(state);

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
