use std::net::SocketAddr;
use tracing::{info, warn};
use lms::core::controller::{AppState, build_router};
use lms::core::domain::Configuration;
use lms::core::library::LibraryError;
use lms::lending::factory::create_shared_library;
use lms::snapshot::domain::Snapshot;
use lms::snapshot::factory::create_snapshot_store;
use lms::utils::logs::setup_tracing;

type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env("main")?;
    let store = create_snapshot_store(&config);
    let snapshot = store.load().await?;
    let library = create_shared_library(&config, &snapshot)?;
    let app = build_router(AppState::new(&config, library.clone()));

    let addr: SocketAddr = config.bind_addr.parse().map_err(|_| {
        LibraryError::invalid_field("LMS_BIND_ADDR", format!("{} is not a socket address", config.bind_addr).as_str())
    })?;
    info!(%addr, store = %config.store, loan_days = config.book_loan_days, "serving");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    let snapshot = Snapshot::capture(library.lock().await.catalog());
    store.save(&snapshot).await?;
    info!(books = snapshot.books.len(), members = snapshot.members.len(), "snapshot saved");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal {:?}", err);
    }
    info!("shutting down");
}
