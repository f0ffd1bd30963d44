use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use stage_notes::modules::entries::store::EntryStore;
use stage_notes::modules::entries::store::in_memory::InMemoryEntryStore;
use stage_notes::modules::entries::store::sqlite::SqliteEntryStore;
use stage_notes::shared::auth::HeaderIdentity;
use stage_notes::shell::config::Config;
use stage_notes::shell::http::router;
use stage_notes::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let store: Arc<dyn EntryStore> = match &config.database {
        Some(path) => {
            tracing::info!(path = %path.display(), "using SQLite entry store");
            Arc::new(SqliteEntryStore::open(path)?)
        }
        None => {
            tracing::info!("using in-memory entry store");
            Arc::new(InMemoryEntryStore::new())
        }
    };

    let state = AppState::new(Arc::new(HeaderIdentity), store);

    // The notebook client is a browser-origin caller.
    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.bind_addr().parse()?;
    tracing::info!("entries API listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
