use std::any::Any;
use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Extension};
use axum::response::Response;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use intel_exchange::access::{AccessResolver, MemoryAccessResolver};
use intel_exchange::bundle::{SchemaValidator, StructuralValidator};
use intel_exchange::config::ServerConfig;
use intel_exchange::errors::{panic_to_internal_error, panic_to_not_found};
use intel_exchange::ingest::handlers::handle_submit_objects;
use intel_exchange::objects::handlers::{handle_get_object, handle_get_objects};
use intel_exchange::objects::{MemoryObjectStore, ObjectStore};
use intel_exchange::status::handlers::handle_get_status;
use intel_exchange::status::{MemoryStatusLedger, StatusStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config = match ServerConfig::from_args(&args[1..]) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            eprintln!(
                "Usage: {} --bind <addr:port> [--max-content-length <bytes>] \
                 [--legacy-not-found] [--grant <user>:<collection>:<modes>]",
                args[0]
            );
            eprintln!(
                "Example: {} --bind 127.0.0.1:1234 --grant alice@example.com:col-1:rw",
                args[0]
            );
            std::process::exit(1);
        }
    };

    tracing::info!("Starting exchange server on {}", config.bind);

    // 1. Collaborators:
    let resolver = MemoryAccessResolver::new();
    for grant in &config.grants {
        resolver.grant(
            &grant.user,
            &grant.collection_id,
            grant.can_read,
            grant.can_write,
        );
    }

    let access: Arc<dyn AccessResolver> = Arc::new(resolver);
    let validator: Arc<dyn SchemaValidator> = Arc::new(StructuralValidator);
    let store: Arc<dyn ObjectStore> = Arc::new(MemoryObjectStore::new());
    let ledger: Arc<dyn StatusStore> = Arc::new(MemoryStatusLedger::new());
    let config = Arc::new(config);

    // 2. Panic recovery mapping (500 by default, 404 for legacy clients):
    let recovery: fn(Box<dyn Any + Send + 'static>) -> Response = if config.legacy_not_found {
        panic_to_not_found
    } else {
        panic_to_internal_error
    };

    // 3. HTTP Router:
    let app = Router::new()
        .route(
            "/collections/:collection_id/objects",
            post(handle_submit_objects).get(handle_get_objects),
        )
        .route(
            "/collections/:collection_id/objects/:object_id",
            get(handle_get_object),
        )
        .route("/status/:status_id", get(handle_get_status))
        .layer(Extension(config.clone()))
        .layer(Extension(access))
        .layer(Extension(validator))
        .layer(Extension(store))
        .layer(Extension(ledger))
        // Leave headroom so the handler reports 413 with the protocol body
        .layer(DefaultBodyLimit::max(config.max_content_length as usize + 1))
        .layer(CatchPanicLayer::custom(recovery))
        .layer(TraceLayer::new_for_http());

    // 4. Start HTTP server:
    tracing::info!("Exchange server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
