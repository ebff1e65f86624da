use axum::{extract::DefaultBodyLimit, routing::any, Router};
use roster::{
    ConstructService, ElasticClient, EngineConfig, IndexClient, RosterError, SearchService,
    SyncService,
};
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers::{
    delete_employee, health, insert_employee, search_employees, update_employee, AppState,
};
use crate::openapi::ApiDoc;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Error, Debug)]
pub enum StartupError {
    #[error("missing elasticsearch connection: {0}")]
    EngineUnavailable(#[source] RosterError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// The three services sharing one index client.
#[derive(Clone)]
pub struct Services {
    pub search: SearchService,
    pub sync: SyncService,
    pub construct: ConstructService,
}

impl Services {
    pub fn new(client: Arc<dyn IndexClient>) -> Self {
        Self {
            search: SearchService::new(client.clone()),
            sync: SyncService::new(client.clone()),
            construct: ConstructService::new(client),
        }
    }

    pub fn app_state(&self) -> Arc<AppState> {
        Arc::new(AppState {
            search: self.search.clone(),
            sync: self.sync.clone(),
        })
    }
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Startup sequence against an already-built client:
/// health check (fatal), services, index mapping (logged only).
pub async fn bootstrap(client: Arc<dyn IndexClient>) -> Result<Services, StartupError> {
    client
        .check_health()
        .await
        .map_err(StartupError::EngineUnavailable)?;
    tracing::info!("Search engine reachable");

    let services = Services::new(client);

    match services.construct.create_index().await {
        Ok(()) => tracing::info!(index = roster::INDEX_NAME, "Index mapping applied"),
        Err(e) => tracing::warn!(error = %e, "Continuing without index mapping"),
    }

    Ok(services)
}

/// Every route accepts any HTTP method. Bodies are not size-limited and
/// query strings never produce a rejection, so every reply is JSON.
pub fn router(state: Arc<AppState>) -> Router {
    let swagger = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    Router::new()
        .route("/search", any(search_employees))
        .route("/insert", any(insert_employee))
        .route("/update", any(update_employee))
        .route("/delete", any(delete_employee))
        .route("/health", any(health))
        .with_state(state)
        .merge(swagger)
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
}

/// Bootstrap against the configured engine, then listen until killed.
pub async fn serve(engine: &EngineConfig, bind_addr: &str) -> Result<(), StartupError> {
    tracing::info!(engine = %engine.base_url, "Connecting to search engine");
    let client: Arc<dyn IndexClient> = Arc::new(ElasticClient::new(engine));
    let services = bootstrap(client).await?;

    let app = router(services.app_state());

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: bind_addr.to_string(),
            source,
        })?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
