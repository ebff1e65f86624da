//! # Roster
//!
//! Employee records stored in an Elasticsearch-compatible search engine.
//! The engine is the only system of record; this crate models the record,
//! talks to the engine over its REST API and wraps that in small services.
//! The HTTP surface lives in the companion `roster-http` crate.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use roster::{ElasticClient, EngineConfig, SearchService};
//! use std::sync::Arc;
//!
//! # async fn run() -> roster::Result<()> {
//! let config = EngineConfig::new("http://localhost:9200")?;
//! let client = Arc::new(ElasticClient::new(&config));
//!
//! let hits = SearchService::new(client).search_employees("person1").await?;
//! println!("Found {} employees", hits.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing without an engine
//!
//! [`MemoryIndex`] implements [`IndexClient`] in process memory, so the
//! services and HTTP handlers can be exercised with no network.
//!
//! ## Feature flags
//!
//! | Feature | Dependencies | Use case |
//! |---------|-------------|----------|
//! | `axum-support` | axum | [`RosterError`] implements `IntoResponse` |
//! | `openapi` | utoipa | OpenAPI schema for [`Employee`] |

pub mod client;
pub mod config;
pub mod error;
pub mod service;
pub mod types;

pub use client::{ElasticClient, IndexClient, MemoryIndex, INDEX_NAME};
pub use config::EngineConfig;
pub use error::{Result, RosterError};
pub use service::{ConstructService, SearchService, SyncService};
pub use types::*;
