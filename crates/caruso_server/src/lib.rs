//! HTTP surface for the Caruso blog-to-podcast service.
//!
//! Exposes the pipeline and artifact store as a small axum application:
//!
//! - `POST /generate-podcast` — run the full pipeline for a blog URL
//! - `GET /audio/{filename}` — serve a generated MP3
//! - `GET /recent-podcasts` — list the current ledger
//! - `GET /health` — report whether collaborator credentials are present
//! - `GET /` — service banner
//!
//! Request failures map to status codes the way the service has always
//! behaved: validation and extraction problems are the caller's fault
//! (`400`), a missing audio file is `404`, and everything downstream is a
//! `500`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod response;
mod routes;

pub use config::ServerConfig;
pub use response::{ErrorResponse, HealthResponse, PodcastResponse, ServiceInfo};
pub use routes::{create_router, AppState};
