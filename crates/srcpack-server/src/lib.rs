//! HTTP service serving a project source tree as a downloadable ZIP.
//!
//! Exposes `GET /download-project`, which builds an in-memory ZIP snapshot
//! of the configured project layout via [`srcpack_core`] and returns it as
//! an attachment, plus a `GET /healthz` liveness probe.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use router::app_router;
pub use state::AppState;
