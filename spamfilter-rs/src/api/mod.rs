//! HTTP API
//!
//! The caller-facing boundary: one classification operation plus a
//! health endpoint.

pub mod handlers;
pub mod server;

pub use handlers::AppState;
pub use server::ApiServer;
