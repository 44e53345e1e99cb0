//! Axum integration for the limit-refresh library
//!
//! Exposes the administrative rate-limit refresh endpoint. Routing,
//! authentication, and middleware remain the embedding application's
//! responsibility; mount the router behind whatever protection the
//! deployment requires.

mod error;
mod handlers;
mod router;
mod state;

pub use router::refresh_router;
pub use state::AppState;
