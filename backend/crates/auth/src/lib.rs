//! Auth Gate Module
//!
//! Layered structure:
//! - `domain/` - Route table, credential marker, outcomes, session shape
//! - `application/` - Request gate, layout guard, config, session store
//! - `presentation/` - Axum middleware, page handler, router
//!
//! ## Gating Model
//! - A request carrying the credential cookie is treated as authenticated.
//!   The cookie is never parsed or verified here; the auth provider owns it.
//! - Request gate: protected path + no cookie => 303 to the login page.
//! - Layout guard: anonymous-only path + cookie => 303 to the landing page,
//!   otherwise `{ authenticated }` is exposed to the page.
//! - Both decisions are pure functions of (path, cookie present).

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GateConfig;
pub use application::session_store::SessionStore;
pub use error::{AuthError, AuthResult};
pub use presentation::router::{gated_pages_router, with_auth_gate};
