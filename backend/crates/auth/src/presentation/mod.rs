//! Presentation Layer
//!
//! Axum middleware, page handler, DTOs and router assembly.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use middleware::{GateState, layout_guard, request_gate};
pub use router::{gated_pages_router, with_auth_gate};
