//! Gate Router

use axum::{Router, middleware};

use crate::application::config::GateConfig;
use crate::presentation::handlers;
use crate::presentation::middleware::{GateState, layout_guard, request_gate};

/// Wrap a page router in both gates. The request gate runs first.
pub fn with_auth_gate(pages: Router, config: GateConfig) -> Router {
    let state = GateState::new(config);

    // Last layer added runs first
    pages
        .layer(middleware::from_fn_with_state(state.clone(), layout_guard))
        .layer(middleware::from_fn_with_state(state, request_gate))
}

/// Every path served by the page fallback, behind both gates
pub fn gated_pages_router(config: GateConfig) -> Router {
    with_auth_gate(Router::new().fallback(handlers::render_page), config)
}
