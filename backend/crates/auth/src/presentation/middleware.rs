//! Gate Middleware
//!
//! Axum middleware for the request gate and the layout preload guard.
//! Both read the credential cookie independently; nothing is shared
//! between them within a request.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::application::{LayoutGuard, RequestGate};
use crate::domain::outcome::{LayoutOutcome, Redirect, RequestOutcome};
use crate::domain::value_object::credential_marker::CredentialMarker;

/// Middleware state
#[derive(Clone)]
pub struct GateState {
    pub config: Arc<GateConfig>,
}

impl GateState {
    pub fn new(config: GateConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// Reject unauthenticated requests to protected paths
pub async fn request_gate(
    State(state): State<GateState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let marker = read_marker(req.headers(), &state.config.cookie_name);
    let gate = RequestGate::new(state.config.clone());

    match gate.evaluate(req.uri().path(), marker.is_some()) {
        RequestOutcome::PassThrough => next.run(req).await,
        RequestOutcome::Redirect(redirect) => {
            tracing::debug!(
                path = %req.uri().path(),
                location = %redirect.location,
                "No credential for protected path, redirecting"
            );
            redirect.into_response()
        }
    }
}

/// Keep authenticated users off anonymous-only pages, otherwise attach
/// [`LayoutData`](crate::domain::outcome::LayoutData) for the page handler
pub async fn layout_guard(
    State(state): State<GateState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let marker = read_marker(req.headers(), &state.config.cookie_name);
    let guard = LayoutGuard::new(state.config.clone());

    match guard.load(req.uri().path(), marker.is_some()) {
        LayoutOutcome::Redirect(redirect) => {
            tracing::debug!(
                path = %req.uri().path(),
                location = %redirect.location,
                "Authenticated user on anonymous-only page, redirecting"
            );
            redirect.into_response()
        }
        LayoutOutcome::Data(data) => {
            req.extensions_mut().insert(data);
            next.run(req).await
        }
    }
}

fn read_marker(headers: &HeaderMap, cookie_name: &str) -> Option<CredentialMarker> {
    CredentialMarker::from_cookie(platform::cookie::extract_cookie(headers, cookie_name).as_deref())
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::SEE_OTHER);
        (status, [(header::LOCATION, self.location)]).into_response()
    }
}
