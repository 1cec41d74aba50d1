//! HTTP Handlers

use axum::Json;
use axum::body::Body;
use axum::http::Request;

use crate::domain::outcome::LayoutData;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::PageData;

/// Page fallback
///
/// Stands in for the rendering layer: returns the preload data a template
/// would receive. Must sit behind [`layout_guard`](super::middleware::layout_guard).
pub async fn render_page(req: Request<Body>) -> AuthResult<Json<PageData>> {
    let layout = req
        .extensions()
        .get::<LayoutData>()
        .copied()
        .ok_or(AuthError::LayoutDataMissing)?;

    Ok(Json(PageData {
        path: req.uri().path().to_string(),
        layout,
    }))
}
