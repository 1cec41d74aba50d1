//! DTOs

use serde::Serialize;

use crate::domain::outcome::LayoutData;

/// Preload data handed to the rendering layer for one page
#[derive(Debug, Clone, Serialize)]
pub struct PageData {
    pub path: String,
    pub layout: LayoutData,
}
