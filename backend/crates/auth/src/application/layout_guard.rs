//! Layout Preload Guard
//!
//! Runs after the request gate has let a page request through. Keeps
//! authenticated users off the anonymous-only pages and tells the
//! rendering layer whether the visitor is authenticated.

use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::domain::outcome::{LayoutData, LayoutOutcome, Redirect};

pub struct LayoutGuard {
    config: Arc<GateConfig>,
}

impl LayoutGuard {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self { config }
    }

    pub fn load(&self, path: &str, marker_present: bool) -> LayoutOutcome {
        if marker_present && self.config.routes.is_anonymous_only(path) {
            return LayoutOutcome::Redirect(Redirect::see_other(self.config.landing_path.as_str()));
        }

        LayoutOutcome::Data(LayoutData {
            authenticated: marker_present,
        })
    }
}
