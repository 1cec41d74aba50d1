//! Request Gate
//!
//! Runs on every request before any page logic. Sends unauthenticated
//! requests for protected paths to the login page.

use std::sync::Arc;

use crate::application::config::GateConfig;
use crate::domain::outcome::{Redirect, RequestOutcome};

pub struct RequestGate {
    config: Arc<GateConfig>,
}

impl RequestGate {
    pub fn new(config: Arc<GateConfig>) -> Self {
        Self { config }
    }

    /// Decide the outcome from the path and marker presence alone.
    ///
    /// Pure: no I/O, no state, same inputs give the same outcome.
    pub fn evaluate(&self, path: &str, marker_present: bool) -> RequestOutcome {
        if self.config.routes.is_public(path) || marker_present {
            RequestOutcome::PassThrough
        } else {
            RequestOutcome::Redirect(Redirect::see_other(self.config.login_path.as_str()))
        }
    }
}
