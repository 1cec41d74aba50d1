//! Gate Outcomes
//!
//! Exactly one outcome is produced per evaluation of the request gate or
//! the layout guard.

use serde::{Deserialize, Serialize};

/// 303 See Other
pub const SEE_OTHER: u16 = 303;

/// Redirect instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
    pub status: u16,
}

impl Redirect {
    pub fn see_other(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            status: SEE_OTHER,
        }
    }
}

/// Request gate outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Continue to normal routing
    PassThrough,
    /// Stop here and send the client elsewhere
    Redirect(Redirect),
}

/// Preload data exposed to the rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutData {
    pub authenticated: bool,
}

/// Layout guard outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutOutcome {
    Data(LayoutData),
    Redirect(Redirect),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_see_other() {
        let redirect = Redirect::see_other("/login");
        assert_eq!(redirect.location, "/login");
        assert_eq!(redirect.status, 303);
    }

    #[test]
    fn test_layout_data_shape() {
        let json = serde_json::to_value(LayoutData { authenticated: true }).unwrap();
        assert_eq!(json, serde_json::json!({ "authenticated": true }));
    }
}
