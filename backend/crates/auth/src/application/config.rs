//! Application Configuration
//!
//! Configuration for the gate. Read once at startup.

use crate::domain::value_object::route_table::{
    DEFAULT_ANONYMOUS_ONLY_ROUTES, DEFAULT_PUBLIC_ROUTES, RouteTable,
};
use crate::error::{AuthError, AuthResult};

pub const ENV_COOKIE_NAME: &str = "AUTH_COOKIE_NAME";
pub const ENV_PUBLIC_ROUTES: &str = "PUBLIC_ROUTES";
pub const ENV_ANONYMOUS_ONLY_ROUTES: &str = "ANONYMOUS_ONLY_ROUTES";
pub const ENV_LOGIN_PATH: &str = "LOGIN_PATH";
pub const ENV_LANDING_PATH: &str = "LANDING_PATH";

/// Gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Cookie carrying the credential marker
    pub cookie_name: String,
    /// Public / anonymous-only classification
    pub routes: RouteTable,
    /// Where unauthenticated requests to protected paths go
    pub login_path: String,
    /// Where authenticated requests to anonymous-only paths go
    pub landing_path: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            cookie_name: "pb_auth".to_string(),
            routes: RouteTable::default(),
            login_path: "/login".to_string(),
            landing_path: "/homepage".to_string(),
        }
    }
}

impl GateConfig {
    /// Build a config, rejecting combinations that would redirect in a loop.
    pub fn new(
        cookie_name: impl Into<String>,
        routes: RouteTable,
        login_path: impl Into<String>,
        landing_path: impl Into<String>,
    ) -> AuthResult<Self> {
        let config = Self {
            cookie_name: cookie_name.into(),
            routes,
            login_path: login_path.into(),
            landing_path: landing_path.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from process environment
    pub fn from_env() -> AuthResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; unset keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> AuthResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let public = lookup(ENV_PUBLIC_ROUTES)
            .map(|raw| parse_route_list(&raw))
            .unwrap_or_else(|| DEFAULT_PUBLIC_ROUTES.iter().map(|r| r.to_string()).collect());
        let anonymous_only = lookup(ENV_ANONYMOUS_ONLY_ROUTES)
            .map(|raw| parse_route_list(&raw))
            .unwrap_or_else(|| {
                DEFAULT_ANONYMOUS_ONLY_ROUTES
                    .iter()
                    .map(|r| r.to_string())
                    .collect()
            });

        Self::new(
            lookup(ENV_COOKIE_NAME)
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.cookie_name),
            RouteTable::new(public, anonymous_only)?,
            lookup(ENV_LOGIN_PATH)
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.login_path),
            lookup(ENV_LANDING_PATH)
                .map(|v| v.trim().to_string())
                .unwrap_or(defaults.landing_path),
        )
    }

    pub fn validate(&self) -> AuthResult<()> {
        if self.cookie_name.is_empty() {
            return Err(AuthError::EmptyCookieName);
        }
        if !self.login_path.starts_with('/') {
            return Err(AuthError::InvalidRoute(self.login_path.clone()));
        }
        if !self.landing_path.starts_with('/') {
            return Err(AuthError::InvalidRoute(self.landing_path.clone()));
        }
        if self.routes.is_protected(&self.login_path) {
            return Err(AuthError::LoginPathProtected(self.login_path.clone()));
        }
        if self.routes.is_anonymous_only(&self.landing_path) {
            return Err(AuthError::LandingPathAnonymousOnly(
                self.landing_path.clone(),
            ));
        }
        Ok(())
    }
}

/// Comma-separated list; blanks are skipped
fn parse_route_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|route| !route.is_empty())
        .map(str::to_string)
        .collect()
}
