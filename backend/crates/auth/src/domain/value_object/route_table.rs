//! Route Classification Table
//!
//! Static partition of request paths into public, anonymous-only (a subset
//! of public) and protected (everything else). Fixed at startup.

use std::collections::BTreeSet;

use crate::error::{AuthError, AuthResult};

/// Paths reachable without a credential marker
pub const DEFAULT_PUBLIC_ROUTES: [&str; 6] = ["/login", "/signup", "/", "/about-us", "/contact", "/faq"];

/// Public paths an authenticated user is sent away from
pub const DEFAULT_ANONYMOUS_ONLY_ROUTES: [&str; 2] = ["/login", "/signup"];

/// Route classification table
///
/// Lookups are exact byte comparisons. `/about-us/team`, `/about-us/` and
/// `/About-Us` are all protected even though `/about-us` is public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    public: BTreeSet<String>,
    anonymous_only: BTreeSet<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            public: DEFAULT_PUBLIC_ROUTES.iter().map(|r| r.to_string()).collect(),
            anonymous_only: DEFAULT_ANONYMOUS_ONLY_ROUTES
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

impl RouteTable {
    /// Build a table, rejecting relative paths and anonymous-only routes
    /// missing from the public list.
    pub fn new<P, A>(public: P, anonymous_only: A) -> AuthResult<Self>
    where
        P: IntoIterator,
        P::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        let public: BTreeSet<String> = public.into_iter().map(Into::into).collect();
        let anonymous_only: BTreeSet<String> = anonymous_only.into_iter().map(Into::into).collect();

        if let Some(route) = public
            .iter()
            .chain(anonymous_only.iter())
            .find(|route| !route.starts_with('/'))
        {
            return Err(AuthError::InvalidRoute(route.clone()));
        }

        if let Some(route) = anonymous_only.difference(&public).next() {
            return Err(AuthError::AnonymousOnlyNotPublic(route.clone()));
        }

        Ok(Self {
            public,
            anonymous_only,
        })
    }

    #[inline]
    pub fn is_public(&self, path: &str) -> bool {
        self.public.contains(path)
    }

    #[inline]
    pub fn is_protected(&self, path: &str) -> bool {
        !self.is_public(path)
    }

    #[inline]
    pub fn is_anonymous_only(&self, path: &str) -> bool {
        self.anonymous_only.contains(path)
    }

    pub fn public_routes(&self) -> impl Iterator<Item = &str> {
        self.public.iter().map(String::as_str)
    }

    pub fn anonymous_only_routes(&self) -> impl Iterator<Item = &str> {
        self.anonymous_only.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_classification() {
        let table = RouteTable::default();

        for path in ["/login", "/signup"] {
            assert!(table.is_public(path), "{path}");
            assert!(table.is_anonymous_only(path), "{path}");
        }
        for path in ["/", "/about-us", "/contact", "/faq"] {
            assert!(table.is_public(path), "{path}");
            assert!(!table.is_anonymous_only(path), "{path}");
        }
        assert!(table.is_protected("/homepage"));
        assert!(table.is_protected("/dashboard"));
    }

    #[test]
    fn test_exact_match_only() {
        let table = RouteTable::default();

        assert!(table.is_protected("/about-us/team"));
        assert!(table.is_protected("/about-us/"));
        assert!(table.is_protected("/About-Us"));
        assert!(table.is_protected("/login/"));
        assert!(table.is_protected(""));
        assert!(!table.is_anonymous_only("/login/reset"));
    }

    #[test]
    fn test_custom_table() {
        let table = RouteTable::new(["/", "/enter", "/pricing"], ["/enter"]).unwrap();

        assert!(table.is_public("/pricing"));
        assert!(table.is_anonymous_only("/enter"));
        assert!(table.is_protected("/login"));
        assert_eq!(table.public_routes().collect::<Vec<_>>(), vec!["/", "/enter", "/pricing"]);
    }

    #[test]
    fn test_anonymous_only_must_be_public() {
        let err = RouteTable::new(["/", "/login"], ["/login", "/signup"]).unwrap_err();
        assert!(matches!(err, AuthError::AnonymousOnlyNotPublic(route) if route == "/signup"));
    }

    #[test]
    fn test_relative_route_rejected() {
        let err = RouteTable::new(["/", "faq"], Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, AuthError::InvalidRoute(route) if route == "faq"));
    }

    #[test]
    fn test_empty_table_protects_everything() {
        let table = RouteTable::new(Vec::<String>::new(), Vec::<String>::new()).unwrap();
        assert!(table.is_protected("/"));
    }
}
