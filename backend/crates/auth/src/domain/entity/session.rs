//! Session Entity
//!
//! Process-wide view of the auth provider's state. Shares its
//! `authenticated` flag with the layout guard's preload data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User record as supplied by the auth provider
///
/// Only `id` is required; every other field is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl UserRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// Current session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<UserRecord>,
}

impl Session {
    /// Logged-out session: `{ authenticated: false, user: null }`
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: Option<UserRecord>) -> Self {
        Self {
            authenticated: true,
            user,
        }
    }
}

/// Auth state change emitted by the auth provider's client
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthChange {
    pub token: Option<String>,
    pub user: Option<UserRecord>,
}

impl AuthChange {
    pub fn new(token: Option<String>, user: Option<UserRecord>) -> Self {
        Self { token, user }
    }

    /// An empty token counts as logged out
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

impl From<AuthChange> for Session {
    fn from(change: AuthChange) -> Self {
        Self {
            authenticated: change.is_authenticated(),
            user: change.user,
        }
    }
}
