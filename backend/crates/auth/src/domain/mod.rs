//! Domain Layer
//!
//! Contains entities, value objects, and gate outcomes.

pub mod entity;
pub mod outcome;
pub mod value_object;

// Re-exports
pub use entity::session::{AuthChange, Session, UserRecord};
pub use outcome::{LayoutData, LayoutOutcome, Redirect, RequestOutcome};
pub use value_object::{credential_marker::CredentialMarker, route_table::RouteTable};
