//! Shared Kernel
//!
//! Error vocabulary shared by every crate in the workspace:
//! - [`error::kind::ErrorKind`] - classification mapped to HTTP status codes
//! - [`error::app_error::AppError`] - the unified error value, rendered as problem details
//!
//! Only things with the same meaning in every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
