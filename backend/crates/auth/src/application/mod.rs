//! Application Layer
//!
//! Gate decisions, configuration and the session store.

pub mod config;
pub mod layout_guard;
pub mod request_gate;
pub mod session_store;

// Re-exports
pub use config::GateConfig;
pub use layout_guard::LayoutGuard;
pub use request_gate::RequestGate;
pub use session_store::SessionStore;
