//! Value Object Module

pub mod credential_marker;
pub mod route_table;
