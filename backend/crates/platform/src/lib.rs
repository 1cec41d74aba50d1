//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie header parsing
//! - Persistent key-value storage capability

pub mod cookie;
pub mod storage;
