//! HTTP transport for the client registry
//!
//! Provides the `/clients` resource handlers and the liveness probe.

pub mod extract;
pub mod handlers;
