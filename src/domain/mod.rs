//! Domain objects for the client registry
//!
//! Provides the client record and the validation rules applied to path identifiers.

pub mod client;
