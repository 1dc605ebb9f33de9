//! Application layer
//!
//! This layer contains the use cases that orchestrate domain ports to
//! implement application-specific workflows.

pub mod auth;
