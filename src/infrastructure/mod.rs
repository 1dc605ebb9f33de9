//! Infrastructure layer
//!
//! Concrete implementations of domain ports and process-level concerns
//! such as configuration.

pub mod config;
pub mod network;
