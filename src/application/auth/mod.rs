//! Authentication use cases
//!
//! This module contains the login coordinator, which sits between the
//! presentation layer and the network service.

mod login_coordinator;

pub use login_coordinator::LoginCoordinator;
