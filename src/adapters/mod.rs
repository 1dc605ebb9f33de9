//! Adapters layer
//!
//! Presentation adapters that drive the application layer. The HTTP adapter
//! renders the login and home screens and serves the JSON API.

pub mod http;
