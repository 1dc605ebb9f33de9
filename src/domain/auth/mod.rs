pub mod errors;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use errors::NetworkError;
pub use ports::{LoginResult, NetworkService};
pub use value_objects::{AuthToken, Credentials};
