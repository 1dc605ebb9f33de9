pub mod dtos;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod templates;

// Re-export commonly used types
pub use dtos::{ErrorResponse, LoginRequest, LoginResponse, ValidateResponse};
pub use errors::ApiError;
pub use handlers::auth::{login_handler, validate_handler};
pub use middleware::{RequestId, RequestIdMiddleware};
pub use routes::{WebRouteDependencies, configure_auth_routes, configure_web_routes};
pub use server::run;
pub use templates::TemplateEngine;
