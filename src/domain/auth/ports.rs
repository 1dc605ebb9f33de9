use async_trait::async_trait;

use super::errors::NetworkError;
use super::value_objects::AuthToken;

/// Outcome of a single network login call
pub type LoginResult = Result<AuthToken, NetworkError>;

/// Service trait for the remote login call
///
/// Implementations accept raw strings and resolve exactly once per call.
/// The returned future may be polled to completion on any runtime worker.
#[async_trait]
pub trait NetworkService: Send + Sync {
  /// Exchanges an email/password pair for a token
  async fn login(&self, email: &str, password: &str) -> LoginResult;
}
