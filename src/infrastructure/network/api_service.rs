use async_trait::async_trait;
use std::time::Duration;

use crate::domain::auth::ports::{LoginResult, NetworkService};
use crate::domain::auth::value_objects::AuthToken;

/// Production stand-in for the authentication backend
///
/// There is no wire protocol behind this type. Every call waits for the
/// configured latency off the caller's task and then succeeds with a fixed
/// token.
pub struct ApiNetworkService {
  latency: Duration,
  token: String,
}

impl ApiNetworkService {
  pub const DEFAULT_LATENCY: Duration = Duration::from_secs(1);
  pub const DEFAULT_TOKEN: &'static str = "token_123";

  /// Creates a service with the default one second latency and fixed token
  pub fn new() -> Self {
    Self::with_latency(Self::DEFAULT_LATENCY, Self::DEFAULT_TOKEN)
  }

  pub fn with_latency(latency: Duration, token: impl Into<String>) -> Self {
    Self {
      latency,
      token: token.into(),
    }
  }
}

impl Default for ApiNetworkService {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl NetworkService for ApiNetworkService {
  async fn login(&self, email: &str, _password: &str) -> LoginResult {
    tracing::debug!(
      "Simulating backend login for {} ({} ms)",
      email,
      self.latency.as_millis()
    );

    // Simulate network latency
    tokio::time::sleep(self.latency).await;

    Ok(AuthToken::new(self.token.clone()))
  }
}
