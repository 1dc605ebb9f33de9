//! Mock network service for development/testing
//!
//! Resolves on the first poll without touching the runtime, so outcomes
//! are deterministic. Useful for:
//! - Unit tests of the login coordinator
//! - Running the UI against a backend that always accepts or always rejects
//!
//! To enable it for the server, set `network.mode = "mock"` in the config.
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::auth::errors::NetworkError;
use crate::domain::auth::ports::{LoginResult, NetworkService};
use crate::domain::auth::value_objects::AuthToken;

pub struct MockNetworkService {
  outcome: Result<String, NetworkError>,
  calls: AtomicUsize,
}

impl MockNetworkService {
  pub const DEFAULT_TOKEN: &'static str = "mock_token";

  /// Mock that always succeeds with [`Self::DEFAULT_TOKEN`]
  pub fn new() -> Self {
    Self::succeeding(Self::DEFAULT_TOKEN)
  }

  pub fn succeeding(token: impl Into<String>) -> Self {
    Self {
      outcome: Ok(token.into()),
      calls: AtomicUsize::new(0),
    }
  }

  pub fn failing(error: NetworkError) -> Self {
    Self {
      outcome: Err(error),
      calls: AtomicUsize::new(0),
    }
  }

  /// Number of `login` calls received so far
  pub fn calls(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

impl Default for MockNetworkService {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl NetworkService for MockNetworkService {
  async fn login(&self, _email: &str, _password: &str) -> LoginResult {
    self.calls.fetch_add(1, Ordering::SeqCst);

    self.outcome.clone().map(AuthToken::new)
  }
}
