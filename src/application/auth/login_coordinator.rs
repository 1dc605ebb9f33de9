use std::sync::Arc;

use crate::domain::auth::ports::{LoginResult, NetworkService};
use crate::domain::auth::value_objects::Credentials;

/// Validates login input and delegates the attempt to a [`NetworkService`]
///
/// The coordinator only reports whether an attempt succeeded. Error detail
/// from the network layer is logged and then dropped, and navigation is left
/// to whoever called it.
pub struct LoginCoordinator {
  service: Arc<dyn NetworkService>,
}

impl LoginCoordinator {
  /// Creates a new instance of LoginCoordinator
  pub fn new(service: Arc<dyn NetworkService>) -> Self {
    Self { service }
  }

  /// Form-level check that needs no network access
  ///
  /// Returns `true` iff `email` contains `@` and `password` is at least six
  /// characters long.
  pub fn validate(&self, email: &str, password: &str) -> bool {
    Credentials::new(email, password).is_well_formed()
  }

  /// Runs one login attempt and resolves to its outcome
  ///
  /// The attempt is always delegated, even when [`validate`](Self::validate)
  /// would reject the input. There is no timeout: if the network service
  /// never resolves, neither does this future.
  pub async fn login(&self, email: &str, password: &str) -> bool {
    Self::attempt(self.service.as_ref(), Credentials::new(email, password)).await
  }

  /// Callback form of [`login`](Self::login)
  ///
  /// The attempt runs as a task on the current tokio runtime and
  /// `completion` fires once it resolves, possibly on another worker thread.
  /// The task holds the network service but not the coordinator.
  ///
  /// # Panics
  /// Panics if called outside a tokio runtime.
  pub fn login_with<F>(&self, email: &str, password: &str, completion: F)
  where
    F: FnOnce(bool) + Send + 'static,
  {
    let service = Arc::clone(&self.service);
    let credentials = Credentials::new(email, password);

    tokio::spawn(async move {
      let success = Self::attempt(service.as_ref(), credentials).await;
      completion(success);
    });
  }

  async fn attempt(service: &dyn NetworkService, credentials: Credentials) -> bool {
    if !credentials.is_well_formed() {
      tracing::debug!(
        "Credentials for {} fail local validation, delegating anyway",
        credentials.email()
      );
    }

    let result = service
      .login(credentials.email(), credentials.password())
      .await;

    Self::outcome(credentials.email(), result)
  }

  fn outcome(email: &str, result: LoginResult) -> bool {
    match result {
      Ok(_) => {
        tracing::info!("Login successful for {}", email);
        true
      }
      Err(e) => {
        tracing::warn!("Login failed for {}: {}", email, e);
        false
      }
    }
  }
}
