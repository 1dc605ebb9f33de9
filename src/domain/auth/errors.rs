use thiserror::Error;

/// Errors a [`NetworkService`](super::ports::NetworkService) may report
///
/// The login coordinator collapses every variant to a failed outcome, so
/// the detail only ever reaches the logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
  #[error("Credentials rejected by the authentication backend")]
  Rejected,

  #[error("Authentication backend unavailable: {0}")]
  Unavailable(String),
}
