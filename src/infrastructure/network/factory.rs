use super::{ApiNetworkService, MockNetworkService};
use crate::domain::auth::errors::NetworkError;
use crate::domain::auth::ports::NetworkService;
use crate::infrastructure::config::{NetworkConfig, NetworkMode};
use std::sync::Arc;

pub struct NetworkServiceFactory;

impl NetworkServiceFactory {
  /// Create the network service selected by `config.mode`
  pub fn create(config: &NetworkConfig) -> Arc<dyn NetworkService> {
    match config.mode {
      NetworkMode::Api => {
        tracing::debug!(
          "Using ApiNetworkService with {} ms latency",
          config.latency_ms
        );
        Arc::new(ApiNetworkService::with_latency(
          config.latency(),
          config.token.clone(),
        ))
      }

      NetworkMode::Mock if config.mock_succeeds => {
        tracing::info!("Using MockNetworkService (always succeeds)");
        Arc::new(MockNetworkService::new())
      }

      NetworkMode::Mock => {
        tracing::info!("Using MockNetworkService (always rejects)");
        Arc::new(MockNetworkService::failing(NetworkError::Rejected))
      }
    }
  }
}
