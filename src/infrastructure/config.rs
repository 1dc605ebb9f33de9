use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::time::Duration;

// Default network functions
fn default_latency_ms() -> u64 {
  1000
}

fn default_token() -> String {
  "token_123".to_string()
}

fn default_mock_succeeds() -> bool {
  true
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  #[serde(default)]
  pub network: NetworkConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Which [`NetworkService`](crate::domain::auth::NetworkService) backs the login flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
  /// Delayed stand-in for the real backend
  #[default]
  Api,
  /// Immediate test double
  Mock,
}

/// Network service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
  #[serde(default)]
  pub mode: NetworkMode,
  /// Simulated backend latency (api mode)
  #[serde(default = "default_latency_ms")]
  pub latency_ms: u64,
  /// Token returned on success (api mode)
  #[serde(default = "default_token")]
  pub token: String,
  /// Whether the test double accepts every login (mock mode)
  #[serde(default = "default_mock_succeeds")]
  pub mock_succeeds: bool,
}

impl NetworkConfig {
  pub fn latency(&self) -> Duration {
    Duration::from_millis(self.latency_ms)
  }
}

impl Default for NetworkConfig {
  fn default() -> Self {
    Self {
      mode: NetworkMode::default(),
      latency_ms: default_latency_ms(),
      token: default_token(),
      mock_succeeds: default_mock_succeeds(),
    }
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists, RUN_MODE defaults to `development`)
  /// 4. Environment variables with TESTABLE_LOGIN_ prefix
  ///
  /// # Environment Variables
  ///
  /// Environment variables are separated by double underscores:
  /// - `TESTABLE_LOGIN_SERVER__HOST=0.0.0.0`
  /// - `TESTABLE_LOGIN_SERVER__PORT=8080`
  /// - `TESTABLE_LOGIN_NETWORK__MODE=mock`
  /// - `TESTABLE_LOGIN_NETWORK__LATENCY_MS=250`
  /// - `TESTABLE_LOGIN_NETWORK__MOCK_SUCCEEDS=false`
  ///
  /// # Errors
  ///
  /// Returns a `ConfigError` if config/default.toml is missing, a file is
  /// not valid TOML, or a value has the wrong type.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      // TESTABLE_LOGIN_SERVER__PORT=8080
      .add_source(
        Environment::with_prefix("TESTABLE_LOGIN")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}
