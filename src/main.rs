use std::net::TcpListener;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use testable_login::{
  adapters::http::{TemplateEngine, run},
  application::auth::LoginCoordinator,
  infrastructure::{config::Config, network::NetworkServiceFactory},
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "testable_login=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting testable-login");

  // Load configuration
  let config = Config::load().map_err(|e| {
    tracing::error!("Failed to load configuration: {}", e);
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
  })?;
  tracing::info!("Configuration loaded successfully");

  // Initialize network service and coordinator
  let network_service = NetworkServiceFactory::create(&config.network);
  let login_coordinator = Arc::new(LoginCoordinator::new(network_service));

  // Initialize template engine
  let templates = TemplateEngine::new().map_err(|e| {
    tracing::error!("Failed to initialize template engine: {}", e);
    std::io::Error::other(e)
  })?;
  tracing::info!("Template engine initialized");

  let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))?;
  tracing::info!("Starting HTTP server on {}", listener.local_addr()?);

  run(listener, templates, login_coordinator)?.await
}
