use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};
use std::net::TcpListener;
use std::sync::Arc;

use super::middleware::RequestIdMiddleware;
use super::routes::{WebRouteDependencies, configure_auth_routes, configure_web_routes};
use super::templates::TemplateEngine;
use crate::application::auth::LoginCoordinator;

/// Builds the HTTP server on an already-bound listener
///
/// The caller drives the returned [`Server`] future. Binding to port 0 and
/// reading the address back from the listener gives tests an ephemeral port.
pub fn run(
  listener: TcpListener,
  templates: TemplateEngine,
  login_coordinator: Arc<LoginCoordinator>,
) -> std::io::Result<Server> {
  let server = HttpServer::new(move || {
    App::new()
      .wrap(Logger::default())
      .wrap(RequestIdMiddleware::new())
      // Configure web UI routes
      .configure(|cfg| {
        configure_web_routes(
          cfg,
          WebRouteDependencies {
            templates: templates.clone(),
            login_coordinator: login_coordinator.clone(),
          },
        )
      })
      // Configure API routes
      .service(
        web::scope("/api/v1/auth")
          .configure(|cfg| configure_auth_routes(cfg, login_coordinator.clone())),
      )
      .route("/health", web::get().to(health_check))
  })
  .listen(listener)?
  .run();

  Ok(server)
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
