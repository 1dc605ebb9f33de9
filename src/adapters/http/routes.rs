use actix_web::{HttpResponse, web};
use std::sync::Arc;

use super::errors::json_error_handler;
use super::handlers::{auth, pages, web_auth};
use super::templates::TemplateEngine;
use crate::application::auth::LoginCoordinator;

/// Configure JSON auth routes
///
/// Mounted under a scope by the caller, e.g. `/api/v1/auth`.
pub fn configure_auth_routes(
  cfg: &mut web::ServiceConfig,
  login_coordinator: Arc<LoginCoordinator>,
) {
  cfg
    .app_data(web::Data::new(login_coordinator))
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .route("/login", web::post().to(auth::login_handler))
    .route("/validate", web::post().to(auth::validate_handler));
}

/// Dependencies for the server-rendered screens
#[derive(Clone)]
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub login_coordinator: Arc<LoginCoordinator>,
}

/// Configure web UI routes
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg.app_data(web::Data::new(deps.templates));

  cfg
    .route(
      "/",
      web::get().to(|| async {
        HttpResponse::Found()
          .insert_header(("Location", "/login"))
          .finish()
      }),
    )
    .route("/login", web::get().to(pages::login_page))
    .route("/home", web::get().to(pages::home_page));

  // Form submission
  cfg.service(
    web::scope("/auth")
      .app_data(web::Data::new(deps.login_coordinator))
      .route("/login", web::post().to(web_auth::login_submit)),
  );
}
