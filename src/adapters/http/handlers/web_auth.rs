use actix_web::{HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::pages::render_login;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::auth::LoginCoordinator;

#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct LoginFormData {
  email: String,
  password: String,
}

/// Handle login form submission
///
/// Navigation is decided here: a successful attempt redirects to the home
/// screen, a failed one re-renders the login screen with the email kept.
/// No error message is shown on failure.
pub async fn login_submit(
  form: web::Form<LoginFormData>,
  coordinator: web::Data<Arc<LoginCoordinator>>,
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  if coordinator.login(&form.email, &form.password).await {
    return Ok(
      HttpResponse::SeeOther()
        .insert_header(("Location", "/home"))
        .finish(),
    );
  }

  tracing::info!("Login form rejected, showing login screen again");
  let html = render_login(&templates, Some(&form.email))?;

  Ok(
    HttpResponse::Unauthorized()
      .content_type("text/html")
      .body(html),
  )
}
