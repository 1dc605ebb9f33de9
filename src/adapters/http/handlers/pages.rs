use actix_web::{HttpResponse, web};

use crate::adapters::http::templates::TemplateEngine;

/// Render the login screen, optionally pre-filling the email field
pub fn render_login(
  templates: &TemplateEngine,
  email: Option<&str>,
) -> Result<String, actix_web::Error> {
  let mut context = tera::Context::new();
  context.insert("title", "Login");
  context.insert("email", email.unwrap_or_default());

  templates
    .render("pages/login.html.tera", &context)
    .map_err(actix_web::error::ErrorInternalServerError)
}

/// Render login page
pub async fn login_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let html = render_login(&templates, None)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

/// Render home page
pub async fn home_page(
  templates: web::Data<TemplateEngine>,
) -> Result<HttpResponse, actix_web::Error> {
  let mut context = tera::Context::new();
  context.insert("title", "Home");

  let html = templates
    .render("pages/home.html.tera", &context)
    .map_err(actix_web::error::ErrorInternalServerError)?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
