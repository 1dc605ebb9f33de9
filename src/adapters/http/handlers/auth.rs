use actix_web::{HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::dtos::{LoginRequest, LoginResponse, ValidateResponse};
use crate::application::auth::LoginCoordinator;

/// Handler for a login attempt
///
/// POST /api/v1/auth/login
/// Body: LoginRequest (JSON)
/// Response: LoginResponse (JSON) with status 200, whatever the outcome
///
/// Unreadable bodies never reach this handler; the `JsonConfig` error
/// handler turns them into `ApiError::Validation`.
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  coordinator: web::Data<Arc<LoginCoordinator>>,
) -> HttpResponse {
  let success = coordinator.login(&request.email, &request.password).await;

  HttpResponse::Ok().json(LoginResponse { success })
}

/// Handler for the local credential check
///
/// POST /api/v1/auth/validate
/// Body: LoginRequest (JSON)
/// Response: ValidateResponse (JSON) with status 200
pub async fn validate_handler(
  request: web::Json<LoginRequest>,
  coordinator: web::Data<Arc<LoginCoordinator>>,
) -> HttpResponse {
  let valid = coordinator.validate(&request.email, &request.password);

  HttpResponse::Ok().json(ValidateResponse { valid })
}
