use actix_web::{
  HttpRequest, HttpResponse,
  error::{JsonPayloadError, ResponseError},
  http::{StatusCode, header::ContentType},
};
use thiserror::Error;

use super::dtos::ErrorResponse;

/// API error type for the JSON endpoints
///
/// Login outcomes are never errors here; only requests that cannot be
/// read at all end up as an `ApiError`.
#[derive(Debug, Error)]
pub enum ApiError {
  /// Malformed request body (400 Bad Request)
  #[error("Validation error: {0}")]
  Validation(String),
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let (error_type, message) = match self {
      ApiError::Validation(msg) => ("validation_error", msg.clone()),
    };

    HttpResponse::build(self.status_code())
      .content_type(ContentType::json())
      .json(ErrorResponse {
        error: error_type.to_string(),
        message,
      })
  }
}

/// Error handler for `web::JsonConfig` so bad bodies get the JSON error shape
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  tracing::debug!("Rejected JSON payload: {}", error);
  ApiError::Validation(error.to_string()).into()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_error_status_codes() {
    assert_eq!(
      ApiError::Validation("test".to_string()).status_code(),
      StatusCode::BAD_REQUEST
    );
  }

  #[actix_web::test]
  async fn test_error_response_body() {
    let response = ApiError::Validation("missing field `email`".to_string()).error_response();
    let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
    let error: ErrorResponse = serde_json::from_slice(&body).unwrap();

    assert_eq!(error.error, "validation_error");
    assert_eq!(error.message, "missing field `email`");
  }
}
