use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Request for a login attempt or a validation check
///
/// Fields are taken as-is: no shape checks happen at this layer. Both
/// fields are wiped when the request is dropped.
#[derive(Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct LoginRequest {
  /// User's email address
  pub email: String,

  /// User's password (plain text)
  pub password: String,
}

/// Response after a login attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
  pub success: bool,
}

/// Response for a validation check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
  pub valid: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Error type
  pub error: String,

  /// Human-readable error message
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  fn assert_zeroize_on_drop<T: ZeroizeOnDrop>() {}

  #[test]
  fn test_login_request_is_wiped() {
    assert_zeroize_on_drop::<LoginRequest>();

    let mut request: LoginRequest =
      serde_json::from_str(r#"{"email":"a@b.com","password":"hunter22"}"#).unwrap();
    request.zeroize();

    assert!(request.email.is_empty());
    assert!(request.password.is_empty());
  }
}
