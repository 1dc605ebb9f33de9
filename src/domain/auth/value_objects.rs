use std::fmt;
use unicode_segmentation::UnicodeSegmentation;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Credentials Value Object (Ephemeral - One Login Attempt)
// ============================================================================

/// Email/password pair submitted for a single login attempt
///
/// Credentials are never persisted. The password buffer is wiped when the
/// value is dropped and is never printed by `Debug`.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
  email: String,
  password: String,
}

impl Credentials {
  /// Minimum password length, counted in grapheme clusters
  pub const MIN_PASSWORD_LENGTH: usize = 6;

  /// Creates credentials from raw input. No validation is applied here.
  pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
    Self {
      email: email.into(),
      password: password.into(),
    }
  }

  pub fn email(&self) -> &str {
    &self.email
  }

  /// Returns the password as a string slice (use with caution)
  pub fn password(&self) -> &str {
    &self.password
  }

  /// Local form-level check: the email contains `@` and the password has
  /// at least [`Self::MIN_PASSWORD_LENGTH`] user-perceived characters
  pub fn is_well_formed(&self) -> bool {
    self.email.contains('@') && self.password_length() >= Self::MIN_PASSWORD_LENGTH
  }

  fn password_length(&self) -> usize {
    self.password.graphemes(true).count()
  }
}

// Implement Debug without exposing the password
impl fmt::Debug for Credentials {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Credentials")
      .field("email", &self.email)
      .field("password", &"***")
      .finish()
  }
}

// ============================================================================
// AuthToken Value Object
// ============================================================================

/// Opaque token handed back by a successful network login
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
  pub fn new(token: impl Into<String>) -> Self {
    Self(token.into())
  }

  /// Returns the token as a string slice
  pub fn as_str(&self) -> &str {
    &self.0
  }
}

// Tokens only show a short prefix in logs
impl fmt::Debug for AuthToken {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let prefix: String = self.0.chars().take(4).collect();
    write!(f, "AuthToken({}***)", prefix)
  }
}
