// server/src/services/auth_service.rs

//! Password hashing and bearer-token handling.
//!
//! Tokens are HS256 JWTs signed with the shared `JWT_SECRET`. Decoding a token
//! is the claims provider for the authorization gates: it yields the
//! [`Claims`] or an authentication error, and never decides access itself.

use crate::errors::AppError;
use crate::models::User;
use argon2::{
  password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
  Argon2,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use shopfront_core::{Claims, RoleClaim};
use tracing::{debug, error, instrument, warn};

/// Hashes a plain-text password using Argon2 with a fresh random salt.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation(vec!["Password cannot be empty".to_string()]));
  }

  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|argon_err| {
      error!(error = %argon_err, "Argon2 password hashing failed.");
      AppError::Internal(format!("Password hashing process failed: {}", argon_err))
    })
}

/// `Ok(false)` on a plain mismatch; `Err` only when the stored hash itself
/// is unusable.
#[instrument(name = "auth_service::verify_password", skip(stored_hash, provided_password), err(Display))]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool, AppError> {
  if provided_password.is_empty() {
    return Ok(false);
  }

  let parsed_hash = PasswordHash::new(stored_hash).map_err(|parse_err| {
    error!(error = %parse_err, "Failed to parse stored password hash string.");
    AppError::Internal(format!("Invalid stored password hash format: {}", parse_err))
  })?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: Passwords do not match.");
      Ok(false)
    }
    Err(other_argon_err) => {
      error!(error = %other_argon_err, "Argon2 password verification process encountered an error.");
      Err(AppError::Internal(format!(
        "Password verification process failed: {}",
        other_argon_err
      )))
    }
  }
}

#[instrument(name = "auth_service::issue_token", skip(user, secret), fields(user_id = %user.id))]
pub fn issue_token(user: &User, secret: &str, ttl_secs: u64) -> Result<String, AppError> {
  let now = Utc::now().timestamp().max(0) as u64;
  let claims = Claims {
    sub: user.id.to_string(),
    email: user.email.clone(),
    roles: Some(RoleClaim::from_roles(user.roles.iter().cloned())),
    iat: now,
    exp: now.saturating_add(ttl_secs),
  };

  encode(&Header::new(Algorithm::HS256), &claims, &EncodingKey::from_secret(secret.as_bytes())).map_err(|e| {
    error!(error = %e, "Failed to sign token.");
    AppError::Internal(format!("Token signing failed: {}", e))
  })
}

/// Verifies signature and expiry and returns the embedded claims.
pub fn decode_token(token: &str, secret: &str) -> Result<Claims, AppError> {
  let validation = Validation::new(Algorithm::HS256);
  decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
    .map(|data| data.claims)
    .map_err(|e| {
      let reason = match e.kind() {
        ErrorKind::ExpiredSignature => "Token has expired.",
        ErrorKind::InvalidSignature => "Token signature is invalid.",
        _ => "Token is malformed.",
      };
      warn!(error = %e, "Rejected bearer token.");
      AppError::Auth(reason.to_string())
    })
}
