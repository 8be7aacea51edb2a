// server/src/services/user_service.rs

use crate::errors::{AppError, Result};
use crate::models::User;
use crate::services::auth_service;
use chrono::Utc;
use shopfront_core::{Store, ROLE_ADMIN, ROLE_USER};
use tracing::{info, instrument, warn};
use uuid::Uuid;

pub const MIN_PASSWORD_CHARS: usize = 8;

fn normalize_email(email: &str) -> String {
  email.trim().to_lowercase()
}

fn validate_credentials(email: &str, password: &str) -> Result<()> {
  let mut errors = Vec::new();
  let email = email.trim();
  // Deliberately loose: one '@' with something on both sides.
  let well_formed = email
    .split_once('@')
    .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty() && !domain.contains('@'));
  if !well_formed {
    errors.push("Email is required and must be a valid address".to_string());
  }
  if password.chars().count() < MIN_PASSWORD_CHARS {
    errors.push(format!("Password must be at least {} characters", MIN_PASSWORD_CHARS));
  }
  if errors.is_empty() {
    Ok(())
  } else {
    Err(AppError::Validation(errors))
  }
}

async fn create_user(users: &dyn Store<User>, email: &str, password: &str, roles: Vec<String>) -> Result<User> {
  validate_credentials(email, password)?;
  let email = normalize_email(email);

  let mut accounts = users.load().await?;
  if accounts.iter().any(|u| u.email == email) {
    warn!(%email, "Signup for an email that is already registered.");
    return Err(AppError::Conflict(format!("An account for {} already exists.", email)));
  }

  let user = User {
    id: Uuid::new_v4(),
    email,
    password_hash: auth_service::hash_password(password)?,
    roles,
    created_at: Utc::now(),
  };
  accounts.push(user.clone());
  users.save(&accounts).await?;
  Ok(user)
}

#[instrument(name = "user_service::signup", skip(users, password))]
pub async fn signup(users: &dyn Store<User>, email: &str, password: &str) -> Result<User> {
  let user = create_user(users, email, password, vec![ROLE_USER.to_string()]).await?;
  info!(user_id = %user.id, "User registered.");
  Ok(user)
}

/// Returns the account and a freshly signed token.
#[instrument(name = "user_service::signin", skip(users, password, jwt_secret))]
pub async fn signin(
  users: &dyn Store<User>,
  email: &str,
  password: &str,
  jwt_secret: &str,
  ttl_secs: u64,
) -> Result<(User, String)> {
  let email = normalize_email(email);
  let invalid = || AppError::Auth("Invalid email or password.".to_string());

  let user = users
    .load()
    .await?
    .into_iter()
    .find(|u| u.email == email)
    .ok_or_else(invalid)?;
  if !auth_service::verify_password(&user.password_hash, password)? {
    warn!(user_id = %user.id, "Signin with a wrong password.");
    return Err(invalid());
  }

  let token = auth_service::issue_token(&user, jwt_secret, ttl_secs)?;
  info!(user_id = %user.id, "User signed in.");
  Ok((user, token))
}

/// Creates the configured administrator unless an account with that email
/// already exists. Returns whether an account was created.
#[instrument(name = "user_service::seed_admin", skip(users, password))]
pub async fn seed_admin(users: &dyn Store<User>, email: &str, password: &str) -> Result<bool> {
  let normalized = normalize_email(email);
  if users.load().await?.iter().any(|u| u.email == normalized) {
    info!("Administrator account already present, skipping seed.");
    return Ok(false);
  }
  let admin = create_user(users, email, password, vec![ROLE_USER.to_string(), ROLE_ADMIN.to_string()]).await?;
  info!(user_id = %admin.id, "Administrator account seeded.");
  Ok(true)
}
