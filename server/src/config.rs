// server/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  /// Directory holding products.json, cart.json and users.json.
  pub data_dir: PathBuf,
  pub jwt_secret: String,
  pub jwt_ttl_secs: u64,
  pub log_format: LogFormat,

  // Optional: seeds an administrator account on startup when both are set.
  pub seed_admin_email: Option<String>,
  pub seed_admin_password: Option<String>,
}

// Secrets stay out of logs.
impl std::fmt::Debug for AppConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AppConfig")
      .field("server_host", &self.server_host)
      .field("server_port", &self.server_port)
      .field("data_dir", &self.data_dir)
      .field("jwt_secret", &"[REDACTED]")
      .field("jwt_ttl_secs", &self.jwt_ttl_secs)
      .field("log_format", &self.log_format)
      .field("seed_admin_email", &self.seed_admin_email)
      .finish()
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let data_dir = PathBuf::from(get_env("DATA_DIR").unwrap_or_else(|_| "./data".to_string()));

    let jwt_secret = get_env("JWT_SECRET")?;
    if jwt_secret.trim().is_empty() {
      return Err(AppError::Config("JWT_SECRET must not be empty".to_string()));
    }
    let jwt_ttl_secs = get_env("JWT_TTL_SECS")
      .unwrap_or_else(|_| "86400".to_string())
      .parse::<u64>()
      .map_err(|e| AppError::Config(format!("Invalid JWT_TTL_SECS: {}", e)))?;

    let log_format = match get_env("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()).as_str() {
      "pretty" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'", other))),
    };

    let seed_admin_email = get_env("SEED_ADMIN_EMAIL").ok().filter(|v| !v.trim().is_empty());
    let seed_admin_password = get_env("SEED_ADMIN_PASSWORD").ok().filter(|v| !v.is_empty());

    Ok(Self {
      server_host,
      server_port,
      data_dir,
      jwt_secret,
      jwt_ttl_secs,
      log_format,
      seed_admin_email,
      seed_admin_password,
    })
  }

  pub fn products_path(&self) -> PathBuf {
    self.data_dir.join("products.json")
  }

  pub fn cart_path(&self) -> PathBuf {
    self.data_dir.join("cart.json")
  }

  pub fn users_path(&self) -> PathBuf {
    self.data_dir.join("users.json")
  }

  /// Email and password of the administrator to seed, if both were configured.
  pub fn seed_admin(&self) -> Option<(&str, &str)> {
    match (&self.seed_admin_email, &self.seed_admin_password) {
      (Some(email), Some(password)) => Some((email.as_str(), password.as_str())),
      _ => None,
    }
  }
}
