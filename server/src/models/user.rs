// server/src/models/user.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored account. Serialized as-is into users.json, so the hash is kept;
/// anything sent to a client goes through [`UserView`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id: Uuid,
  pub email: String,
  pub password_hash: String,
  pub roles: Vec<String>,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
  pub id: Uuid,
  pub email: String,
  pub roles: Vec<String>,
  pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
  fn from(user: &User) -> Self {
    Self {
      id: user.id,
      email: user.email.clone(),
      roles: user.roles.clone(),
      created_at: user.created_at,
    }
  }
}
