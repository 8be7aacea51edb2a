// core/src/gate.rs

//! Role-based authorization gate.
//!
//! A gate is a pure decision over the caller's role claims. It never fails
//! and never touches the transport layer: callers turn the returned
//! [`Decision`] into whatever response mechanism they use.

use crate::error::ShopError;
use crate::models::{Claims, RoleClaim};
use std::collections::BTreeSet;
use tracing::{debug, warn};

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// The has-roles capability: anything that may expose a `roles` claim.
pub trait RoleBearer {
  fn role_claim(&self) -> Option<&RoleClaim>;
}

impl RoleBearer for Claims {
  fn role_claim(&self) -> Option<&RoleClaim> {
    self.roles.as_ref()
  }
}

impl RoleBearer for RoleClaim {
  fn role_claim(&self) -> Option<&RoleClaim> {
    Some(self)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionKind {
  Forbidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
  pub kind: RejectionKind,
  pub reason: &'static str,
}

/// Outcome of a gate evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
  /// The caller may proceed.
  Accept,
  /// Terminal. Surface as a 403-equivalent, never retry.
  Reject(Rejection),
}

impl Decision {
  pub fn is_accept(&self) -> bool {
    matches!(self, Decision::Accept)
  }

  pub fn into_result(self) -> Result<(), ShopError> {
    match self {
      Decision::Accept => Ok(()),
      Decision::Reject(rejection) => Err(ShopError::Forbidden {
        reason: rejection.reason.to_string(),
      }),
    }
  }
}

#[derive(Debug, Clone)]
pub struct AuthorizationGate {
  name: &'static str,
  required_roles: BTreeSet<String>,
}

impl AuthorizationGate {
  pub fn new<I, S>(name: &'static str, required_roles: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      name,
      required_roles: required_roles.into_iter().map(Into::into).collect(),
    }
  }

  /// Passes anyone holding `user` or `admin`.
  pub fn member() -> Self {
    Self::new("member", [ROLE_USER, ROLE_ADMIN])
  }

  /// Passes `admin` only.
  pub fn administrator() -> Self {
    Self::new("administrator", [ROLE_ADMIN])
  }

  pub fn name(&self) -> &'static str {
    self.name
  }

  pub fn required_roles(&self) -> &BTreeSet<String> {
    &self.required_roles
  }

  pub fn authorize<C>(&self, claims: Option<&C>) -> Decision
  where
    C: RoleBearer + ?Sized,
  {
    let decision = self.evaluate(claims);
    match &decision {
      Decision::Accept => debug!(gate = self.name, "Authorization accepted."),
      Decision::Reject(rejection) => warn!(gate = self.name, reason = rejection.reason, "Authorization rejected."),
    }
    decision
  }

  fn evaluate<C>(&self, claims: Option<&C>) -> Decision
  where
    C: RoleBearer + ?Sized,
  {
    let Some(claims) = claims else {
      return reject("no authenticated identity");
    };
    let roles = match claims.role_claim() {
      None => return reject("roles claim missing"),
      Some(RoleClaim::Malformed(_)) => return reject("roles claim is not a list"),
      Some(RoleClaim::Listed(roles)) => roles,
    };
    if roles.is_empty() {
      return reject("roles claim is empty");
    }
    if roles.iter().any(|role| self.required_roles.contains(role)) {
      Decision::Accept
    } else {
      reject("no required role held")
    }
  }
}

fn reject(reason: &'static str) -> Decision {
  Decision::Reject(Rejection {
    kind: RejectionKind::Forbidden,
    reason,
  })
}
