// tests/gate_tests.rs
mod common;
use common::*;
use serde_json::json;
use shopfront_core::{AuthorizationGate, Claims, Decision, RejectionKind, RoleClaim};

fn assert_forbidden(decision: Decision) {
  match decision {
    Decision::Reject(rejection) => assert_eq!(rejection.kind, RejectionKind::Forbidden),
    Decision::Accept => panic!("Expected a Forbidden rejection, got Accept"),
  }
}

#[test]
fn test_member_gate_accepts_user_and_admin() {
  setup_tracing();
  let gate = AuthorizationGate::member();
  assert_eq!(gate.authorize(Some(&claims_listing(&["user"]))), Decision::Accept);
  assert_eq!(gate.authorize(Some(&claims_listing(&["admin"]))), Decision::Accept);
  assert_eq!(gate.authorize(Some(&claims_listing(&["guest", "user"]))), Decision::Accept);
}

#[test]
fn test_administrator_gate_rejects_plain_user() {
  setup_tracing();
  let gate = AuthorizationGate::administrator();
  assert_forbidden(gate.authorize(Some(&claims_listing(&["user"]))));
  assert_eq!(gate.authorize(Some(&claims_listing(&["user", "admin"]))), Decision::Accept);
}

#[test]
fn test_both_gates_reject_missing_or_degenerate_roles() {
  setup_tracing();
  let cases: Vec<Option<Claims>> = vec![
    None,
    Some(claims_with(None)),
    Some(claims_listing(&[])),
    Some(claims_with(Some(RoleClaim::Malformed(json!("admin"))))),
    Some(claims_with(Some(RoleClaim::Malformed(json!({"admin": true}))))),
  ];

  for gate in [AuthorizationGate::member(), AuthorizationGate::administrator()] {
    for claims in &cases {
      assert_forbidden(gate.authorize(claims.as_ref()));
    }
  }
}

#[test]
fn test_role_matching_is_case_sensitive() {
  setup_tracing();
  assert_forbidden(AuthorizationGate::administrator().authorize(Some(&claims_listing(&["ADMIN"]))));
  assert_forbidden(AuthorizationGate::member().authorize(Some(&claims_listing(&["User"]))));
}

#[test]
fn test_non_intersecting_roles_are_rejected() {
  setup_tracing();
  assert_forbidden(AuthorizationGate::member().authorize(Some(&claims_listing(&["guest", "auditor"]))));
}

#[test]
fn test_single_string_roles_claim_is_not_a_list() {
  setup_tracing();
  // A token carrying `"roles": "admin"` must not be read as `["admin"]`.
  let claims: Claims = serde_json::from_value(json!({
    "sub": "42",
    "roles": "admin",
    "exp": 4_102_444_800u64
  }))
  .unwrap();
  assert!(matches!(claims.roles, Some(RoleClaim::Malformed(_))));
  assert_forbidden(AuthorizationGate::administrator().authorize(Some(&claims)));
}

#[test]
fn test_mixed_type_roles_claim_is_malformed() {
  let claims: Claims = serde_json::from_value(json!({
    "sub": "42",
    "roles": ["admin", 7],
    "exp": 4_102_444_800u64
  }))
  .unwrap();
  assert_forbidden(AuthorizationGate::administrator().authorize(Some(&claims)));
}

#[test]
fn test_custom_gate_uses_its_own_role_set() {
  let gate = AuthorizationGate::new("auditor", ["auditor"]);
  assert_eq!(gate.authorize(Some(&claims_listing(&["auditor"]))), Decision::Accept);
  assert_forbidden(gate.authorize(Some(&claims_listing(&["admin"]))));
}

#[test]
fn test_gate_accepts_bare_role_claims() {
  let roles = RoleClaim::from_roles(["user"]);
  assert!(AuthorizationGate::member().authorize(Some(&roles)).is_accept());
}
