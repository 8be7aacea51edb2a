// examples/authorization_gate.rs

//! Runs a handful of role claims through the member and administrator gates.

use serde_json::json;
use shopfront_core::{AuthorizationGate, Decision, RoleClaim};

fn main() {
  let gates = [AuthorizationGate::member(), AuthorizationGate::administrator()];
  let samples: Vec<(&str, Option<RoleClaim>)> = vec![
    ("user", Some(RoleClaim::from_roles(["user"]))),
    ("admin", Some(RoleClaim::from_roles(["admin"]))),
    ("ADMIN", Some(RoleClaim::from_roles(["ADMIN"]))),
    ("\"admin\" (string)", Some(RoleClaim::Malformed(json!("admin")))),
    ("[]", Some(RoleClaim::from_roles(Vec::<String>::new()))),
    ("anonymous", None),
  ];

  for (label, roles) in &samples {
    for gate in &gates {
      let outcome = match gate.authorize(roles.as_ref()) {
        Decision::Accept => "accept".to_string(),
        Decision::Reject(rejection) => format!("reject ({})", rejection.reason),
      };
      println!("{:<20} {:<14} {}", label, gate.name(), outcome);
    }
  }
}
