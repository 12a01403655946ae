#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use counters_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
store:
  initial_capacty: 10 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.shutdown_grace_ms, 5000);
    assert_eq!(cfg.store.initial_capacity, 64);
}

#[test]
fn wrong_version_rejected() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn bad_listen_rejected() {
    let bad = r#"
version: 1
server:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert!(err.to_string().contains("server.listen"));
}

#[test]
fn out_of_range_values_rejected() {
    let grace = "version: 1\nserver:\n  shutdown_grace_ms: 60001\n";
    assert!(config::load_from_str(grace).is_err());

    let cap = "version: 1\nstore:\n  initial_capacity: 2000000\n";
    assert!(config::load_from_str(cap).is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("definitely/not/here/counters.yaml").expect("defaults");
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");

    let err = config::load_from_file("definitely/not/here/counters.yaml").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "INTERNAL");
}
