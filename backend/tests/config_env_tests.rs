//! Configuration read from the real process environment.

mod support;

use collatz_dash::config::{ConfigError, ServerConfig};
use support::with_scoped_env;

const ALL_VARS: [&str; 7] = [
    "HOST",
    "PORT",
    "WORKERS",
    "REQUEST_TIMEOUT_SECS",
    "MAX_TRAJECTORIES",
    "MAX_START_LIMIT",
    "JOB_RETENTION_SECS",
];

fn cleared() -> Vec<(&'static str, Option<&'static str>)> {
    ALL_VARS.iter().map(|k| (*k, None)).collect()
}

#[test]
fn test_unset_port_defaults_to_8080() {
    let config = with_scoped_env(&cleared(), ServerConfig::from_env).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:8080");
}

#[test]
fn test_port_8051_variant() {
    let mut env = cleared();
    env.push(("PORT", Some("8051")));
    let config = with_scoped_env(&env, ServerConfig::from_env).unwrap();
    assert_eq!(config.port, 8051);
}

#[test]
fn test_invalid_port_rejected() {
    let mut env = cleared();
    env.push(("PORT", Some("eighty")));
    let err = with_scoped_env(&env, ServerConfig::from_env).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
}

#[test]
fn test_worker_pool_and_timeout() {
    let mut env = cleared();
    env.push(("WORKERS", Some("8")));
    env.push(("REQUEST_TIMEOUT_SECS", Some("30")));
    let config = with_scoped_env(&env, ServerConfig::from_env).unwrap();
    assert_eq!(config.workers, 8);
    assert_eq!(config.request_timeout.as_secs(), 30);
}
