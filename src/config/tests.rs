//! Unit tests for configuration loading and resolution.

use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::{Value, json};

use super::VerityConfig;
use crate::github::error::VerificationError;

/// Applies a configuration layer to the composer based on the layer type.
fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"token": "default-token"})), ("file", json!({"token": "file-token"}))],
    "file-token",
    "file should override default"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"token": "file-token"})), ("environment", json!({"token": "env-token"}))],
    "env-token",
    "environment should override file"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"token": "env-token"})), ("cli", json!({"token": "cli-token"}))],
    "cli-token",
    "CLI should override environment"
)]
fn test_layer_precedence(
    #[case] layers: Vec<(&str, Value)>,
    #[case] expected: &str,
    #[case] message: &str,
) {
    let mut composer = MergeComposer::new();

    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }

    let config = VerityConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert_eq!(config.token.as_deref(), Some(expected), "{message}");
}

#[rstest]
fn resolve_token_prefers_configured_value() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = VerityConfig {
        token: Some("configured-token".to_owned()),
        ..Default::default()
    };

    assert_eq!(
        config.resolve_token().ok(),
        Some("configured-token".to_owned()),
        "configured token should win over the environment"
    );
}

#[rstest]
fn resolve_token_falls_back_to_github_token_env() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = VerityConfig::default();

    assert_eq!(
        config.resolve_token().ok(),
        Some("legacy-token".to_owned()),
        "should fall back to GITHUB_TOKEN"
    );
}

#[rstest]
fn resolve_token_errors_when_no_source_provides_a_value() {
    // Lock and clear GITHUB_TOKEN to ensure test isolation
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = VerityConfig::default();

    let result = config.resolve_token();
    assert!(
        matches!(result, Err(VerificationError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn resolve_bind_addr_defaults_to_port_8000() {
    let config = VerityConfig::default();
    let addr = config
        .resolve_bind_addr()
        .expect("default bind address should parse");
    assert_eq!(addr.port(), 8000, "default port mismatch");
}

#[rstest]
fn resolve_bind_addr_rejects_invalid_values() {
    let config = VerityConfig {
        bind_addr: Some("not-an-address".to_owned()),
        ..Default::default()
    };

    let result = config.resolve_bind_addr();
    assert!(
        matches!(result, Err(VerificationError::Configuration { .. })),
        "expected Configuration error, got {result:?}"
    );
}
