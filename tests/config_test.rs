//! Tests for server configuration loading.

use std::fs;
use tempfile::TempDir;

use decoupled_tictactoe::{PostWinPolicy, ServerConfig};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("tictactoe.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_defaults() {
    let config = ServerConfig::default();
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 3000);
    assert_eq!(*config.post_win_policy(), PostWinPolicy::Continue);
}

#[test]
fn test_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"host = "0.0.0.0"
port = 8080
post_win_policy = "reject"
"#,
    );

    let config = ServerConfig::from_file(&path).expect("Load failed");
    assert_eq!(config, ServerConfig::new("0.0.0.0".to_string(), 8080, PostWinPolicy::Reject));
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "port = 4000\n");

    let config = ServerConfig::load(Some(path.as_path())).expect("Load failed");
    assert_eq!(config.host(), "127.0.0.1");
    assert_eq!(*config.port(), 4000);
    assert_eq!(*config.post_win_policy(), PostWinPolicy::Continue);
}

#[test]
fn test_overrides_win() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "port = 4000\npost_win_policy = \"reject\"\n");

    let config = ServerConfig::from_file(&path)
        .expect("Load failed")
        .with_overrides(Some("localhost".to_string()), Some(5000), None);

    assert_eq!(config.host(), "localhost");
    assert_eq!(*config.port(), 5000);
    assert_eq!(*config.post_win_policy(), PostWinPolicy::Reject);
}

#[test]
fn test_malformed_file_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "this is not valid toml !!!@@@");

    let err = ServerConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_policy_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "post_win_policy = \"sometimes\"\n");

    assert!(ServerConfig::from_file(&path).is_err());
}

#[test]
fn test_missing_explicit_file_fails() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nope.toml");

    let err = ServerConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_toml_round_trip() {
    let config = ServerConfig::new("10.0.0.1".to_string(), 9000, PostWinPolicy::Reject);
    let text = config.to_toml().expect("Serialize failed");

    assert!(text.contains("post_win_policy = \"reject\""));
    assert_eq!(toml::from_str::<ServerConfig>(&text).unwrap(), config);
}
