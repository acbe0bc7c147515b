//! Exit codes of the `routes-cli` binary.

use std::process::{Command, Output};

fn routes_cli(args: &[&str]) -> Output {
    // A config path that does not exist selects the built-in table.
    let config = std::env::temp_dir().join(format!("runepage-cli-{}.toml", uuid::Uuid::new_v4()));
    Command::new(env!("CARGO_BIN_EXE_routes-cli"))
        .arg("-c")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn test_list_succeeds() {
    let out = routes_cli(&["list"]);
    assert!(out.status.success());
    let routes: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(routes.as_array().unwrap().len(), 7);
}

#[test]
fn test_reverse_prints_path() {
    let out = routes_cli(&["reverse", "Champ", "champ=Ashe"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "/champ/Ashe");
}

#[test]
fn test_resolve_no_match_exits_non_zero() {
    let out = routes_cli(&["resolve", "/nope"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("/nope"));
}

#[test]
fn test_reverse_missing_parameter_exits_non_zero() {
    let out = routes_cli(&["reverse", "Share"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("ident"));
}

#[test]
fn test_reverse_unknown_name_exits_non_zero() {
    let out = routes_cli(&["reverse", "Nope"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Nope"));
}
