use assert_cmd::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture(name: &str) -> PathBuf {
    let path = repo_root().join("fixtures").join("responses").join(name);
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

fn run_json(args: &[&str]) -> Value {
    let exe = assert_cmd::cargo_bin!("relmap-cli");
    let out = Command::new(exe).args(args).assert().success();
    serde_json::from_slice(&out.get_output().stdout).expect("stdout is JSON")
}

fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .expect("array")
        .iter()
        .map(|v| v["id"].as_str().expect("id").to_string())
        .collect()
}

#[test]
fn cli_normalizes_a_response() {
    let path = fixture("tokens.json");
    let out = run_json(&["normalize", path.to_string_lossy().as_ref()]);

    assert_eq!(
        ids(&out["nodes"]),
        vec!["Lexer", "Token-Stream", "Parser", "Syntax-Tree"]
    );
    assert_eq!(ids(&out["edges"]), vec!["e0", "e1", "e2", "e3", "e5"]);
    assert_eq!(out["nodes"][1]["label"], "Token Stream");
    assert_eq!(out["nodes"][1]["role"], "target");
}

#[test]
fn cli_layout_prints_top_left_positions() {
    let path = fixture("orders.json");
    let out = run_json(&["layout", path.to_string_lossy().as_ref()]);

    let ys: Vec<f64> = out["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["position"]["y"].as_f64().unwrap())
        .collect();
    assert_eq!(ys, vec![0.0, 106.0, 212.0]);
}

#[test]
fn cli_layout_flags_override_the_options_json() {
    let path = fixture("orders.json");
    let out = run_json(&[
        "layout",
        "--options",
        r#"{"rankdir":"LR","ranksep":10}"#,
        "--ranksep",
        "20",
        path.to_string_lossy().as_ref(),
    ]);

    let xs: Vec<f64> = out["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["position"]["x"].as_f64().unwrap())
        .collect();
    assert_eq!(xs, vec![0.0, 192.0, 384.0]);
}

#[test]
fn cli_render_emits_the_widget_shape_and_summary() {
    let path = fixture("orders.json");
    let out = run_json(&["render", "--pretty", path.to_string_lossy().as_ref()]);

    assert_eq!(out["summary"], "Users place orders; orders contain items.");
    assert!(out.get("message").is_none());
    assert_eq!(out["nodes"][0]["style"]["backgroundColor"], "#1d4ed8");
    assert_eq!(out["nodes"][1]["style"]["backgroundColor"], "#9333ea");
    assert_eq!(out["edges"][0]["type"], "smoothstep");
    assert_eq!(out["edges"][0]["labelBgPadding"], serde_json::json!([8, 4]));
}

#[test]
fn cli_render_degrades_service_errors() {
    let path = fixture("service_error.json");
    let out = run_json(&["render", path.to_string_lossy().as_ref()]);

    assert_eq!(out["nodes"], serde_json::json!([]));
    assert_eq!(out["edges"], serde_json::json!([]));
    assert_eq!(out["message"], "No relationships found.");
}

#[test]
fn cli_render_reports_empty_responses() {
    let path = fixture("empty.json");
    let out = run_json(&["render", path.to_string_lossy().as_ref()]);
    assert_eq!(out["message"], "No relationships found.");
    assert_eq!(out["summary"], "Nothing to relate.");
}

#[test]
fn cli_render_strict_fails_on_service_errors() {
    let path = fixture("service_error.json");
    let exe = assert_cmd::cargo_bin!("relmap-cli");
    Command::new(exe)
        .args(["render", "--strict", path.to_string_lossy().as_ref()])
        .assert()
        .code(1);
}

#[test]
fn cli_request_wraps_code_with_the_model() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let code = tmp.path().join("main.rs");
    std::fs::write(&code, "fn main() {}\n").expect("write code");

    let out = run_json(&[
        "request",
        "--model",
        "deepseek",
        code.to_string_lossy().as_ref(),
    ]);
    assert_eq!(
        out,
        serde_json::json!({ "code": "fn main() {}\n", "model": "DeepSeek" })
    );
}

#[test]
fn cli_rejects_unknown_flags() {
    let exe = assert_cmd::cargo_bin!("relmap-cli");
    Command::new(exe).args(["--bogus"]).assert().code(2);
    Command::new(exe)
        .args(["layout", "--rankdir", "diagonal"])
        .assert()
        .code(2);
}

#[test]
fn cli_render_degrades_unreadable_input_and_bad_options() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let binary = tmp.path().join("response.json");
    std::fs::write(&binary, [0xff_u8, 0xfe, 0x00, 0x7b]).expect("write bytes");

    let out = run_json(&["render", binary.to_string_lossy().as_ref()]);
    assert_eq!(out["nodes"], serde_json::json!([]));
    assert_eq!(out["message"], "No relationships found.");

    let path = fixture("orders.json");
    let out = run_json(&[
        "render",
        "--options",
        "{not json",
        path.to_string_lossy().as_ref(),
    ]);
    assert_eq!(out["edges"], serde_json::json!([]));
    assert_eq!(out["message"], "No relationships found.");
}

#[test]
fn cli_render_strict_fails_on_bad_options() {
    let path = fixture("orders.json");
    let exe = assert_cmd::cargo_bin!("relmap-cli");
    Command::new(exe)
        .args([
            "render",
            "--strict",
            "--options",
            "{not json",
            path.to_string_lossy().as_ref(),
        ])
        .assert()
        .code(1);
}
