mod common;

use common::TestContext;
use predicates::prelude::*;

const OPENING: &str = r#"{
  "text": "You find yourself standing at the entrance of a mysterious cave.",
  "options": [
    "Enter the cave cautiously",
    "Examine the glowing symbols",
    "Pick up the leather pouch",
    "Follow the distant singing"
  ]
}"#;

fn parse_segment(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should be a JSON segment")
}

#[test]
fn help_lists_commands() {
    let ctx = TestContext::new();
    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("start"))
        .stdout(predicate::str::contains("continue"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn demo_start_prints_cave_entrance() {
    let ctx = TestContext::new();
    let output = ctx.cli().args(["--demo", "start", "--theme", "fantasy"]).output().unwrap();

    assert!(output.status.success());
    let segment = parse_segment(&output.stdout);
    assert!(segment["text"].as_str().unwrap().starts_with("You find yourself standing"));
    assert_eq!(segment["options"].as_array().unwrap().len(), 4);
}

#[test]
fn demo_continue_follows_choice() {
    let ctx = TestContext::new();
    let story = ctx.write_story("story.json", OPENING);

    ctx.cli()
        .args(["continue", "--demo", "--story"])
        .arg(&story)
        .args(["--choice", "Enter the cave cautiously"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You step carefully into the cave"));
}

#[test]
fn unreachable_api_prints_fallback_segment() {
    let ctx = TestContext::new();
    let output = ctx.cli().arg("start").env("CHUZAPATH_HOST", "localhost").output().unwrap();

    assert!(output.status.success());
    let segment = parse_segment(&output.stdout);
    assert!(
        segment["text"].as_str().unwrap().starts_with("Connection to the storyteller was lost.")
    );
    assert_eq!(segment["options"][0], "Restart the journey");
}

#[test]
fn start_always_yields_four_options() {
    let ctx = TestContext::new();
    let output = ctx.cli().arg("start").output().unwrap();

    assert!(output.status.success());
    assert_eq!(parse_segment(&output.stdout)["options"].as_array().unwrap().len(), 4);
}

#[test]
fn invalid_story_file_fails() {
    let ctx = TestContext::new();
    let story = ctx.write_story("bad.json", r#"{"text": "t", "options": ["only one"]}"#);

    ctx.cli()
        .args(["continue", "--story"])
        .arg(&story)
        .args(["--choice", "only one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn explicit_missing_config_fails() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["--config", "nowhere.toml", "start"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_config_fails() {
    let ctx = TestContext::new();
    std::fs::write(ctx.work_dir().join("chuzapath.toml"), "[proxy]\npath = \"relative\"\n")
        .unwrap();

    ctx.cli()
        .arg("start")
        .assert()
        .failure()
        .stderr(predicate::str::contains("proxy.path"));
}
