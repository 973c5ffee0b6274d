//! Error scenario integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn persona_lens_bin(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("persona-lens").expect("binary should build");
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

#[test]
fn generate_without_api_key_fails_before_reading_files() {
    let home = TempDir::new().unwrap();
    // The face file does not exist; the key check must come first
    persona_lens_bin(&home)
        .args(["generate", "--face", "/nonexistent/face.jpg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key"))
        .stderr(predicate::str::contains("face.jpg").not());
}

#[test]
fn caption_without_api_key_fails() {
    let home = TempDir::new().unwrap();
    persona_lens_bin(&home)
        .args(["caption", "--image", "/nonexistent/persona.png"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}

#[test]
fn generate_with_unreadable_face_names_the_role() {
    let home = TempDir::new().unwrap();
    persona_lens_bin(&home)
        .env("GEMINI_API_KEY", "test-key")
        .args(["generate", "--face", "/nonexistent/face.jpg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("face"))
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn generate_with_non_image_face_is_rejected() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "not an image").unwrap();

    persona_lens_bin(&home)
        .env("GEMINI_API_KEY", "test-key")
        .args(["generate", "--face"])
        .arg(&notes)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not an image"));
}

#[test]
fn generate_requires_face_flag() {
    let home = TempDir::new().unwrap();
    persona_lens_bin(&home)
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--face"));
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    persona_lens_bin(&home)
        .args(["config", "get", "unknown_key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn config_set_invalid_timeout() {
    let home = TempDir::new().unwrap();
    persona_lens_bin(&home)
        .args(["config", "set", "timeout", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid duration"));
}

#[test]
fn config_set_invalid_max_image_mb() {
    let home = TempDir::new().unwrap();
    persona_lens_bin(&home)
        .args(["config", "set", "max_image_mb", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn config_set_invalid_boolean() {
    let home = TempDir::new().unwrap();
    persona_lens_bin(&home)
        .args(["config", "set", "caption", "maybe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'true' or 'false'"));
}

#[test]
fn config_list_with_no_file() {
    let home = TempDir::new().unwrap();
    persona_lens_bin(&home)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key"))
        .stdout(predicate::str::contains("(not set)"));
}
