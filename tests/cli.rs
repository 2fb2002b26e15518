// ABOUTME: Integration tests for the nexus-cleaner CLI commands.
// ABOUTME: Validates --help output, init, configuration failures, and a dry run against a fake server.

mod support;

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use support::fake_nexus::{FakeNexus, LOGIN, PASSWORD, Routes};

fn cleaner_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("nexus-cleaner"))
}

const UNREACHABLE: &str = "url: http://127.0.0.1:9\nlogin: cleaner\npassword: x\n";

#[test]
fn help_shows_commands() {
    cleaner_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("clean"))
        .stdout(predicate::str::contains("repos"));
}

#[test]
fn clean_help_shows_policy_flags() {
    cleaner_cmd()
        .args(["clean", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--count"))
        .stdout(predicate::str::contains("--days"))
        .stdout(predicate::str::contains("--names"))
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("--full-info"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("nexus-cleaner.yml");

    cleaner_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "nexus-cleaner.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("url:"), "Config should have url field");
    assert!(content.contains("keep: 30"), "Config should have keep count");
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("nexus-cleaner.yml"), "existing: config").unwrap();

    cleaner_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn clean_without_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    cleaner_cmd()
        .current_dir(temp_dir.path())
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn count_below_floor_fails_before_contacting_server() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("nexus-cleaner.yml"), UNREACHABLE).unwrap();

    cleaner_cmd()
        .current_dir(temp_dir.path())
        .args(["clean", "--count", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 10"));
}

#[test]
fn missing_password_variable_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = "url: http://127.0.0.1:9\nlogin: cleaner\npassword:\n  env: NEXUS_CLEANER_CLI_UNSET\n";
    fs::write(temp_dir.path().join("nexus-cleaner.yml"), config).unwrap();

    cleaner_cmd()
        .current_dir(temp_dir.path())
        .env_remove("NEXUS_CLEANER_CLI_UNSET")
        .arg("clean")
        .assert()
        .failure()
        .stderr(predicate::str::contains("NEXUS_CLEANER_CLI_UNSET"));
}

fn component(name: &str, version: &str, month: u32) -> String {
    format!(
        r#"{{"name": "{name}", "version": "{version}",
            "assets": [{{"id": "{name}-{version}", "lastModified": "2024-{month:02}-01T00:00:00Z"}}]}}"#
    )
}

/// Twelve monthly versions of "app" in one hosted repository.
fn twelve_months() -> Routes {
    let items: Vec<String> = (1..=12)
        .map(|m| component("app", &format!("1.{m}"), m))
        .collect();
    let mut routes = Routes {
        repositories: r#"[{"name": "docker-hosted", "format": "docker", "type": "hosted"}]"#
            .to_string(),
        ..Default::default()
    };
    routes.search.insert(
        ("docker-hosted".to_string(), String::new()),
        (
            200,
            format!(
                r#"{{"items": [{}], "continuationToken": null}}"#,
                items.join(",")
            ),
        ),
    );
    routes
}

fn write_config(dir: &std::path::Path, url: &str) {
    let yaml = format!("url: {url}\nlogin: {LOGIN}\npassword: {PASSWORD}\n");
    fs::write(dir.join("nexus-cleaner.yml"), yaml).unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn dry_run_reports_without_deleting() {
    let server = FakeNexus::start(twelve_months()).await;
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), &server.url);

    let dir = temp_dir.path().to_path_buf();
    let assert = tokio::task::spawn_blocking(move || {
        cleaner_cmd()
            .current_dir(dir)
            .args(["clean", "--count", "10", "--test", "--full-info"])
            .assert()
    })
    .await
    .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("deleting app:1.1 (2024-01-01T00:00:00+00:00) .. dry run"))
        .stdout(predicate::str::contains("deleting app:1.2"))
        .stdout(predicate::str::contains("app:1.12 (2024-12-01T00:00:00+00:00) [keep: \u{2714}]"))
        .stdout(predicate::str::contains("deleting app:1.3").not());
    assert!(server.deletes().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn live_run_deletes_and_emits_json() {
    let server = FakeNexus::start(twelve_months()).await;
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), &server.url);

    let dir = temp_dir.path().to_path_buf();
    let output = tokio::task::spawn_blocking(move || {
        cleaner_cmd()
            .current_dir(dir)
            .args(["--json", "clean", "-c", "10"])
            .output()
            .unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    assert_eq!(server.deletes(), vec!["app-1.1", "app-1.2"]);

    let events: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let deletions: Vec<&serde_json::Value> =
        events.iter().filter(|e| e["event"] == "deletion").collect();
    assert_eq!(deletions.len(), 2);
    assert_eq!(deletions[0]["version"], "1.1");
    assert_eq!(deletions[0]["status"], "deleted");
    assert_eq!(deletions[0]["repository"], "docker-hosted");

    let summary = events.iter().find(|e| e["event"] == "summary").unwrap();
    assert_eq!(summary["deleted"], 2);
    assert_eq!(summary["failed"], 0);
}
