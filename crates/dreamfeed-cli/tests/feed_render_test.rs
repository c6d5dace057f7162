use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

const SCENARIO_FEED: &str = r#"[
  {
    "title": "Flying again",
    "published_at": "2024-01-02",
    "text_content": "I flew over the city",
    "author": {"username": "ana"},
    "tags": [{"name": "flight"}, {"name": "city"}]
  },
  {
    "title": "Silent hallway",
    "published_at": "2024-01-05",
    "text_content": "Endless doors, none would open",
    "author": {"username": "marco"},
    "tags": []
  }
]"#;

fn write_feed(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("feed.json");
    std::fs::write(&path, contents).expect("Failed to write feed fixture");
    path
}

fn dreamfeed() -> Command {
    Command::cargo_bin("dreamfeed").expect("Binary not built")
}

#[test]
fn renders_feed_with_chips_and_fallback() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, SCENARIO_FEED);

    dreamfeed()
        .arg("render")
        .arg(&feed)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 dream logs rendered"))
        .stdout(predicate::str::contains("Flying again"))
        .stdout(predicate::str::contains("2024-01-02"))
        .stdout(predicate::str::contains("I flew over the city"))
        .stdout(predicate::str::contains("ana"))
        .stdout(predicate::str::contains("flight"))
        .stdout(predicate::str::contains("No tags available"));
}

#[test]
fn absent_tags_field_renders_like_empty_tags() {
    let dir = TempDir::new().unwrap();
    let without_field = write_feed(
        &dir,
        r#"[{
            "title": "t",
            "published_at": "d",
            "text_content": "b",
            "author": {"username": "u"}
        }]"#,
    );

    dreamfeed()
        .arg("render")
        .arg(&without_field)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags: No tags available"));
}

#[test]
fn json_format_dumps_full_view_model() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, SCENARIO_FEED);

    let output = dreamfeed()
        .arg("render")
        .arg(&feed)
        .arg("--format")
        .arg("json")
        .output()
        .expect("Failed to run render");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Parse failed");

    assert_eq!(result["badge"]["label"], "2 dream logs rendered");
    let cards = result["content"]["cards"].as_array().expect("cards array");
    assert_eq!(cards.len(), 2);

    assert_eq!(cards[0]["header"]["title"], "Flying again");
    assert_eq!(cards[0]["tags"]["kind"], "chips");
    let chips = cards[0]["tags"]["chips"].as_array().expect("chips array");
    assert_eq!(chips.len(), 2);
    assert_eq!(chips[0]["label"], "flight");
    assert_eq!(chips[1]["label"], "city");
    assert!(!chips[0]["key"].as_str().unwrap().is_empty());

    assert_eq!(cards[1]["tags"]["kind"], "fallback");
    assert_eq!(cards[1]["tags"]["message"], "No tags available");
}

#[test]
fn chip_keys_are_fresh_on_every_run() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, SCENARIO_FEED);

    let key_of = |out: &std::process::Output| -> String {
        let stdout = String::from_utf8_lossy(&out.stdout);
        let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        result["content"]["cards"][0]["tags"]["chips"][0]["key"]
            .as_str()
            .unwrap()
            .to_string()
    };

    let first = dreamfeed()
        .arg("render")
        .arg(&feed)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    let second = dreamfeed()
        .arg("render")
        .arg(&feed)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert_ne!(key_of(&first), key_of(&second));
}

#[test]
fn empty_feed_shows_info_badge() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, "[]");

    dreamfeed()
        .arg("render")
        .arg(&feed)
        .assert()
        .success()
        .stdout(predicate::str::contains("No dream logs in feed"));
}

#[test]
fn limit_cuts_the_feed_and_suggests_more() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, SCENARIO_FEED);

    dreamfeed()
        .arg("render")
        .arg(&feed)
        .arg("--limit")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 dream logs rendered"))
        .stdout(predicate::str::contains("Flying again"))
        .stdout(predicate::str::contains("--limit").or(predicate::str::contains("limit")));
}

#[test]
fn quiet_mode_lists_titles_only() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, SCENARIO_FEED);

    let output = dreamfeed()
        .arg("render")
        .arg(&feed)
        .arg("--quiet")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Flying again"));
    assert!(stdout.contains("Silent hallway"));
    assert!(!stdout.contains("Tags:"));
}

#[test]
fn reads_feed_from_stdin() {
    dreamfeed()
        .arg("render")
        .arg("-")
        .write_stdin(SCENARIO_FEED)
        .assert()
        .success()
        .stdout(predicate::str::contains("Flying again"));
}

#[test]
fn missing_file_fails_with_context() {
    dreamfeed()
        .arg("render")
        .arg("no-such-feed.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read feed file"));
}

#[test]
fn malformed_feed_fails_with_context() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(&dir, "{not json");

    dreamfeed()
        .arg("render")
        .arg(&feed)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse dream log feed"));
}

#[test]
fn record_missing_author_is_rejected() {
    let dir = TempDir::new().unwrap();
    let feed = write_feed(
        &dir,
        r#"[{"title": "t", "published_at": "d", "text_content": "b"}]"#,
    );

    dreamfeed()
        .arg("render")
        .arg(&feed)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse dream log feed"));
}
