// ABOUTME: Integration tests for the mediaref CLI binary.
// ABOUTME: Tests classification from args, stdin, and files, plus format, image, host, and timecode.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn mediaref_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mediaref").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("MEDIAREF_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn classify_args_outputs_results() {
    let output = stdout_json(
        mediaref_cmd()
            .arg("classify")
            .arg("--compact")
            .arg("https://youtu.be/dQw4w9WgXcQ")
            .arg("https://twitch.tv/videos/123456789"),
    );

    assert_eq!(
        output,
        json!([
            {
                "input": "https://youtu.be/dQw4w9WgXcQ",
                "result": {"type": "yt", "id": "dQw4w9WgXcQ"},
                "rule": "youtu-be"
            },
            {
                "input": "https://twitch.tv/videos/123456789",
                "result": {"type": "tv", "id": "v123456789"},
                "rule": "twitch-videos"
            }
        ])
    );
}

#[test]
fn classify_unmatched_exits_nonzero() {
    mediaref_cmd()
        .arg("classify")
        .arg("not a link")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"result\": null"));
}

#[test]
fn classify_json_input_keeps_sentinel() {
    let output = stdout_json(
        mediaref_cmd()
            .arg("classify")
            .arg("--json-input")
            .arg("42")
            .arg("\"nothing\""),
    );

    assert_eq!(output[0]["result"], json!({"type": null, "id": null}));
    assert_eq!(output[1]["result"], Value::Null);
    assert_eq!(output[1]["input"], json!("nothing"));
}

#[test]
fn classify_reads_stdin() {
    assert_cmd::Command::cargo_bin("mediaref")
        .unwrap()
        .env_remove("RUST_LOG")
        .arg("classify")
        .arg("-")
        .write_stdin("vi:76979871\n\n  \nfi:https://example.com/a.mp4?x=1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"76979871\""))
        .stdout(predicate::str::contains("https://example.com/a.mp4?x=1"));
}

#[test]
fn classify_reads_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("links.txt");
    fs::write(
        &path,
        "https://clips.twitch.tv/AwkwardHelpfulSalamander\nhttps://vimeo.com/1\n",
    )
    .unwrap();

    let output = stdout_json(mediaref_cmd().arg("classify").arg("--file").arg(&path));
    let types: Vec<&str> = output
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["result"]["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["tc", "vi"]);
}

#[test]
fn classify_file_with_byte_order_mark() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("links.txt");
    fs::write(&path, "\u{FEFF}yt:dQw4w9WgXcQ\nrtmp://live.example.com/app\n").unwrap();

    let output = stdout_json(mediaref_cmd().arg("classify").arg("--file").arg(&path));
    assert_eq!(output[0]["result"], json!({"type": "yt", "id": "dQw4w9WgXcQ"}));
    assert_eq!(output[0]["rule"], json!("shorthand"));
    assert_eq!(output[1]["result"], json!({"type": "rt", "id": "rtmp://live.example.com/app"}));
}

#[test]
fn classify_json_input_reports_rule_for_text_only() {
    let output = stdout_json(
        mediaref_cmd()
            .arg("classify")
            .arg("--json-input")
            .arg("\"vi:76979871\"")
            .arg("[1]"),
    );

    assert_eq!(output[0]["result"], json!({"type": "vi", "id": "76979871"}));
    assert_eq!(output[0]["rule"], json!("shorthand"));
    assert_eq!(output[1]["rule"], Value::Null);
}

#[test]
fn classify_missing_file_fails() {
    mediaref_cmd()
        .arg("classify")
        .arg("--file")
        .arg("/definitely/not/here.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn classify_without_inputs_fails() {
    mediaref_cmd()
        .arg("classify")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one input is required"));
}

#[test]
fn format_long_and_short() {
    mediaref_cmd()
        .args(["format", "yt", "dQw4w9WgXcQ"])
        .assert()
        .success()
        .stdout("https://youtu.be/dQw4w9WgXcQ\n");

    mediaref_cmd()
        .args(["format", "yt", "dQw4w9WgXcQ", "--short"])
        .assert()
        .success()
        .stdout("yt:dQw4w9WgXcQ\n");
}

#[test]
fn format_unknown_type_fails() {
    mediaref_cmd()
        .args(["format", "xy", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no link for type"));
}

#[test]
fn image_reports_host_and_rejections() {
    let mut cmd = mediaref_cmd();
    cmd.args([
        "image",
        "https://media.discordapp.net/attachments/1/2/a.png?ex=1",
        "http://i.gyazo.com/x.png",
    ]);
    cmd.assert().failure().code(1);

    let output = stdout_json(&mut cmd);
    assert_eq!(
        output,
        json!([
            {
                "input": "https://media.discordapp.net/attachments/1/2/a.png?ex=1",
                "valid": true,
                "url": "https://media.discordapp.net/attachments/1/2/a.png",
                "host": "discord"
            },
            {
                "input": "http://i.gyazo.com/x.png",
                "valid": false,
                "url": null,
                "host": null
            }
        ])
    );
}

#[test]
fn host_prints_hostnames() {
    mediaref_cmd()
        .args(["host", "https://www.youtube.com/watch?v=x", "https://vimeo.com/1"])
        .assert()
        .success()
        .stdout("youtube.com\nvimeo.com\n");
}

#[test]
fn timecode_converts_both_ways() {
    mediaref_cmd()
        .args(["timecode", "1:01:01"])
        .assert()
        .success()
        .stdout("3661\n");

    mediaref_cmd()
        .args(["timecode", "3661", "--letters"])
        .assert()
        .success()
        .stdout("1h01m01s\n");

    mediaref_cmd()
        .args(["timecode", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timecode"));
}

#[test]
fn debug_log_level_reports_rules() {
    mediaref_cmd()
        .args(["--log-level", "debug", "classify", "yt:dQw4w9WgXcQ"])
        .assert()
        .success()
        .stderr(predicate::str::contains("classified"))
        .stderr(predicate::str::contains("shorthand"))
        .stderr(predicate::str::contains("dQw4w9WgXcQ"));
}
