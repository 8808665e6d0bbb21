//! End-to-end tests for the comment-clip binary

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_template_then_generate() {
    let temp = tempfile::tempdir().unwrap();

    Command::cargo_bin("comment-clip")
        .unwrap()
        .current_dir(temp.path())
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("comments_template.csv"));

    Command::cargo_bin("comment-clip")
        .unwrap()
        .current_dir(temp.path())
        .args([
            "generate",
            "--input",
            "comments_template.csv",
            "--date",
            "2025-09-01",
            "--output",
            "out.html",
        ])
        .assert()
        .success();

    let html = std::fs::read_to_string(temp.path().join("out.html")).unwrap();
    assert!(html.contains("COMMENT CLIP"));
    assert!(html.contains("週刊 税務通信"));
    assert!(html.contains("📅 9月1日配信号"));
    assert!(html.contains("第3742号"));
    assert!(html.contains("記事を読む"));
}

#[test]
fn test_generate_default_output_name_from_date() {
    let temp = tempfile::tempdir().unwrap();

    Command::cargo_bin("comment-clip")
        .unwrap()
        .current_dir(temp.path())
        .arg("template")
        .assert()
        .success();

    Command::cargo_bin("comment-clip")
        .unwrap()
        .current_dir(temp.path())
        .args([
            "generate",
            "--input",
            "comments_template.csv",
            "--date",
            "2025-09-01",
            "--date-style",
            "ymd",
        ])
        .assert()
        .success();

    let html = std::fs::read_to_string(temp.path().join("comment_clip_20250901.html")).unwrap();
    assert!(html.contains("📅 2025年9月1日配信号"));
}

#[test]
fn test_generate_stdout() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(
        temp.path().join("cards.csv"),
        "issue,title,comment,name,org,link\n第1号,題,本文,田中 太郎,事務所,\n",
    )
    .unwrap();

    Command::cargo_bin("comment-clip")
        .unwrap()
        .current_dir(temp.path())
        .args([
            "generate",
            "--input",
            "cards.csv",
            "--date",
            "2025-09-01",
            "--stdout",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("#article1"));
}

#[test]
fn test_generate_reports_missing_columns() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("bad.csv"), "issue,title\n第1号,題\n").unwrap();

    Command::cargo_bin("comment-clip")
        .unwrap()
        .current_dir(temp.path())
        .args(["generate", "--input", "bad.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required columns"))
        .stderr(predicate::str::contains("link"));
}

#[test]
fn test_config_init_and_show() {
    let temp = tempfile::tempdir().unwrap();

    Command::cargo_bin("comment-clip")
        .unwrap()
        .current_dir(temp.path())
        .args(["config", "init"])
        .assert()
        .success();
    assert!(temp.path().join("clip.toml").exists());

    Command::cargo_bin("comment-clip")
        .unwrap()
        .current_dir(temp.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("comment_bar_color"));
}
