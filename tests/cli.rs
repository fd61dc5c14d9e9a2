use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Command with an isolated, nonexistent config and no credential overrides
fn groktutor(dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("groktutor"));
    cmd.arg("--config")
        .arg(dir.join("config.yaml"))
        .env_remove("GROKTUTOR_CONFIG")
        .env_remove("GROKTUTOR_FORMAT")
        .env_remove("GROKTUTOR_SAMPLE")
        .env_remove("GROKTUTOR_REDDIT_CLIENT_ID")
        .env_remove("GROKTUTOR_REDDIT_CLIENT_SECRET")
        .env_remove("GROKTUTOR_TWITTER_BEARER_TOKEN")
        .env_remove("GROKTUTOR_GITHUB_TOKEN")
        .env_remove("GROKTUTOR_HUGGINGFACE_TOKEN");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn feed_reddit_serves_samples_without_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    groktutor(temp.path())
        .args(["--sample", "--format", "table", "feed", "reddit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rd1"))
        .stdout(predicate::str::contains("r/PromptEngineering"));

    Ok(())
}

#[test]
fn feed_limit_caps_records() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = groktutor(temp.path())
        .args(["--sample", "--format", "json", "feed", "twitter", "--limit", "2"])
        .assert()
        .success();

    let json = stdout_json(assert.get_output());
    assert_eq!(json["data"]["source"], "twitter");
    assert_eq!(json["data"]["data"]["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["meta"]["sample_data"], true);

    Ok(())
}

#[test]
fn feed_all_returns_every_source() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = groktutor(temp.path())
        .args(["--sample", "--format", "json", "feed", "all"])
        .assert()
        .success();

    let json = stdout_json(assert.get_output());
    assert_eq!(json["data"]["source"], "all");
    for source in ["reddit", "twitter", "github", "huggingface"] {
        assert_eq!(json["data"]["data"][source]["origin"], "sample", "{source}");
    }
    assert!(json["data"]["data"]["timestamp"].is_string());

    Ok(())
}

#[test]
fn feed_unknown_source_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    groktutor(temp.path())
        .args(["--sample", "feed", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid data source: bogus"));

    Ok(())
}

#[test]
fn nav_breadcrumbs_follow_hierarchy() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    groktutor(temp.path())
        .args(["nav", "breadcrumbs", "/skills/reasoning/chain-of-thought"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Home › Prompt Engineering Skills › Reasoning & Logic › Chain-of-Thought Prompting",
        ));

    Ok(())
}

#[test]
fn nav_related_ranks_by_relevance() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = groktutor(temp.path())
        .args([
            "--format",
            "json",
            "nav",
            "related",
            "chain-of-thought-guide",
            "--limit",
            "2",
        ])
        .assert()
        .success();

    let json = stdout_json(assert.get_output());
    let ids: Vec<&str> = json["data"]
        .as_array()
        .expect("related list")
        .iter()
        .filter_map(|entry| entry["id"].as_str())
        .collect();
    assert_eq!(
        ids,
        vec!["tree-of-thought-comparison", "reasoning-benchmark-results"]
    );

    Ok(())
}

#[test]
fn nav_recommend_without_history_is_popular() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = groktutor(temp.path())
        .args(["--format", "json", "nav", "recommend", "--limit", "1"])
        .assert()
        .success();

    let json = stdout_json(assert.get_output());
    assert_eq!(json["data"][0]["id"], "chain-of-thought-guide");
    assert_eq!(json["data"][0]["popularity"], 95);

    Ok(())
}

#[test]
fn search_matches_sections_and_content() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    let assert = groktutor(temp.path())
        .args(["--format", "json", "search", "  Tree  "])
        .assert()
        .success();

    let json = stdout_json(assert.get_output());
    let sections: Vec<&str> = json["data"]["sections"]
        .as_array()
        .expect("sections")
        .iter()
        .filter_map(|s| s["id"].as_str())
        .collect();
    assert_eq!(sections, vec!["tree-of-thought"]);
    assert!(
        json["data"]["content"]
            .as_array()
            .expect("content")
            .iter()
            .any(|c| c["id"] == "tot-implementation-code")
    );

    Ok(())
}

#[test]
fn status_without_config_suggests_init() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    groktutor(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file"))
        .stdout(predicate::str::contains("groktutor init"));

    Ok(())
}

#[test]
fn invalid_config_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("config.yaml"), "feed_limit: 0\n")?;

    groktutor(temp.path())
        .args(["feed", "reddit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("feed_limit"));

    Ok(())
}

#[test]
fn completion_generates_script() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    groktutor(temp.path())
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("groktutor"));

    Ok(())
}

fn write_github_config(dir: &Path, base_url: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    let contents = format!(
        "github:\n  token: test-token\n  base_url: {base_url}\n  topics:\n    - llm\n"
    );
    fs::write(&path, contents).expect("failed to write config");
    path
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn feed_github_uses_live_api_when_configured() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _search = server
        .mock("GET", "/search/repositories")
        .match_query(mockito::Matcher::UrlEncoded("q".into(), "topic:llm".into()))
        .match_header("authorization", "token test-token")
        .with_status(200)
        .with_body(
            r#"{"items": [{
                "id": 7, "name": "prompt-kit", "owner": {"login": "octo"},
                "stargazers_count": 1200, "description": "Prompt toolkit",
                "updated_at": "2025-01-15T10:00:00Z",
                "html_url": "https://github.com/octo/prompt-kit",
                "language": "Rust", "forks_count": 3, "open_issues_count": 1
            }]}"#,
        )
        .create();

    let temp = tempdir()?;
    write_github_config(temp.path(), &server.url());

    let assert = groktutor(temp.path())
        .args(["--format", "json", "feed", "github"])
        .assert()
        .success();

    let json = stdout_json(assert.get_output());
    assert_eq!(json["data"]["data"]["origin"], "live");
    assert_eq!(json["data"]["data"]["items"][0]["repo"], "prompt-kit");
    assert_eq!(json["meta"]["sample_data"], false);

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn feed_github_falls_back_on_server_error() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();
    let _search = server
        .mock("GET", "/search/repositories")
        .match_query(mockito::Matcher::Any)
        .with_status(500)
        .create();

    let temp = tempdir()?;
    write_github_config(temp.path(), &server.url());

    let assert = groktutor(temp.path())
        .args(["--format", "json", "feed", "github"])
        .assert()
        .success();

    let json = stdout_json(assert.get_output());
    assert_eq!(json["data"]["data"]["origin"], "sample");

    Ok(())
}
