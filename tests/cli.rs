//! End-to-end tests of the binary's stdout and exit-code contract.

use std::io::Write;
use std::process::Output;
use tempfile::NamedTempFile;
use tokio::process::Command;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_FIXTURE: &str = include_str!("fixtures/search_result.html");

fn config_file(base_url: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "region = \"in\"\ntimeout_secs = 5\nbase_url = \"{}\"", base_url).unwrap();
    file
}

async fn run(args: &[&str], config: Option<&NamedTempFile>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_amz-scout"));
    cmd.env_remove("AMZ_REGION")
        .env_remove("AMZ_TIMEOUT")
        .env_remove("AMZ_BASE_URL")
        .env_remove("RUST_LOG");
    // Options go before the query; anything after it is ignored.
    if let Some(file) = config {
        cmd.arg("--config").arg(file.path());
    }
    cmd.args(args).output().await.unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(String::from).collect()
}

#[tokio::test]
async fn test_missing_query_exits_1_without_stdout() {
    let output = run(&[], None).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}

#[tokio::test]
async fn test_network_failure_prints_null() {
    let config = config_file("http://127.0.0.1:1");
    let output = run(&["wireless mouse"], Some(&config)).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["null"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error making request"));
}

#[tokio::test]
async fn test_server_error_prints_null() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/s"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = config_file(&mock_server.uri());
    let output = run(&["wireless mouse"], Some(&config)).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["null"]);
}

#[tokio::test]
async fn test_no_results_prints_null() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/s"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&mock_server)
        .await;

    let config = config_file(&mock_server.uri());
    let output = run(&["nothing here"], Some(&config)).await;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["null"]);
}

#[tokio::test]
async fn test_first_product_printed_as_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/s"))
        .and(query_param("k", "wireless mouse"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(SEARCH_FIXTURE),
        )
        .mount(&mock_server)
        .await;

    let config = config_file(&mock_server.uri());
    let output = run(&["wireless mouse"], Some(&config)).await;

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);

    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["raw_price"], 1295);
    assert_eq!(value["price"], "₹1,295");
    assert_eq!(value["raw_rating"], 4.3);
    assert!(value["title"].as_str().unwrap().contains("Logitech"));
    assert!(value["product_link"]
        .as_str()
        .unwrap()
        .starts_with(&format!("{}/Logitech-M331", mock_server.uri())));
}

#[tokio::test]
async fn test_unreadable_config_exits_1() {
    let output = run(&["--config", "/nonexistent/amz-scout.toml", "mouse"], None).await;

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to read config file"));
}

async fn fixture_server(query: &str) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/s"))
        .and(query_param("k", query))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_FIXTURE))
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_hyphen_prefixed_query_is_searched() {
    let mock_server = fixture_server("-5 mouse").await;

    let config = config_file(&mock_server.uri());
    let output = run(&["-5 mouse"], Some(&config)).await;

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["raw_price"], 1295);
}

#[tokio::test]
async fn test_extra_arguments_are_ignored() {
    let mock_server = fixture_server("wireless mouse").await;

    let config = config_file(&mock_server.uri());
    let output = run(&["wireless mouse", r#"{"min_price": 1000}"#, "--verbose"], Some(&config)).await;

    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["price"], "₹1,295");
}

#[tokio::test]
async fn test_help_keeps_stdout_empty() {
    let output = run(&["--help"], None).await;

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}
