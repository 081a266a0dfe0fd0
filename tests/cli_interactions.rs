//! CLI option validation and binary-level behavior tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Helper function to create a test command
fn create_test_cmd() -> Command {
    Command::cargo_bin("bcbench").unwrap()
}

#[test]
fn test_help_lists_all_flags() {
    create_test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--depth"))
        .stdout(predicate::str::contains("--repeats"))
        .stdout(predicate::str::contains("--timeout"));
}

#[test]
fn test_version_flag() {
    create_test_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("breadcrumb-bench"));
}

#[test]
fn test_zero_repeats_exits_one_with_message() {
    create_test_cmd()
        .arg("--repeats")
        .arg("0")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("--repeats must be at least 1"));
}

#[test]
fn test_conflicting_color_flags_exit_one() {
    create_test_cmd()
        .arg("--color")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("--color"));
}

#[test]
fn test_malformed_base_url_exits_one() {
    create_test_cmd()
        .arg("--base-url")
        .arg("not a url")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Invalid base URL"));
}

#[test]
fn test_non_http_scheme_rejected() {
    create_test_cmd()
        .arg("--base-url")
        .arg("ftp://localhost/api")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("http"));
}

#[test]
fn test_unreachable_server_exits_one() {
    // Port 9 (discard) refuses connections immediately on loopback.
    create_test_cmd()
        .arg("--base-url")
        .arg("http://127.0.0.1:9/api")
        .arg("--depth")
        .arg("1")
        .arg("--repeats")
        .arg("1")
        .arg("--timeout")
        .arg("2")
        .arg("--no-color")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("[NETWORK]"));
}

#[test]
fn test_binary_happy_path_against_mock_server() {
    let rt = tokio::runtime::Runtime::new().unwrap();

    rt.block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/register"))
            .respond_with(ResponseTemplate::new(201))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "tok-cli" })),
            )
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/files/directory"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "uuid": "u-leaf" })))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/files/uuid/u-leaf/breadcrumb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let base_url = server.uri();

        // Drive the binary from a blocking thread so the mock server keeps
        // serving on this runtime while the child process runs.
        tokio::task::spawn_blocking(move || {
            create_test_cmd()
                .arg("--base-url")
                .arg(&base_url)
                .arg("--depth")
                .arg("2")
                .arg("--repeats")
                .arg("2")
                .arg("--no-color")
                .assert()
                .success()
                .stdout(predicate::str::contains("registering user: bench_"))
                .stdout(predicate::str::contains("creating directory chain depth=2"))
                .stdout(predicate::str::contains("warming up breadcrumb"))
                .stdout(predicate::str::contains("measuring breadcrumb for uuid=u-leaf"))
                .stdout(predicate::str::contains("first_call_ms="))
                .stdout(predicate::str::contains("avg_ms="))
                .stdout(predicate::str::contains("p95_ms="));
        })
        .await
        .unwrap();
    });
}
