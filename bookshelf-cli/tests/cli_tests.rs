//! Integration tests for the Bookshelf CLI

use assert_cmd::Command;
use axum::{http::StatusCode, routing::get, Json, Router};
use predicates::prelude::*;
use serde_json::{json, Value};
use tokio::runtime::Runtime;

async fn list_books() -> Json<Value> {
    Json(json!([
        {"id": 1, "name": "Dune", "author": "Herbert", "img": "dune.jpg", "genres": ["Sci-Fi"], "stars": 5},
        {"id": 2, "name": "Emma", "author": "Austen", "img": "emma.jpg", "genres": ["Romance"], "stars": 4}
    ]))
}

async fn create_book(Json(mut body): Json<Value>) -> Json<Value> {
    body["id"] = json!(3);
    Json(body)
}

async fn broken() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Serve `router` in the background; the runtime must outlive the test
fn spawn_server(router: Router) -> (Runtime, String) {
    let runtime = Runtime::new().expect("Failed to create runtime");
    let base = runtime.block_on(async move {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    });
    (runtime, base)
}

fn books_server() -> (Runtime, String) {
    spawn_server(Router::new().route("/books", get(list_books).post(create_book)))
}

fn broken_server() -> (Runtime, String) {
    spawn_server(Router::new().route("/books", get(broken)))
}

fn bookshelf() -> Command {
    let mut cmd = Command::cargo_bin("bookshelf").unwrap();
    cmd.env_remove("BOOKSHELF_BASE_URL")
        .env_remove("BOOKSHELF_NOTICE_TTL_SECS");
    cmd
}

#[test]
fn test_help() {
    bookshelf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("post"))
        .stdout(predicate::str::contains("delete"));
}

#[test]
fn test_version() {
    bookshelf()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookshelf"));
}

#[test]
fn test_list_help() {
    bookshelf()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("List books"))
        .stdout(predicate::str::contains("--search"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_post_requires_data() {
    bookshelf()
        .args(["post", "books"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--data"));
}

#[test]
fn test_invalid_base_url() {
    bookshelf()
        .args(["--base-url", "not a url", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid base URL"));
}

#[test]
fn test_list_renders_cards() {
    let (_runtime, base) = books_server();

    bookshelf()
        .args(["--base-url", &base, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[success] operation succeeded"))
        .stdout(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("[Romance]"))
        .stdout(predicate::str::contains("★★★★☆  [Learn More]"));
}

#[test]
fn test_list_reads_base_url_from_environment() {
    let (_runtime, base) = books_server();

    bookshelf()
        .env("BOOKSHELF_BASE_URL", &base)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma"));
}

#[test]
fn test_list_with_search() {
    let (_runtime, base) = books_server();

    bookshelf()
        .args(["--base-url", &base, "list", "--search", "aus"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emma"))
        .stdout(predicate::str::contains("Dune").not())
        .stdout(predicate::str::contains("1 of 2 books match \"aus\""));
}

#[test]
fn test_list_json() {
    let (_runtime, base) = books_server();

    let output = bookshelf()
        .args(["--base-url", &base, "list", "--json", "--search", "SCI-FI"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let books: Value = serde_json::from_slice(&output.stdout).unwrap();
    let books = books.as_array().unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["name"], "Dune");
    assert_eq!(books[0]["id"], "1");
}

#[test]
fn test_list_server_error() {
    let (_runtime, base) = broken_server();

    bookshelf()
        .args(["--base-url", &base, "list"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "[error] Error: Request failed with status code 500",
        ))
        .stderr(predicate::str::contains("Failed to fetch books"));
}

#[test]
fn test_list_json_server_error_prints_banner() {
    let (_runtime, base) = broken_server();

    bookshelf()
        .args(["--base-url", &base, "list", "--json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "[error] Error: Request failed with status code 500",
        ));
}

#[test]
fn test_browse_keeps_spaces_in_terms() {
    let (_runtime, base) = books_server();

    bookshelf()
        .args(["--base-url", &base, "browse"])
        .write_stdin("sci \r\nsci\n:q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No books match \"sci \"."))
        .stdout(predicate::str::contains("1 of 2 books match \"sci\""));
}

#[test]
fn test_browse_filters_stdin_terms() {
    let (_runtime, base) = books_server();

    bookshelf()
        .args(["--base-url", &base, "browse"])
        .write_stdin("herb\n:q\nemma\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 books match \"herb\""))
        .stdout(predicate::str::contains("match \"emma\"").not());
}

#[test]
fn test_get_quiet_prints_json_only() {
    let (_runtime, base) = books_server();

    bookshelf()
        .args(["--base-url", &base, "get", "books", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"Dune\""))
        .stderr(predicate::str::contains("operation succeeded").not());
}

#[test]
fn test_post_reports_success() {
    let (_runtime, base) = books_server();

    bookshelf()
        .args(["--base-url", &base, "post", "books", "--data", r#"{"name": "Ulysses"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 3"))
        .stderr(predicate::str::contains("[success] operation succeeded"));
}

#[test]
fn test_post_rejects_invalid_json() {
    bookshelf()
        .args(["post", "books", "--data", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}
