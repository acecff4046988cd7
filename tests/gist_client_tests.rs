//! Gist client tests against a mock API server
//! Tests cover request shapes, token passing and per-operation error handling

mod support;

use gost::gist::{DeleteOutcome, GistClient, GistFile, GistRequest};
use mockito::{Matcher, Server};
use serde_json::json;
use support::gist_json;

#[tokio::test]
async fn test_list_gists_sends_token_as_query_parameter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/gists")
        .match_query(Matcher::UrlEncoded(
            "access_token".into(),
            "secret".into(),
        ))
        .match_header("user-agent", Matcher::Regex("^gost/".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!([gist_json("a1", &[], &[]), gist_json("b2", &[], &[])]).to_string())
        .create_async()
        .await;

    let client = GistClient::new(server.url(), Some("secret".to_string()));
    let gists = client.list_gists(None).await.unwrap();

    mock.assert_async().await;
    assert_eq!(gists.len(), 2);
    assert_eq!(gists[0].html_url, "https://gist.example.com/a1");
    assert_eq!(gists[1].id, "b2");
}

#[tokio::test]
async fn test_list_gists_without_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/gists")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    let gists = client.list_gists(None).await.unwrap();

    mock.assert_async().await;
    assert!(gists.is_empty());
}

#[tokio::test]
async fn test_list_gists_for_user() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/octocat/gists")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    client.list_gists(Some("octocat")).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_gists_malformed_json() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gists")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    let result = client.list_gists(None).await;

    assert!(result.is_err());
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse gist list response")
    );
}

#[tokio::test]
async fn test_list_gists_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gists")
        .with_status(401)
        .with_body(json!({"message": "Bad credentials"}).to_string())
        .create_async()
        .await;

    let client = GistClient::new(server.url(), Some("wrong".to_string()));
    let error = client.list_gists(None).await.unwrap_err().to_string();

    assert!(error.contains("401"));
    assert!(error.contains("Bad credentials"));
}

#[tokio::test]
async fn test_create_gist_request_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/gists")
        .match_body(Matcher::Json(json!({
            "description": "d",
            "public": true,
            "files": { "foo.txt": { "content": "hi" } }
        })))
        .with_status(201)
        .with_body(gist_json("new1", &[("foo.txt", "hi")], &[(1, 0)]).to_string())
        .create_async()
        .await;

    let client = GistClient::new(server.url(), Some("secret".to_string()));
    let request = GistRequest::create(GistFile::new("foo.txt", "hi"), "d", true);
    let gist = client.create_gist(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(gist.html_url, "https://gist.example.com/new1");
}

#[tokio::test]
async fn test_create_gist_api_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/gists")
        .with_status(422)
        .with_body(json!({"message": "Validation Failed"}).to_string())
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    let request = GistRequest::create(GistFile::new("foo.txt", ""), "", false);
    let error = client.create_gist(&request).await.unwrap_err().to_string();

    assert!(error.contains("Validation Failed"));
}

#[tokio::test]
async fn test_update_gist_patches_by_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/gists/abc123")
        .match_body(Matcher::Json(json!({
            "files": { "foo.txt": { "content": "new" } }
        })))
        .with_status(200)
        .with_body(gist_json("abc123", &[("foo.txt", "new")], &[(5, 2), (1, 0), (3, 0)]).to_string())
        .create_async()
        .await;

    let client = GistClient::new(server.url(), Some("secret".to_string()));
    let request = GistRequest::update(GistFile::new("foo.txt", "new"), None);
    let gist = client.update_gist("abc123", &request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(gist.history.len(), 3);
    assert_eq!(
        gist.revision_summary().unwrap(),
        "Revision 3 (2 deletions & 5 additions)"
    );
}

#[tokio::test]
async fn test_update_gist_surfaces_api_message() {
    let mut server = Server::new_async().await;
    server
        .mock("PATCH", "/gists/abc123")
        .with_status(404)
        .with_body(json!({"message": "Not Found", "documentation_url": "https://docs"}).to_string())
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    let request = GistRequest::update(GistFile::new("foo.txt", "new"), None);
    let error = client.update_gist("abc123", &request).await.unwrap_err();

    assert_eq!(error.to_string(), "Not Found");
}

#[tokio::test]
async fn test_update_gist_malformed_body() {
    let mut server = Server::new_async().await;
    server
        .mock("PATCH", "/gists/abc123")
        .with_status(200)
        .with_body("<html>oops</html>")
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    let request = GistRequest::update(GistFile::new("foo.txt", "new"), None);

    assert!(client.update_gist("abc123", &request).await.is_err());
}

#[tokio::test]
async fn test_delete_gist_no_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/gists/abc123")
        .with_status(204)
        .create_async()
        .await;

    let client = GistClient::new(server.url(), Some("secret".to_string()));
    let outcome = client.delete_gist("abc123").await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome, DeleteOutcome::Deleted);
}

#[tokio::test]
async fn test_delete_gist_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("DELETE", "/gists/abc123")
        .with_status(404)
        .with_body("this body is never parsed")
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    let outcome = client.delete_gist("abc123").await.unwrap();

    assert_eq!(outcome, DeleteOutcome::NotFound);
}

#[tokio::test]
async fn test_get_gist_success() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gists/abc123")
        .with_status(200)
        .with_body(gist_json("abc123", &[("a.txt", "A"), ("b.txt", "B")], &[(2, 0)]).to_string())
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    let gist = client.get_gist("abc123").await.unwrap();

    assert_eq!(gist.files.len(), 2);
    assert_eq!(gist.files["a.txt"].content.as_deref(), Some("A"));
}

#[tokio::test]
async fn test_get_gist_error_message() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gists/missing")
        .with_status(404)
        .with_body(json!({"message": "Not Found"}).to_string())
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    let error = client.get_gist("missing").await.unwrap_err();

    assert_eq!(error.to_string(), "Sorry, Not Found");
}

#[tokio::test]
async fn test_get_gist_error_without_message_uses_reason() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/gists/abc123")
        .with_status(503)
        .with_body("")
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    let error = client.get_gist("abc123").await.unwrap_err();

    assert_eq!(error.to_string(), "Sorry, Service Unavailable");
}

#[tokio::test]
async fn test_transport_error() {
    // Nothing listens on port 9 (discard) in the test environment
    let client = GistClient::new("http://127.0.0.1:9", None);
    assert!(client.list_gists(None).await.is_err());
}

#[tokio::test]
async fn test_transport_error_redacts_token() {
    let client = GistClient::new("http://127.0.0.1:9", Some("supersecret".to_string()));
    let error = client.delete_gist("abc123").await.unwrap_err();

    let message = format!("{:#}", error);
    let debug = format!("{:?}", error);
    assert!(!message.contains("supersecret"), "token leaked: {message}");
    assert!(!debug.contains("supersecret"), "token leaked: {debug}");
    assert!(message.contains("access_token=***"));
}

#[tokio::test]
async fn test_dot_segments_never_reach_the_server() {
    let mut server = Server::new_async().await;
    let root = server
        .mock("DELETE", Matcher::Any)
        .with_status(204)
        .expect(0)
        .create_async()
        .await;
    let users = server
        .mock("GET", Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .expect(0)
        .create_async()
        .await;

    let client = GistClient::new(server.url(), None);
    assert!(client.delete_gist("..").await.is_err());
    assert!(client.delete_gist(".").await.is_err());
    assert!(client.list_gists(Some("..")).await.is_err());

    root.assert_async().await;
    users.assert_async().await;
}
