//! Integration tests for the directory API client (against a mock server)

use pretty_assertions::assert_eq;

use socdesk::app::{Config, DirectoryClient};
use socdesk::shared::{DirectoryError, Role};

fn client_for(server: &mockito::ServerGuard) -> DirectoryClient {
    DirectoryClient::new(Config::with_server_url(server.url()))
}

#[test]
fn fetch_users_normalizes_records() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/directory/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "users": [
                    {
                        "id": "u-1",
                        "email": "Alice@X.Org",
                        "name": "Alice Wu",
                        "shortName": "Ali",
                        "role": "EB",
                        "createdAt": "2024-09-01T10:00:00Z"
                    },
                    {
                        "id": "u-2",
                        "email": "bob@x.org",
                        "name": "Bob",
                        "role": "Treasurer",
                        "createdAt": "2024-10-05T08:30:00+02:00"
                    }
                ]
            }"#,
        )
        .create();

    let users = client_for(&server).fetch_users().unwrap();
    mock.assert();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].email, "alice@x.org");
    assert_eq!(users[0].short_name.as_deref(), Some("Ali"));
    assert_eq!(users[0].role, Role::Eb);
    // Unknown role tags fold to Member
    assert_eq!(users[1].role, Role::Member);
    assert_eq!(users[1].created_at.to_rfc3339(), "2024-10-05T06:30:00+00:00");
}

#[test]
fn fetch_users_sends_bearer_token() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/directory/users")
        .match_header("authorization", "Bearer session-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"users": []}"#)
        .create();

    let mut config = Config::with_server_url(server.url());
    config.set_token(Some("session-token".to_string()));
    let users = DirectoryClient::new(config).fetch_users().unwrap();
    mock.assert();
    assert!(users.is_empty());
}

#[test]
fn fetch_users_reports_error_status() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/directory/users")
        .with_status(503)
        .with_body("directory unavailable")
        .create();

    let err = client_for(&server).fetch_users().unwrap_err();
    match err {
        DirectoryError::Status { code, message } => {
            assert_eq!(code, 503);
            assert_eq!(message, "directory unavailable");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[test]
fn fetch_users_rejects_undecodable_body() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/directory/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all")
        .create();

    let err = client_for(&server).fetch_users().unwrap_err();
    assert!(matches!(err, DirectoryError::Decode { .. }));
}

#[test]
fn fetch_users_rejects_malformed_timestamp() {
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/api/directory/users")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "users": [
                    {
                        "id": "u-1",
                        "email": "alice@x.org",
                        "name": "Alice Wu",
                        "role": "Member",
                        "createdAt": "last tuesday"
                    }
                ]
            }"#,
        )
        .create();

    let err = client_for(&server).fetch_users().unwrap_err();
    match err {
        DirectoryError::InvalidRecord { field, .. } => assert_eq!(field, "createdAt"),
        other => panic!("expected InvalidRecord, got {other:?}"),
    }
}
