//! Black-box negotiation tests against a mock login endpoint
//!
//! Every test drives the real request builder, transport and negotiator;
//! only the service side is mocked.

use std::time::Duration;

use mockito::{Matcher, Server};
use serde_json::json;
use snowtide::{Authenticator, Client, Connection, ConnectionConfig, Error};

const LOGIN_PATH: &str = "/session/v1/login-request";

fn success_body() -> String {
    json!({
        "data": {
            "token": "T1",
            "masterToken": "M1",
            "sessionId": 7,
            "validityInSeconds": 3600,
            "masterValidityInSeconds": 14400,
            "displayUserName": "JANE",
            "serverVersion": "8.4.1",
            "firstLogin": false,
            "parameters": [
                {"name": "TIMEZONE", "value": "UTC"}
            ],
            "sessionInfo": {
                "databaseName": "PROD",
                "schemaName": "PUBLIC",
                "warehouseName": "COMPUTE_WH",
                "roleName": "ANALYST"
            }
        },
        "message": null,
        "code": null,
        "success": true
    })
    .to_string()
}

fn rejection_body(code: &str, message: &str) -> String {
    json!({
        "data": null,
        "message": message,
        "code": code,
        "success": false
    })
    .to_string()
}

/// Configuration pointed at the mock server.
fn test_config(server: &Server) -> snowtide::ConnectionConfigBuilder {
    let address = server.host_with_port();
    let (host, port) = address.split_once(':').expect("host:port");
    ConnectionConfig::builder("acme", "jane")
        .password("hunter2")
        .protocol("http")
        .host(host)
        .port(port.parse().expect("port"))
        .login_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn password_login_commits_the_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Regex("requestId=".into()))
        .match_header("content-type", "application/json")
        .match_header("accept", "application/snowflake")
        .match_body(Matcher::PartialJson(json!({
            "data": {
                "ACCOUNT_NAME": "acme",
                "LOGIN_NAME": "jane",
                "PASSWORD": "hunter2"
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body())
        .create_async()
        .await;

    let mut conn = Connection::new(test_config(&server).build()).unwrap();
    let data = conn.authenticate(b"", b"").await.expect("login");

    assert_eq!(conn.session().token(), "T1");
    assert_eq!(conn.session().master_token(), "M1");
    assert_eq!(conn.session().session_id(), 7);
    assert!(conn.session().is_active());
    assert_eq!(data.display_user_name, "JANE");
    assert_eq!(data.server_version, "8.4.1");
    assert_eq!(data.session_info.role_name.as_deref(), Some("ANALYST"));
    mock.assert_async().await;
}

#[tokio::test]
async fn okta_login_sends_the_saml_assertion() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Regex("requestId=".into()))
        .match_body(Matcher::PartialJson(json!({
            "data": {
                "ACCOUNT_NAME": "acme",
                "RAW_SAML_RESPONSE": "<assertion/>"
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(success_body())
        .create_async()
        .await;

    // Okta identifies the user through the assertion; no user configured.
    let config = test_config(&server)
        .authenticator(Authenticator::Okta)
        .build();
    let config = ConnectionConfig { user: String::new(), ..config };

    let client = Client::connect_with_saml(config, b"<assertion/>")
        .await
        .expect("login");

    assert_eq!(client.session().token(), "T1");
    assert_eq!(client.session().master_token(), "M1");
    assert_eq!(client.session().session_id(), 7);
    mock.assert_async().await;
}

#[tokio::test]
async fn rejected_credentials_clear_the_session() {
    let mut server = Server::new_async().await;
    let success = server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(success_body())
        .create_async()
        .await;

    let mut conn = Connection::new(test_config(&server).build()).unwrap();
    conn.authenticate(b"", b"").await.expect("first login");
    assert!(conn.session().is_active());
    success.remove_async().await;

    server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(rejection_body("390100", "bad creds"))
        .create_async()
        .await;

    let err = conn.authenticate(b"", b"").await.expect_err("rejection");
    match err {
        Error::ConnectionRejected { code, message } => {
            assert_eq!(code, 390100);
            assert_eq!(message, "bad creds");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    // The record is fully cleared, regardless of its prior state.
    assert_eq!(conn.session().token(), "");
    assert_eq!(conn.session().master_token(), "");
    assert_eq!(conn.session().session_id(), -1);
}

#[tokio::test]
async fn unparseable_outcome_code_keeps_the_message() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(rejection_body("ERR-42", "session gone"))
        .create_async()
        .await;

    let mut conn = Connection::new(test_config(&server).build()).unwrap();
    let err = conn.authenticate(b"", b"").await.expect_err("rejection");
    match err {
        Error::ConnectionRejected { code, message } => {
            assert_eq!(code, -1);
            assert_eq!(message, "session gone");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!conn.session().is_active());
}

#[tokio::test]
async fn service_unavailable_is_transient_and_leaves_the_session_alone() {
    let mut server = Server::new_async().await;
    let success = server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(success_body())
        .create_async()
        .await;

    let mut conn = Connection::new(test_config(&server).build()).unwrap();
    conn.authenticate(b"", b"").await.expect("first login");
    success.remove_async().await;

    server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let err = conn.authenticate(b"", b"").await.expect_err("503");
    assert!(matches!(err, Error::ServiceUnavailable { status: 503, .. }));
    assert!(err.is_retryable());

    // Transport failure: the established session is untouched.
    assert_eq!(conn.session().token(), "T1");
    assert_eq!(conn.session().session_id(), 7);
}

#[tokio::test]
async fn transport_rejection_maps_to_connection_rejected() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let mut conn = Connection::new(test_config(&server).build()).unwrap();
    let err = conn.authenticate(b"", b"").await.expect_err("401");
    assert!(matches!(err, Error::ConnectionRejected { .. }));
    assert!(!err.is_retryable());
    assert!(!conn.session().is_active());
}

#[tokio::test]
async fn unexpected_status_is_authentication_failed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Any)
        .with_status(418)
        .with_body("short and stout")
        .create_async()
        .await;

    let mut conn = Connection::new(test_config(&server).build()).unwrap();
    let err = conn.authenticate(b"", b"").await.expect_err("418");
    match err {
        Error::AuthenticationFailed { status, body, .. } => {
            assert_eq!(status, 418);
            assert_eq!(body, "short and stout");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_success_body_is_not_a_rejection() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("this is not json")
        .create_async()
        .await;

    let mut conn = Connection::new(test_config(&server).build()).unwrap();
    let err = conn.authenticate(b"", b"").await.expect_err("bad body");
    assert!(matches!(err, Error::MalformedResponse(_)));
    assert!(!conn.session().is_active());
}

#[tokio::test]
async fn success_without_session_data_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"success": true}).to_string())
        .create_async()
        .await;

    let mut conn = Connection::new(test_config(&server).build()).unwrap();
    let err = conn.authenticate(b"", b"").await.expect_err("no data");
    assert!(matches!(err, Error::MalformedResponse(_)));
}

#[tokio::test]
async fn selectors_and_request_id_are_attached_to_the_url() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("databaseName".into(), "PROD".into()),
            Matcher::UrlEncoded("schemaName".into(), "PUBLIC".into()),
            Matcher::UrlEncoded("warehouse".into(), "COMPUTE_WH".into()),
            Matcher::UrlEncoded("roleName".into(), "ANALYST".into()),
            Matcher::Regex("requestId=".into()),
        ]))
        .with_status(200)
        .with_body(success_body())
        .create_async()
        .await;

    let config = test_config(&server)
        .database("PROD")
        .schema("PUBLIC")
        .warehouse("COMPUTE_WH")
        .role("ANALYST")
        .build();

    let mut conn = Connection::new(config).unwrap();
    conn.authenticate(b"", b"").await.expect("login");
    mock.assert_async().await;
}

#[tokio::test]
async fn each_attempt_uses_a_fresh_request_id() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", LOGIN_PATH)
        .match_query(Matcher::Regex("requestId=".into()))
        .with_status(200)
        .with_body(success_body())
        .expect(2)
        .create_async()
        .await;

    let mut conn = Connection::new(test_config(&server).build()).unwrap();
    conn.authenticate(b"", b"").await.expect("first");
    conn.authenticate(b"", b"").await.expect("second");
    mock.assert_async().await;
}
