//! Integration tests for issue creation using a wiremock server

use std::time::Duration;

use jira_issue_form::{
    api::{ApiError, IssueType},
    build_issue_payload, JiraClient, JiraConfig,
};

use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const AUTHORIZATION: &str = "Basic dXNlckBleGFtcGxlLmNvbTpzZWNyZXQtdG9rZW4=";

fn config_for(base_url: &str) -> JiraConfig {
    JiraConfig {
        base_url: base_url.to_string(),
        email: "user@example.com".to_string(),
        api_token: "secret-token".to_string(),
        project_key: "SCRUM".to_string(),
    }
}

#[tokio::test]
async fn test_create_issue_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .and(header("Authorization", AUTHORIZATION))
        .and(header("Content-Type", "application/json"))
        .and(header("Accept", "application/json"))
        .and(body_json(json!({
            "fields": {
                "project": { "key": "SCRUM" },
                "summary": "Test Issue",
                "description": {
                    "type": "doc",
                    "version": 1,
                    "content": [{
                        "type": "paragraph",
                        "content": [{ "type": "text", "text": "Test Description" }]
                    }]
                },
                "issuetype": { "name": "Task" }
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "10000",
            "key": "SCRUM-1",
            "self": "https://example.atlassian.net/rest/api/3/issue/10000"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(&config_for(&mock_server.uri())).unwrap();
    let payload = build_issue_payload("SCRUM", "Test Issue", "Test Description", "Task");
    let issue = client.create_issue(&payload).await.unwrap();

    assert_eq!(issue.key(), Some("SCRUM-1"));
    assert_eq!(issue.id().as_deref(), Some("10000"));
    assert_eq!(
        issue.self_url(),
        Some("https://example.atlassian.net/rest/api/3/issue/10000")
    );
}

#[tokio::test]
async fn test_create_issue_numeric_issue_type_sent_as_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .and(wiremock::matchers::body_string_contains(r#""issuetype":{"id":"10001"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "key": "SCRUM-2" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(&config_for(&mock_server.uri())).unwrap();
    let payload = build_issue_payload("SCRUM", "s", "d", IssueType::parse("10001"));
    let issue = client.create_issue(&payload).await.unwrap();

    assert_eq!(issue.key(), Some("SCRUM-2"));
}

#[tokio::test]
async fn test_trailing_slash_base_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "key": "SCRUM-3" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/", mock_server.uri());
    let client = JiraClient::new(&config_for(&base_url)).unwrap();
    let payload = build_issue_payload("SCRUM", "s", "d", "Task");
    let issue = client.create_issue(&payload).await.unwrap();

    assert_eq!(issue.key(), Some("SCRUM-3"));
}

#[tokio::test]
async fn test_create_issue_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errorMessages": [],
            "errors": { "issuetype": "Specify an issue type" }
        })))
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(&config_for(&mock_server.uri())).unwrap();
    let payload = build_issue_payload("SCRUM", "s", "d", "Nonexistent");
    let err = client.create_issue(&payload).await.unwrap_err();

    match err {
        ApiError::HttpStatus {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "issuetype: Specify an issue type");
            assert!(body.contains("Specify an issue type"));
        }
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_issue_unauthorized_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(&config_for(&mock_server.uri())).unwrap();
    let payload = build_issue_payload("SCRUM", "s", "d", "Task");
    let err = client.create_issue(&payload).await.unwrap_err();

    assert!(err.is_unauthorized());
    assert!(err.to_string().starts_with("HTTP 401: Unauthorized"));
}

#[tokio::test]
async fn test_oversized_summary_rejected_by_server() {
    let mock_server = MockServer::start().await;
    let summary = "x".repeat(300);

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errorMessages": [],
            "errors": { "summary": "Summary must be less than 255 characters." }
        })))
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(&config_for(&mock_server.uri())).unwrap();
    let payload = build_issue_payload("SCRUM", &summary, "d", "Task");
    assert_eq!(payload.fields.summary.len(), 300);

    let err = client.create_issue(&payload).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    assert!(err.to_string().contains("less than 255 characters"));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(201).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(&config_for(&mock_server.uri())).unwrap();
    let payload = build_issue_payload("SCRUM", "s", "d", "Task");
    let err = client.create_issue(&payload).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_success_body_without_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "10000" })))
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(&config_for(&mock_server.uri())).unwrap();
    let payload = build_issue_payload("SCRUM", "s", "d", "Task");
    let issue = client.create_issue(&payload).await.unwrap();

    assert!(issue.key().is_none());
    assert_eq!(issue.id().as_deref(), Some("10000"));
    assert_eq!(issue.as_json(), &json!({ "id": "10000" }));
}

#[tokio::test]
async fn test_success_body_with_numeric_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "key": "SCRUM-1", "id": 10000 })),
        )
        .mount(&mock_server)
        .await;

    let client = JiraClient::new(&config_for(&mock_server.uri())).unwrap();
    let payload = build_issue_payload("SCRUM", "s", "d", "Task");
    let issue = client.create_issue(&payload).await.unwrap();

    assert_eq!(issue.key(), Some("SCRUM-1"));
    assert_eq!(issue.id().as_deref(), Some("10000"));
}

#[tokio::test]
async fn test_slow_server_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/api/3/issue"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "key": "SCRUM-9" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let client = JiraClient::with_timeout(
        &config_for(&mock_server.uri()),
        Duration::from_millis(200),
    )
    .unwrap();
    let payload = build_issue_payload("SCRUM", "s", "d", "Task");
    let err = client.create_issue(&payload).await.unwrap_err();

    assert!(
        matches!(err, ApiError::Timeout(timeout) if timeout == Duration::from_millis(200)),
        "got {:?}",
        err
    );
    assert_eq!(err.to_string(), "Request timed out after 200ms");
}

#[tokio::test]
async fn test_connection_refused() {
    // Nothing listens on the discard port
    let client = JiraClient::new(&config_for("http://127.0.0.1:9")).unwrap();
    let payload = build_issue_payload("SCRUM", "s", "d", "Task");
    let err = client.create_issue(&payload).await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
}
