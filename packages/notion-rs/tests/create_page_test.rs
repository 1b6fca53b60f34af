use httpmock::prelude::*;
use notion::{NotionClient, NotionError};

#[tokio::test]
async fn create_email_row_posts_expected_payload() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/pages")
            .header("authorization", "Bearer secret-token")
            .header("Notion-Version", "2022-06-28")
            .json_body(serde_json::json!({
                "parent": { "database_id": "db-123" },
                "properties": {
                    "Email": { "email": "user@example.com" },
                    "Status": { "select": { "name": "Waitlist" } }
                }
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": "page-abc",
                "url": "https://notion.so/page-abc"
            }));
    });

    let client = NotionClient::new("secret-token".into(), "db-123".into())
        .with_base_url(server.base_url());

    let page = client
        .create_email_row("user@example.com", "Waitlist")
        .await
        .unwrap();

    mock.assert();
    assert_eq!(page.id, "page-abc");
    assert_eq!(page.url.as_deref(), Some("https://notion.so/page-abc"));
}

#[tokio::test]
async fn non_2xx_response_is_an_api_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/v1/pages");
        then.status(400)
            .header("Content-Type", "application/json")
            .body(r#"{"object":"error","code":"validation_error"}"#);
    });

    let client = NotionClient::new("secret-token".into(), "db-123".into())
        .with_base_url(server.base_url());

    let err = client
        .create_email_row("user@example.com", "Waitlist")
        .await
        .unwrap_err();

    match err {
        NotionError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("validation_error"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}
