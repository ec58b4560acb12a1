use serde_json::{Value, json};
use std::sync::OnceLock;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub static GATEWAY_MOCK_SERVER_URI: OnceLock<String> = OnceLock::new();

const GATEWAY_PATH: &str = "/macros/s/demo/exec";

pub async fn init_demo() {
    let mock_server = init_gateway_mock_server().await;
    GATEWAY_MOCK_SERVER_URI.get_or_init(|| format!("{}{GATEWAY_PATH}", mock_server.uri()));
    // The server stops when dropped: it has to live as long as the app.
    Box::leak(Box::new(mock_server));
}

async fn init_gateway_mock_server() -> MockServer {
    // Not pooled: a pooled server is reset once dropped back to the pool.
    let mock_server = MockServer::builder().start().await;

    mock_action(&mock_server, "test", json!({"success": true})).await;
    mock_action(&mock_server, "getTemplates", demo_templates()).await;
    mock_action(&mock_server, "getRecipients", demo_recipients()).await;
    mock_action(&mock_server, "getSignatures", demo_signatures()).await;
    mock_action(
        &mock_server,
        "getSettings",
        json!({"settings": {"selected_signature_index": 0}, "signature": "Sales"}),
    )
    .await;
    mock_action(
        &mock_server,
        "getHistory",
        json!({"history": [
            {"date": "2026-01-05 10:12:00", "to": "jon@doe.com", "subject": "Hello Jon", "status": "Sent"},
        ]}),
    )
    .await;
    mock_post(&mock_server, "sendMail").await;
    mock_post(&mock_server, "saveTemplate").await;

    mock_server
}

async fn mock_action(mock_server: &MockServer, action: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(GATEWAY_PATH))
        .and(query_param("action", action))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(mock_server)
        .await;
}

async fn mock_post(mock_server: &MockServer, action: &str) {
    Mock::given(method("POST"))
        .and(path(GATEWAY_PATH))
        .and(body_partial_json(json!({"action": action})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(mock_server)
        .await;
}

fn demo_templates() -> Value {
    json!({"templates": [
        {
            "id": "t1",
            "name": "Quote",
            "subject": "Your quote, {{name}}",
            "body": "Dear {{name}},\n\nPlease find attached the quote for {{company}}.",
            "signature": "Sales",
        },
        {
            "id": "t2",
            "name": "Reminder",
            "subject": "Reminder for {{company}}",
            "body": "Hello {{name}},\n\nThis is a friendly reminder.",
        },
    ]})
}

fn demo_recipients() -> Value {
    json!({"recipients": [
        {"id": "1", "name": "Jon Doe", "company": "Doe Industries", "email": "jon@doe.com", "templateId": "t1"},
        {"id": "2", "name": "Alice Bob", "company": "Bob & Co", "email": "alice@bobo.com", "templateId": "t1"},
        {"id": "3", "name": "Chloé Martin", "company": "Martin SARL", "email": "chloe@martin.fr", "templateId": "t2"},
    ]})
}

fn demo_signatures() -> Value {
    json!({"signatures": [
        {"name": "Sales", "content": "--\nThe sales team"},
        {"name": "Support", "content": "--\nThe support team"},
    ]})
}
