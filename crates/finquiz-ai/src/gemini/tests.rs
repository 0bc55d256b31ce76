use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::{AiClient, AiError, Message};

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig::new("test-key")
        .with_model("gemini-test")
        .with_api_base(format!("{}/models", server.uri()));
    GeminiClient::new(config).unwrap()
}

fn offline_client() -> GeminiClient {
    GeminiClient::new(GeminiConfig::new("test-key")).unwrap()
}

#[test]
fn request_body_maps_roles() {
    let client = offline_client();
    let messages = vec![
        Message::user("hello"),
        Message::assistant("hi there"),
    ];

    let body = client.build_request_body(&messages);
    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[1]["parts"][0]["text"], "hi there");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);
}

#[test]
fn parse_response_joins_text_parts() {
    let client = offline_client();
    let response = client
        .parse_response(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "QUESTION: a?" }, { "text": "\nANSWER: b" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 7 }
        }))
        .unwrap();
    assert_eq!(response.content, "QUESTION: a?\nANSWER: b");
    assert_eq!(response.usage.input_tokens, 12);
    assert_eq!(response.usage.output_tokens, 7);
}

#[test]
fn parse_response_maps_safety_stop_to_content_filtered() {
    let client = offline_client();
    let err = client
        .parse_response(json!({
            "candidates": [{ "content": { "parts": [] }, "finishReason": "SAFETY" }]
        }))
        .unwrap_err();
    assert!(err.is_content_filtered());
}

#[test]
fn parse_response_maps_blocked_prompt_to_content_filtered() {
    let client = offline_client();
    let err = client
        .parse_response(json!({ "promptFeedback": { "blockReason": "SAFETY" } }))
        .unwrap_err();
    assert!(matches!(err, AiError::ContentFiltered(ref r) if r.contains("SAFETY")));
}

#[test]
fn parse_response_without_candidates_is_parse_error() {
    let client = offline_client();
    let err = client.parse_response(json!({ "candidates": [] })).unwrap_err();
    assert!(matches!(err, AiError::ParseError(_)));
}

#[test]
fn max_tokens_finish_is_not_filtered() {
    let client = offline_client();
    let response = client
        .parse_response(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "partial" }] },
                "finishReason": "MAX_TOKENS"
            }]
        }))
        .unwrap();
    assert_eq!(response.content, "partial");
}

#[tokio::test]
async fn send_message_posts_to_generate_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "CORRECT" }] },
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .send_message(&[Message::user("grade this")])
        .await
        .unwrap();
    assert_eq!(response.content, "CORRECT");
}

#[tokio::test]
async fn send_message_maps_429_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&[Message::user("hi")])
        .await
        .unwrap_err();
    assert!(matches!(err, AiError::RateLimited));
}

#[tokio::test]
async fn send_message_maps_server_error_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("quota exhausted"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .send_message(&[Message::user("hi")])
        .await
        .unwrap_err();
    match err {
        AiError::ApiError(msg) => assert!(msg.contains("quota exhausted")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn debug_redacts_api_key() {
    let config = GeminiConfig::new("super-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret"));
    assert!(debug.contains("[REDACTED]"));
}
