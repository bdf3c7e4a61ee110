//! Integration tests for the Gemini inference engine using WireMock
//!
//! These tests mock the Generative Language HTTP API to verify client
//! behavior without network access.

use std::time::Duration;

use ai_core::{
    GeminiInferenceEngine, InferenceConfig, InferenceEngine, InferenceError, InferenceRequest,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

// =============================================================================
// Test Helpers
// =============================================================================

const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

fn config_for_mock(base_url: &str) -> InferenceConfig {
    InferenceConfig {
        api_key: Some("gem-key".to_string()),
        base_url: base_url.to_string(),
        default_model: "test-model".to_string(),
        timeout_ms: 5000,
        ..Default::default()
    }
}

fn engine_for(mock_server: &MockServer) -> GeminiInferenceEngine {
    GeminiInferenceEngine::new(config_for_mock(&mock_server.uri()))
        .expect("Failed to create engine")
}

/// Sample Gemini success response
fn success_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {
            "promptTokenCount": 12,
            "candidatesTokenCount": 8,
            "totalTokenCount": 20
        },
        "modelVersion": "test-model-001"
    })
}

// =============================================================================
// Inference Engine Tests
// =============================================================================

mod inference_tests {
    use super::*;

    #[tokio::test]
    async fn generate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "gem-key"))
            .and(body_json(serde_json::json!({
                "contents": [{"parts": [{"text": "User: hello\nAI:"}]}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_response("Hi!")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for(&mock_server);
        let response = engine
            .generate(InferenceRequest::new("User: hello\nAI:"))
            .await
            .unwrap();

        assert_eq!(response.content, "Hi!");
        assert_eq!(response.model, "test-model-001");
        assert_eq!(response.finish_reason.as_deref(), Some("STOP"));
        let usage = response.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 12);
        assert_eq!(usage.completion_tokens, 8);
        assert_eq!(usage.total_tokens, 20);
    }

    #[tokio::test]
    async fn generate_sends_generation_config_and_system_instruction() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_json(serde_json::json!({
                "contents": [{"parts": [{"text": "User: hi\nAI:"}]}],
                "systemInstruction": {"parts": [{"text": "Be brief."}]},
                "generationConfig": {"temperature": 0.5, "maxOutputTokens": 64}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_response("Hey.")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = InferenceConfig {
            temperature: Some(0.5),
            max_tokens: Some(64),
            system_prompt: Some("Be brief.".to_string()),
            ..config_for_mock(&mock_server.uri())
        };
        let engine = GeminiInferenceEngine::new(config).unwrap();

        let response = engine.generate(InferenceRequest::new("User: hi\nAI:")).await;
        assert_eq!(response.unwrap().content, "Hey.");
    }

    #[tokio::test]
    async fn generate_with_custom_model() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/custom-model:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_response("ok")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let engine = engine_for(&mock_server);
        let request = InferenceRequest::new("Hello").with_model("custom-model");

        assert!(engine.generate(request).await.is_ok());
    }

    #[tokio::test]
    async fn generate_without_candidates_returns_empty_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "promptFeedback": {"blockReason": "SAFETY"}
            })))
            .mount(&mock_server)
            .await;

        let response = engine_for(&mock_server)
            .generate(InferenceRequest::new("Hello"))
            .await
            .unwrap();

        assert!(response.content.is_empty());
        assert_eq!(response.model, "test-model");
    }

    #[tokio::test]
    async fn generate_rate_limited() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = engine_for(&mock_server)
            .generate(InferenceRequest::new("Hello"))
            .await;

        assert!(matches!(result, Err(InferenceError::RateLimited)));
    }

    #[tokio::test]
    async fn generate_unknown_model() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = engine_for(&mock_server)
            .generate(InferenceRequest::new("Hello"))
            .await;

        match result {
            Err(InferenceError::ModelNotAvailable(model)) => assert_eq!(model, "test-model"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn generate_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let result = engine_for(&mock_server)
            .generate(InferenceRequest::new("Hello"))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, InferenceError::ServerError(_)));
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn generate_invalid_json_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let result = engine_for(&mock_server)
            .generate(InferenceRequest::new("Hello"))
            .await;

        assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn generate_timeout_reports_configured_limit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(success_response("late"))
                    .set_delay(Duration::from_millis(300)),
            )
            .mount(&mock_server)
            .await;

        let config = InferenceConfig {
            timeout_ms: 50,
            ..config_for_mock(&mock_server.uri())
        };
        let engine = GeminiInferenceEngine::new(config).unwrap();

        let result = engine.generate(InferenceRequest::new("Hello")).await;

        assert!(matches!(result, Err(InferenceError::Timeout(50))));
    }
}
