use super::*;
use crate::mock_provider::MockResponsesProvider;
use agentgate_protocols::{ContentBlock, OutputItem};

fn echo_config() -> AgentConfig {
    AgentConfig {
        name: "echo".to_string(),
        model: "gpt-4o-mini".to_string(),
        instructions: "Repeat the user's message.".to_string(),
    }
}

fn engine_with(provider: MockResponsesProvider) -> (Arc<MockResponsesProvider>, ExecutionEngine) {
    let provider = Arc::new(provider);
    let engine = ExecutionEngine::new(provider.clone());
    (provider, engine)
}

fn message_output(text: &str) -> Vec<OutputItem> {
    vec![OutputItem {
        kind: Some("message".to_string()),
        content: vec![ContentBlock {
            kind: Some("output_text".to_string()),
            text: Some(text.to_string()),
        }],
        ..Default::default()
    }]
}

#[test]
fn test_compose_prompt_framing() {
    assert_eq!(
        compose_prompt("Repeat the user's message.", "hello"),
        "Repeat the user's message.\n\nUser:\nhello"
    );
}

#[test]
fn test_extract_text_prefers_aggregate() {
    let response = ResponseObject {
        output_text: Some("aggregate".to_string()),
        output: message_output("block"),
        ..Default::default()
    };
    assert_eq!(extract_text(&response), "aggregate");
}

#[test]
fn test_extract_text_falls_back_to_first_block() {
    let response = ResponseObject {
        output_text: Some(String::new()),
        output: message_output("block"),
        ..Default::default()
    };
    assert_eq!(extract_text(&response), "block");
}

#[test]
fn test_extract_text_empty() {
    assert_eq!(extract_text(&ResponseObject::default()), "");
}

#[tokio::test]
async fn test_execute_collects_text_and_run_id() {
    let (provider, engine) = engine_with(MockResponsesProvider::completing("resp_123", &["hel", "lo"]));

    let result = engine.execute(&echo_config(), "hello").await.unwrap();
    assert_eq!(result.output_text, "hello");
    assert_eq!(result.run_id, "resp_123");

    let requests = provider.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].model, "gpt-4o-mini");
    assert_eq!(requests[0].input, "Repeat the user's message.\n\nUser:\nhello");
}

#[tokio::test]
async fn test_initial_run_id_is_never_overwritten() {
    let events = vec![
        StreamEvent::Created { response: ResponseObject::with_id("resp_later") },
        StreamEvent::Completed {
            response: ResponseObject {
                id: "resp_final".to_string(),
                output_text: Some("done".to_string()),
                ..Default::default()
            },
        },
    ];
    let (_, engine) = engine_with(MockResponsesProvider::new(
        Some(ResponseObject::with_id("resp_initial")),
        events,
    ));

    let result = engine.execute(&echo_config(), "hi").await.unwrap();
    assert_eq!(result.run_id, "resp_initial");
}

#[tokio::test]
async fn test_run_id_from_first_event_without_initial() {
    let events = vec![
        StreamEvent::InProgress { response: ResponseObject::with_id("resp_progress") },
        StreamEvent::Completed { response: ResponseObject::with_id("resp_final") },
    ];
    let (_, engine) = engine_with(MockResponsesProvider::new(None, events));

    let result = engine.execute(&echo_config(), "hi").await.unwrap();
    assert_eq!(result.run_id, "resp_progress");
}

#[tokio::test]
async fn test_run_id_from_final_response() {
    let events = vec![
        StreamEvent::Other { kind: "response.output_item.added".to_string() },
        StreamEvent::Completed {
            response: ResponseObject {
                id: "resp_final".to_string(),
                output: message_output("from block"),
                ..Default::default()
            },
        },
    ];
    let (_, engine) = engine_with(MockResponsesProvider::new(None, events));

    let result = engine.execute(&echo_config(), "hi").await.unwrap();
    assert_eq!(result.run_id, "resp_final");
    assert_eq!(result.output_text, "from block");
}

#[tokio::test]
async fn test_empty_output_uses_placeholder() {
    let events = vec![StreamEvent::Completed {
        response: ResponseObject {
            id: "resp_empty".to_string(),
            output_text: Some(String::new()),
            ..Default::default()
        },
    }];
    let (_, engine) = engine_with(MockResponsesProvider::new(None, events));

    let result = engine.execute(&echo_config(), "hi").await.unwrap();
    assert_eq!(result.output_text, NO_TEXT_PLACEHOLDER);
    assert_eq!(result.output_text, "(no text output)");
}

#[tokio::test]
async fn test_open_failure_is_upstream_error() {
    let (_, engine) = engine_with(MockResponsesProvider::failing_open("connection refused"));

    let err = engine.execute(&echo_config(), "hi").await.unwrap_err();
    assert!(matches!(err, ProviderError::Network(ref m) if m == "connection refused"));
}

#[tokio::test]
async fn test_stream_error_mid_run() {
    let provider = MockResponsesProvider::new(
        Some(ResponseObject::with_id("resp_1")),
        vec![StreamEvent::OutputTextDelta { delta: "partial".to_string() }],
    )
    .with_stream_error("connection reset");
    let (_, engine) = engine_with(provider);

    let err = engine.execute(&echo_config(), "hi").await.unwrap_err();
    assert!(matches!(err, ProviderError::StreamError(_)));
}

#[tokio::test]
async fn test_failed_event_is_remote_error() {
    let events = vec![
        StreamEvent::Created { response: ResponseObject::with_id("resp_1") },
        StreamEvent::Failed { message: "server_error: overloaded".to_string() },
    ];
    let (_, engine) = engine_with(MockResponsesProvider::new(None, events));

    let err = engine.execute(&echo_config(), "hi").await.unwrap_err();
    assert!(matches!(err, ProviderError::Remote(ref m) if m.contains("overloaded")));
}

#[tokio::test]
async fn test_stream_without_completed_is_error() {
    let events = vec![StreamEvent::OutputTextDelta { delta: "orphan".to_string() }];
    let (_, engine) = engine_with(MockResponsesProvider::new(None, events));

    let err = engine.execute(&echo_config(), "hi").await.unwrap_err();
    assert!(matches!(err, ProviderError::StreamError(_)));
}

#[test]
fn test_engine_debug_names_provider() {
    let (_, engine) = engine_with(MockResponsesProvider::new(None, Vec::new()));
    assert_eq!(engine.provider_id(), "mock");
    assert!(format!("{engine:?}").contains("mock"));
}
