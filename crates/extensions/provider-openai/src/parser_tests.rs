use super::*;

#[test]
fn test_parse_created() {
    let line = r#"data: {"type":"response.created","sequence_number":0,"response":{"id":"resp_1","status":"in_progress","output":[]}}"#;
    match parse_line(line).unwrap() {
        SseLine::Event(StreamEvent::Created { response }) => assert_eq!(response.id, "resp_1"),
        other => panic!("Expected Created, got {other:?}"),
    }
}

#[test]
fn test_parse_delta_without_space() {
    let line = r#"data:{"type":"response.output_text.delta","delta":"Hi"}"#;
    assert!(matches!(
        parse_line(line).unwrap(),
        SseLine::Event(StreamEvent::OutputTextDelta { ref delta }) if delta == "Hi"
    ));
}

#[test]
fn test_parse_completed_derives_output_text() {
    let data = serde_json::json!({
        "type": "response.completed",
        "response": {
            "id": "resp_1",
            "status": "completed",
            "output": [{
                "type": "message",
                "role": "assistant",
                "content": [
                    {"type": "output_text", "text": "Hello, "},
                    {"type": "output_text", "text": "world"}
                ]
            }]
        }
    })
    .to_string();

    match parse_event(&data).unwrap() {
        StreamEvent::Completed { response } => {
            assert_eq!(response.output_text.as_deref(), Some("Hello, world"));
        }
        other => panic!("Expected Completed, got {other:?}"),
    }
}

#[test]
fn test_parse_incomplete_is_final() {
    let data = r#"{"type":"response.incomplete","response":{"id":"resp_2","status":"incomplete"}}"#;
    assert!(matches!(parse_event(data).unwrap(), StreamEvent::Completed { .. }));
}

#[test]
fn test_parse_completed_without_response() {
    let err = parse_event(r#"{"type":"response.completed"}"#).unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[test]
fn test_parse_failed() {
    let data = r#"{"type":"response.failed","response":{"id":"resp_3","status":"failed","error":{"code":"server_error","message":"overloaded"}}}"#;
    assert!(matches!(
        parse_event(data).unwrap(),
        StreamEvent::Failed { ref message } if message == "server_error: overloaded"
    ));
}

#[test]
fn test_parse_error_event() {
    let data = r#"{"type":"error","code":"invalid_model","message":"model not found"}"#;
    assert!(matches!(
        parse_event(data).unwrap(),
        StreamEvent::Failed { ref message } if message == "invalid_model: model not found"
    ));
}

#[test]
fn test_parse_unknown_event() {
    let data = r#"{"type":"response.content_part.added","part":{"type":"output_text","text":""}}"#;
    assert!(matches!(
        parse_event(data).unwrap(),
        StreamEvent::Other { ref kind } if kind == "response.content_part.added"
    ));
}

#[test]
fn test_parse_skips_non_data_lines() {
    for line in ["", "event: response.created", ": keep-alive", "data:", "data: \r"] {
        assert!(matches!(parse_line(line).unwrap(), SseLine::Skip), "{line:?}");
    }
}

#[test]
fn test_parse_done() {
    assert!(matches!(parse_line("data: [DONE]").unwrap(), SseLine::Done));
}

#[test]
fn test_parse_malformed_json() {
    let err = parse_line("data: {not json").unwrap_err();
    assert!(matches!(err, ProviderError::StreamError(_)));
}
