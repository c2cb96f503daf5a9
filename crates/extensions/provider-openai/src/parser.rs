//! Server-sent event parsing.

use agentgate_protocols::{ProviderError, ResponseObject, StreamEvent};

use crate::api::WireEvent;

/// Result of decoding one SSE line.
#[derive(Debug)]
pub enum SseLine {
    /// A decoded event.
    Event(StreamEvent),
    /// The `[DONE]` sentinel.
    Done,
    /// Comments, `event:` lines, blank separators.
    Skip,
}

/// Decode one line of an SSE body.
pub fn parse_line(line: &str) -> Result<SseLine, ProviderError> {
    let line = line.trim_end_matches('\r');
    let Some(data) = line.strip_prefix("data:") else {
        return Ok(SseLine::Skip);
    };
    let data = data.trim_start();

    if data.is_empty() {
        return Ok(SseLine::Skip);
    }
    if data == "[DONE]" {
        return Ok(SseLine::Done);
    }

    parse_event(data).map(SseLine::Event)
}

/// Decode one JSON event payload.
pub fn parse_event(data: &str) -> Result<StreamEvent, ProviderError> {
    let wire: WireEvent = serde_json::from_str(data)
        .map_err(|e| ProviderError::StreamError(format!("malformed event: {e}")))?;

    let event = match wire.event_type.as_str() {
        "response.created" => StreamEvent::Created {
            response: wire.response.unwrap_or_default(),
        },
        "response.in_progress" => StreamEvent::InProgress {
            response: wire.response.unwrap_or_default(),
        },
        "response.output_text.delta" => StreamEvent::OutputTextDelta {
            delta: wire.delta.unwrap_or_default(),
        },
        "response.output_text.done" => StreamEvent::OutputTextDone {
            text: wire.text.unwrap_or_default(),
        },
        // An incomplete response (e.g. output token limit) is still final.
        "response.completed" | "response.incomplete" => {
            let response = wire.response.ok_or_else(|| {
                ProviderError::InvalidResponse(format!("{} event without a response", wire.event_type))
            })?;
            StreamEvent::Completed {
                response: with_output_text(response),
            }
        }
        "response.failed" => StreamEvent::Failed {
            message: wire
                .response
                .and_then(|r| r.error)
                .map(|e| e.to_string())
                .unwrap_or_else(|| "response failed".to_string()),
        },
        "error" => StreamEvent::Failed {
            message: match (wire.code, wire.message) {
                (Some(code), Some(message)) => format!("{code}: {message}"),
                (None, Some(message)) => message,
                (Some(code), None) => code,
                (None, None) => "upstream error".to_string(),
            },
        },
        _ => StreamEvent::Other {
            kind: wire.event_type,
        },
    };

    Ok(event)
}

/// Fill the aggregated text field the way the official SDKs derive it.
fn with_output_text(mut response: ResponseObject) -> ResponseObject {
    if response.output_text.as_deref().is_none_or(str::is_empty) {
        response.output_text = Some(response.aggregate_output_text());
    }
    response
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
