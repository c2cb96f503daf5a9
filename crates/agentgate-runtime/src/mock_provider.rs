//! Scripted provider for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use agentgate_protocols::{
    ProviderError, ResponseObject, ResponseRequest, ResponseSession, ResponsesProvider, StreamEvent,
};
use async_trait::async_trait;
use parking_lot::Mutex;

/// Provider that replays a fixed event script and records every request.
pub struct MockResponsesProvider {
    initial: Option<ResponseObject>,
    events: Vec<StreamEvent>,
    open_error: Option<String>,
    stream_error: Option<String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<ResponseRequest>>,
}

impl MockResponsesProvider {
    /// Provider replaying `events` after exposing `initial` at open time.
    pub fn new(initial: Option<ResponseObject>, events: Vec<StreamEvent>) -> Self {
        Self {
            initial,
            events,
            open_error: None,
            stream_error: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A well-formed run: created, one delta per fragment, completed.
    pub fn completing(run_id: &str, fragments: &[&str]) -> Self {
        let text: String = fragments.concat();
        let mut events = vec![StreamEvent::Created {
            response: ResponseObject::with_id(run_id),
        }];
        events.extend(fragments.iter().map(|f| StreamEvent::OutputTextDelta {
            delta: f.to_string(),
        }));
        events.push(StreamEvent::Completed {
            response: ResponseObject {
                id: run_id.to_string(),
                output_text: Some(text),
                ..Default::default()
            },
        });
        Self::new(Some(ResponseObject::with_id(run_id)), events)
    }

    /// Fail when the stream is opened.
    pub fn failing_open(message: &str) -> Self {
        let mut provider = Self::new(None, Vec::new());
        provider.open_error = Some(message.to_string());
        provider
    }

    /// Fail with a stream error after the scripted events.
    pub fn with_stream_error(mut self, message: &str) -> Self {
        self.stream_error = Some(message.to_string());
        self
    }

    /// Number of streams opened.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received, in order.
    pub fn requests(&self) -> Vec<ResponseRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ResponsesProvider for MockResponsesProvider {
    fn id(&self) -> &str {
        "mock"
    }

    async fn open_stream(&self, request: ResponseRequest) -> Result<ResponseSession, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(request);

        if let Some(message) = &self.open_error {
            return Err(ProviderError::Network(message.clone()));
        }

        let mut items: Vec<Result<StreamEvent, ProviderError>> =
            self.events.iter().cloned().map(Ok).collect();
        if let Some(message) = &self.stream_error {
            items.push(Err(ProviderError::StreamError(message.clone())));
        }

        Ok(ResponseSession::new(
            self.initial.clone(),
            Box::pin(futures::stream::iter(items)),
        ))
    }
}
