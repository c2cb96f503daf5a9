//! Streaming session.

use std::fmt;
use std::pin::Pin;

use futures::{Stream, StreamExt};

use super::{ResponseObject, StreamEvent};
use crate::error::ProviderError;

/// Stream of upstream events.
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, ProviderError>> + Send>>;

/// One open streaming execution.
///
/// Events are finite and not restartable. The session remembers the
/// response object carried by `response.completed` so it can be fetched
/// once the stream has been drained.
pub struct ResponseSession {
    initial: Option<ResponseObject>,
    events: EventStream,
    completed: Option<ResponseObject>,
    exhausted: bool,
}

impl ResponseSession {
    /// Create a session from the response object exposed at open time and
    /// the remaining events.
    pub fn new(initial: Option<ResponseObject>, events: EventStream) -> Self {
        Self {
            initial,
            events,
            completed: None,
            exhausted: false,
        }
    }

    /// Create a session that exposes no initial response object.
    pub fn from_events(events: EventStream) -> Self {
        Self::new(None, events)
    }

    /// The response object known when the session was opened.
    pub fn initial_response(&self) -> Option<&ResponseObject> {
        self.initial.as_ref()
    }

    /// Next event in delivery order, or `None` once the stream has ended.
    ///
    /// The first error ends the session.
    pub async fn next_event(&mut self) -> Option<Result<StreamEvent, ProviderError>> {
        if self.exhausted {
            return None;
        }

        match self.events.next().await {
            Some(Ok(event)) => {
                if let StreamEvent::Completed { response } = &event {
                    self.completed = Some(response.clone());
                }
                Some(Ok(event))
            }
            Some(Err(e)) => {
                self.exhausted = true;
                Some(Err(e))
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }

    /// Drain any remaining events and return the finalized response.
    pub async fn final_response(mut self) -> Result<ResponseObject, ProviderError> {
        while let Some(event) = self.next_event().await {
            event?;
        }

        self.completed.ok_or_else(|| {
            ProviderError::StreamError("stream ended before response.completed".to_string())
        })
    }
}

impl fmt::Debug for ResponseSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseSession")
            .field("initial", &self.initial)
            .field("completed", &self.completed)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_of(events: Vec<Result<StreamEvent, ProviderError>>) -> ResponseSession {
        ResponseSession::from_events(Box::pin(futures::stream::iter(events)))
    }

    #[tokio::test]
    async fn test_events_in_order() {
        let mut session = session_of(vec![
            Ok(StreamEvent::OutputTextDelta { delta: "a".to_string() }),
            Ok(StreamEvent::OutputTextDelta { delta: "b".to_string() }),
        ]);

        let mut deltas = String::new();
        while let Some(event) = session.next_event().await {
            if let StreamEvent::OutputTextDelta { delta } = event.unwrap() {
                deltas.push_str(&delta);
            }
        }
        assert_eq!(deltas, "ab");
        assert!(session.next_event().await.is_none());
    }

    #[tokio::test]
    async fn test_final_response_after_completed() {
        let mut session = session_of(vec![
            Ok(StreamEvent::OutputTextDelta { delta: "hi".to_string() }),
            Ok(StreamEvent::Completed { response: ResponseObject::with_id("resp_9") }),
        ]);
        while session.next_event().await.is_some() {}

        let response = session.final_response().await.unwrap();
        assert_eq!(response.id, "resp_9");
    }

    #[tokio::test]
    async fn test_final_response_drains_remaining_events() {
        let session = session_of(vec![
            Ok(StreamEvent::Other { kind: "response.in_progress".to_string() }),
            Ok(StreamEvent::Completed { response: ResponseObject::with_id("resp_2") }),
        ]);
        assert_eq!(session.final_response().await.unwrap().id, "resp_2");
    }

    #[tokio::test]
    async fn test_final_response_without_completed() {
        let session = session_of(vec![Ok(StreamEvent::OutputTextDelta { delta: "x".to_string() })]);
        let err = session.final_response().await.unwrap_err();
        assert!(matches!(err, ProviderError::StreamError(_)));
    }

    #[tokio::test]
    async fn test_error_ends_session() {
        let mut session = session_of(vec![
            Err(ProviderError::Network("reset".to_string())),
            Ok(StreamEvent::Completed { response: ResponseObject::with_id("never") }),
        ]);
        assert!(session.next_event().await.unwrap().is_err());
        assert!(session.next_event().await.is_none());
    }

    #[test]
    fn test_initial_response() {
        let session = ResponseSession::new(
            Some(ResponseObject::with_id("resp_0")),
            Box::pin(futures::stream::empty()),
        );
        assert_eq!(session.initial_response().map(|r| r.id.as_str()), Some("resp_0"));
    }
}
