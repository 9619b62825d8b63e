//! Fake transport for testing
//!
//! Stands in for the HTTP layer so the pipeline and resource clients can be
//! exercised without network I/O.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use tokio::sync::Mutex;

use super::transport::{IncomingResponse, OutgoingRequest, Transport};
use crate::error::ApiError;

/// Scripted transport.
///
/// Responses are keyed by method and path (query ignored). Several responses
/// for the same key are served in order; the last one repeats. Unscripted
/// requests get a 404.
///
/// # Example
/// ```ignore
/// let mock = MockTransport::new()
///     .respond(Method::GET, "/admin/categorias", 200, "[]")
///     .await;
/// ```
#[derive(Clone, Default)]
pub struct MockTransport {
    routes: Arc<Mutex<HashMap<(Method, String), Vec<IncomingResponse>>>>,
    /// Network error to return on the next call - consumed on first use
    network_error: Arc<Mutex<Option<String>>>,
    captured: Arc<Mutex<Vec<OutgoingRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `method path`.
    pub async fn respond(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).expect("valid status code");
        self.routes
            .lock()
            .await
            .entry((method, path.to_string()))
            .or_default()
            .push(IncomingResponse::new(status, body));
        self
    }

    /// Fail the next call as if the connection broke.
    pub async fn with_network_error(self, message: &str) -> Self {
        *self.network_error.lock().await = Some(message.to_string());
        self
    }

    /// Every request the transport received, in order.
    pub async fn captured(&self) -> Vec<OutgoingRequest> {
        self.captured.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &OutgoingRequest) -> Result<IncomingResponse, ApiError> {
        self.captured.lock().await.push(request.clone());

        if let Some(message) = self.network_error.lock().await.take() {
            return Err(ApiError::Network(message));
        }

        let mut routes = self.routes.lock().await;
        let key = (request.method.clone(), request.path.clone());
        match routes.get_mut(&key) {
            Some(queue) if queue.len() > 1 => Ok(queue.remove(0)),
            Some(queue) if !queue.is_empty() => Ok(queue[0].clone()),
            _ => Ok(IncomingResponse::new(StatusCode::NOT_FOUND, "")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unscripted_request_is_404() {
        let mock = MockTransport::new();
        let response = mock.send(&OutgoingRequest::get("/x")).await.unwrap();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_responses_served_in_order_then_repeat() {
        let mock = MockTransport::new()
            .respond(Method::GET, "/x", 500, "first")
            .await
            .respond(Method::GET, "/x", 200, "second")
            .await;

        let a = mock.send(&OutgoingRequest::get("/x")).await.unwrap();
        let b = mock.send(&OutgoingRequest::get("/x")).await.unwrap();
        let c = mock.send(&OutgoingRequest::get("/x")).await.unwrap();

        assert_eq!(a.body, "first");
        assert_eq!(b.body, "second");
        assert_eq!(c.body, "second");
        assert_eq!(mock.captured().await.len(), 3);
    }

    #[tokio::test]
    async fn test_network_error_consumed_once() {
        let mock = MockTransport::new()
            .respond(Method::GET, "/x", 200, "")
            .await
            .with_network_error("reset")
            .await;

        assert!(mock.send(&OutgoingRequest::get("/x")).await.is_err());
        assert!(mock.send(&OutgoingRequest::get("/x")).await.is_ok());
    }
}
