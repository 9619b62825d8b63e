//! Request pipeline
//!
//! Every API call goes through one `Pipeline`: request stages run in order
//! before the transport sends, response stages observe the outcome. Session
//! handling lives here, so resource clients carry no auth boilerplate.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};

use super::transport::{IncomingResponse, OutgoingRequest, Transport};
use crate::error::ApiError;
use crate::router::{LOGIN_PATH, Navigator};
use crate::session::store::TokenStore;
use crate::session::token;

/// Path fragment of the sign-in endpoint
pub const LOGIN_ENDPOINT: &str = "/auth/login";

/// Whether a request path targets the sign-in endpoint.
pub fn is_login_call(path: &str) -> bool {
    path.contains(LOGIN_ENDPOINT)
}

/// Transforms a request before it is sent.
pub trait RequestStage: Send + Sync {
    fn before_send(&self, request: &mut OutgoingRequest);
}

/// Observes the outcome of a request. Observers cannot alter the result.
pub trait ResponseStage: Send + Sync {
    fn on_success(&self, _request: &OutgoingRequest, _response: &IncomingResponse) {}

    fn on_failure(&self, request: &OutgoingRequest, error: &ApiError);
}

/// Ordered stages over a single transport.
pub struct Pipeline<T> {
    transport: T,
    request_stages: Vec<Box<dyn RequestStage>>,
    response_stages: Vec<Box<dyn ResponseStage>>,
}

impl<T: Transport> Pipeline<T> {
    /// Pipeline with no stages
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            request_stages: Vec::new(),
            response_stages: Vec::new(),
        }
    }

    /// Pipeline wired with the session contract: attach credentials before
    /// sending, force a logout on 401.
    pub fn with_session<S, N>(transport: T, store: Arc<S>, navigator: Arc<N>) -> Self
    where
        S: TokenStore + ?Sized + 'static,
        N: Navigator + ?Sized + 'static,
    {
        Self::new(transport)
            .with_request_stage(AttachCredentials::new(store.clone()))
            .with_response_stage(ForceLogoutOnUnauthorized::new(store, navigator))
    }

    pub fn with_request_stage(mut self, stage: impl RequestStage + 'static) -> Self {
        self.request_stages.push(Box::new(stage));
        self
    }

    pub fn with_response_stage(mut self, stage: impl ResponseStage + 'static) -> Self {
        self.response_stages.push(Box::new(stage));
        self
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run the request through every stage. Non-2xx statuses become errors;
    /// observers see them first and the original error is returned after.
    pub async fn execute(
        &self,
        mut request: OutgoingRequest,
    ) -> Result<IncomingResponse, ApiError> {
        for stage in &self.request_stages {
            stage.before_send(&mut request);
        }

        let outcome = match self.transport.send(&request).await {
            Ok(response) if response.status.is_success() => Ok(response),
            Ok(response) => Err(ApiError::from_status(response.status, &response.body)),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(response) => {
                for stage in &self.response_stages {
                    stage.on_success(&request, &response);
                }
                Ok(response)
            }
            Err(error) => {
                log::debug!("{} {} failed: {}", request.method, request.path, error);
                for stage in &self.response_stages {
                    stage.on_failure(&request, &error);
                }
                Err(error)
            }
        }
    }
}

/// Adds `Authorization: Bearer <token>` when the stored token is usable.
///
/// An expired token is cleared and the request goes out unauthenticated;
/// the server decides what to do with it.
pub struct AttachCredentials<S: ?Sized> {
    store: Arc<S>,
}

impl<S: TokenStore + ?Sized> AttachCredentials<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S: TokenStore + ?Sized> RequestStage for AttachCredentials<S> {
    fn before_send(&self, request: &mut OutgoingRequest) {
        let Some(token) = self.store.read() else {
            log::debug!("No session token for {} {}", request.method, request.path);
            return;
        };

        if token::is_expired(&token) {
            log::warn!("Session token expired; sending {} unauthenticated", request.path);
            if let Err(e) = self.store.clear() {
                log::warn!("Failed to clear expired token: {}", e);
            }
            return;
        }

        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                request.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => log::warn!("Stored token is not a valid header value; not attaching it"),
        }
    }
}

/// On a 401 from anything but the sign-in endpoint, clear the session and
/// send the user to the login screen.
pub struct ForceLogoutOnUnauthorized<S: ?Sized, N: ?Sized> {
    store: Arc<S>,
    navigator: Arc<N>,
}

impl<S: TokenStore + ?Sized, N: Navigator + ?Sized> ForceLogoutOnUnauthorized<S, N> {
    pub fn new(store: Arc<S>, navigator: Arc<N>) -> Self {
        Self { store, navigator }
    }
}

impl<S: TokenStore + ?Sized, N: Navigator + ?Sized> ResponseStage
    for ForceLogoutOnUnauthorized<S, N>
{
    fn on_failure(&self, request: &OutgoingRequest, error: &ApiError) {
        if error.status() != Some(401) || is_login_call(&request.path) {
            return;
        }

        log::info!("401 from {}; ending session", request.path);
        if let Err(e) = self.store.clear() {
            log::warn!("Failed to clear token after 401: {}", e);
        }
        self.navigator.navigate(LOGIN_PATH);
    }
}
