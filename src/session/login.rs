//! Sign-in flow

use crate::client::AuthApi;
use crate::client::models::LoginRequest;
use crate::error::{ApiError, Error, Result, SessionError};
use crate::router::Route;
use crate::session::store::TokenStore;

/// Shown when the server rejects a sign-in without saying why
pub const LOGIN_FAILED_FALLBACK: &str = "Invalid credentials";

/// Used when an envelope reports failure with no message
const LOGIN_REJECTED_DEFAULT: &str = "Could not sign in.";

/// Exchanges credentials for a token and stores it.
pub struct LoginFlow<'a, A: ?Sized, S: ?Sized> {
    api: &'a A,
    store: &'a S,
}

impl<'a, A, S> LoginFlow<'a, A, S>
where
    A: AuthApi + ?Sized,
    S: TokenStore + ?Sized,
{
    pub fn new(api: &'a A, store: &'a S) -> Self {
        Self { api, store }
    }

    /// Submit credentials. On success the token is saved and the route to
    /// continue to is returned (`return_to`, or the root). On failure the
    /// store is left exactly as it was.
    pub async fn submit(
        &self,
        email: &str,
        password: &str,
        return_to: Option<&str>,
    ) -> Result<Route> {
        if email.trim().is_empty() || password.trim().is_empty() {
            return Err(SessionError::EmptyCredentials.into());
        }

        let request = LoginRequest::new(email, password);
        log::debug!("Signing in as {}", request.email);

        let envelope = self.api.login(&request).await?;
        let token = match envelope.data.as_deref() {
            Some(token) if envelope.is_success && !token.trim().is_empty() => token,
            _ => {
                let message = envelope.message_or(LOGIN_REJECTED_DEFAULT).to_string();
                return Err(ApiError::Rejected(message).into());
            }
        };

        self.store.save(token)?;
        log::info!("Signed in as {}", request.email);

        Ok(destination(return_to))
    }
}

/// Where to go after signing in. Never back to the login screen itself.
pub fn destination(return_to: Option<&str>) -> Route {
    match Route::resolve(return_to.unwrap_or("/")) {
        Route::Login => Route::Root,
        route => route,
    }
}

/// User-facing text for a failed sign-in: the server's own message when it
/// sent one, the transport message for network failures, else `fallback`.
pub fn login_error_message(err: &Error, fallback: &str) -> String {
    match err {
        Error::Api(api) => api
            .server_message()
            .or_else(|| match api {
                ApiError::Network(m) if !m.trim().is_empty() => Some(m.clone()),
                _ => None,
            })
            .unwrap_or_else(|| fallback.to_string()),
        Error::Session(e) => e.to_string(),
        _ => fallback.to_string(),
    }
}
