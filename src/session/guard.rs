//! Route-level session guard
//!
//! State is re-derived from the token store on every protected navigation.
//! There is no cached "authorized" flag, so a token that expires mid-session
//! is caught the next time a protected route is entered.

use crate::router::LOGIN_PATH;
use crate::session::store::TokenStore;
use crate::session::token;

/// Session state as seen by the guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    NoToken,
    ExpiredToken,
    Authorized,
}

/// What the caller should do with the requested route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect { to: String, from: String },
}

/// Pure classification of the session.
pub fn classify(token_present: bool, token_expired: bool) -> SessionState {
    match (token_present, token_expired) {
        (false, _) => SessionState::NoToken,
        (true, true) => SessionState::ExpiredToken,
        (true, false) => SessionState::Authorized,
    }
}

impl SessionState {
    /// Decision for a navigation to `path`. Redirects carry the path so the
    /// login screen can send the user back to it.
    pub fn decision(self, path: &str) -> GuardDecision {
        match self {
            SessionState::Authorized => GuardDecision::Allow,
            SessionState::NoToken | SessionState::ExpiredToken => GuardDecision::Redirect {
                to: LOGIN_PATH.to_string(),
                from: path.to_string(),
            },
        }
    }
}

/// Read the current session from the store without side effects.
pub fn current_state<S: TokenStore + ?Sized>(store: &S) -> SessionState {
    match store.read() {
        None => classify(false, false),
        Some(raw) => classify(true, token::is_expired(&raw)),
    }
}

/// Evaluate the guard for `path`, clearing the store when the token has expired.
pub fn enforce<S: TokenStore + ?Sized>(store: &S, path: &str) -> GuardDecision {
    let state = current_state(store);

    if state == SessionState::ExpiredToken {
        log::info!("Session token expired, clearing before redirect");
        if let Err(e) = store.clear() {
            log::warn!("Failed to clear expired token: {}", e);
        }
    }

    state.decision(path)
}
