//! Session handling
//!
//! The session is a single bearer token persisted between runs. [`store`]
//! owns persistence, [`token`] reads its expiry, [`guard`] decides whether a
//! protected route may be entered and [`login`] obtains a fresh token.

pub mod guard;
pub mod login;
pub mod store;
pub mod token;
