//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{ApiResponse, LoginRequest};
use crate::error::Result;

/// Authentication operations for the Inventario API
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a session token (`POST /auth/login`).
    ///
    /// The envelope is returned as-is; callers decide what counts as success.
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse<Option<String>>>;
}
