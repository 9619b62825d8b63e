//! Response envelope used by some endpoints

use serde::{Deserialize, Serialize};

/// `{ isSuccess, message, data }` wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub is_success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Server message when it is non-blank
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m,
            _ => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes_with_missing_fields() {
        let env: ApiResponse<Option<String>> =
            serde_json::from_str(r#"{"isSuccess": false}"#).unwrap();
        assert!(!env.is_success);
        assert!(env.message.is_none());
        assert!(env.data.is_none());
    }

    #[test]
    fn test_message_or_fallback() {
        let env: ApiResponse<Option<String>> =
            serde_json::from_str(r#"{"isSuccess": false, "message": "", "data": null}"#).unwrap();
        assert_eq!(env.message_or("fallback"), "fallback");

        let env: ApiResponse<Option<String>> =
            serde_json::from_str(r#"{"isSuccess": true, "message": "ok", "data": "t"}"#).unwrap();
        assert_eq!(env.message_or("fallback"), "ok");
        assert_eq!(env.data.as_deref(), Some("t"));
    }
}
