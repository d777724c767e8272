//! Authentication payloads
//!
//! Credentials and tokens are redacted from `Debug` output.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const REDACTED: &str = "<redacted>";

/// Body of `POST /auth/login`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &REDACTED)
            .finish()
    }
}

/// Body of `POST /auth/refresh`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

impl fmt::Debug for RefreshRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefreshRequest").field("refresh_token", &REDACTED).finish()
    }
}

/// Auth payload returned by login and refresh
///
/// Keys the client does not model are kept in `extra` so the caller sees the
/// full payload the server sent.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Token lifetime in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("access_token", &REDACTED)
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| REDACTED))
            .field("expires_in", &self.expires_in)
            .field("user", &self.user)
            .field("extra", &self.extra)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_session_keeps_unknown_keys() {
        let session: AuthSession = serde_json::from_value(json!({
            "accessToken": "T1",
            "refreshToken": "R1",
            "user": { "id": "u1" },
            "tenant": { "id": "t1" }
        }))
        .unwrap();

        assert_eq!(session.access_token, "T1");
        assert_eq!(session.refresh_token.as_deref(), Some("R1"));
        assert_eq!(session.user, Some(json!({ "id": "u1" })));
        assert_eq!(session.extra.get("tenant"), Some(&json!({ "id": "t1" })));
    }

    #[test]
    fn test_session_requires_access_token() {
        let result: Result<AuthSession, _> = serde_json::from_value(json!({ "user": {} }));
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let login = LoginRequest { email: "a@b.com".into(), password: "hunter2".into() };
        let rendered = format!("{login:?}");
        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));

        let session: AuthSession =
            serde_json::from_value(json!({ "accessToken": "secret-token" })).unwrap();
        assert!(!format!("{session:?}").contains("secret-token"));
    }
}
