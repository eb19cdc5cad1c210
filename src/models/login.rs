//! Login credentials payload.

use serde::{Deserialize, Serialize};

/// Credentials for `POST /api/auth/login`.
///
/// Sent verbatim; status interpretation is left to the caller via
/// [`classify_status`](crate::error::classify_status).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_serialization() {
        let credentials = LoginCredentials::new("testuser", "P@ssw0rd1");
        let body = serde_json::to_value(&credentials).unwrap();
        assert_eq!(
            body,
            json!({"username": "testuser", "password": "P@ssw0rd1"})
        );
    }
}
