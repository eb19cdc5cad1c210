//! HTTP client for the Unda portal public registration API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Each operation performs exactly one JSON POST
//! and returns the parsed response body regardless of HTTP status: the portal puts
//! its error details in the body, so status interpretation belongs to the caller
//! (see [`classify_status`](crate::error::classify_status)). Only transport and
//! JSON-parse failures surface as errors.

mod async_wrapper;
pub use async_wrapper::{AsyncPortalClient, AsyncPortalClientImpl};

use crate::config::Config;
use crate::error::{PortalApiError, PortalApiResult};
use crate::metrics::Metrics;
use crate::models::{ChampionRegistration, LoginCredentials, MemberRegistration};
use crate::normalize::{format_date_yyyy_mm_dd, normalize_phone};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for the Unda portal API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. It holds no
/// mutable state; cloning is cheap and clones share the metrics collector.
#[derive(Clone)]
pub struct PortalClient {
    /// Base URL for the portal API
    base_url: String,

    /// Optional bearer token attached to requests
    access_token: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl PortalClient {
    /// Create a new PortalClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.portal_api_url.clone(),
            access_token: config.access_token.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a PortalClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            access_token: None,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Attach a bearer token to subsequent requests.
    ///
    /// Obtaining and refreshing the token is the caller's concern.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a POST request with a JSON body and parse the response body.
    ///
    /// Non-2xx responses are NOT errors here: their body is parsed and
    /// returned just like a success.
    fn post_json(&self, path: &str, body: &Value) -> PortalApiResult<Value> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);

        let mut request = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json");
        if let Some(token) = &self.access_token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        let result = request.send_json(body);
        let duration = start.elapsed();

        let response = match result {
            Ok(response) => {
                tracing::debug!("POST {} - status {}", url, response.status());
                response
            }
            // The portal reports validation problems, duplicates and auth
            // failures through the body of non-2xx responses.
            Err(ureq::Error::Status(code, response)) => {
                tracing::debug!("POST {} - status {}", url, code);
                response
            }
            Err(ureq::Error::Transport(transport)) => {
                tracing::error!("POST {} - transport error: {}", url, transport);
                self.metrics.record_http_error();
                self.metrics.record_http_request(duration);
                return Err(Self::map_transport_error(&transport));
            }
        };

        self.metrics.record_http_request(duration);

        let body = response
            .into_string()
            .map_err(|e| PortalApiError::HttpError(e.to_string()))?;
        serde_json::from_str(&body).map_err(PortalApiError::JsonError)
    }

    /// Map a ureq transport error to a PortalApiError.
    fn map_transport_error(transport: &ureq::Transport) -> PortalApiError {
        if transport.kind() == ureq::ErrorKind::ConnectionFailed {
            PortalApiError::HttpError("Connection failed".to_string())
        } else if transport.kind() == ureq::ErrorKind::Io {
            PortalApiError::Timeout
        } else {
            PortalApiError::HttpError(transport.to_string())
        }
    }

    // ========================= Registration Operations =========================

    /// Register a member via `POST /api/auth/register`.
    ///
    /// Builds the canonical body: required fields copied through, the phone
    /// number normalized, the date of birth normalized when present, and
    /// absent optional fields omitted entirely.
    pub fn register_member(&self, registration: &MemberRegistration) -> PortalApiResult<Value> {
        use crate::models::RegisterMemberRequest;

        let request = RegisterMemberRequest::from(registration);
        let body = serde_json::to_value(&request).map_err(PortalApiError::JsonError)?;

        tracing::info!("Registering member: {}", registration.username);

        let response = self.post_json("/api/auth/register", &body)?;
        self.metrics.record_registration_submitted();
        Ok(response)
    }

    /// Register a champion via `POST /api/champions/register`.
    ///
    /// All caller-supplied fields pass through unchanged except the phone
    /// and date-of-birth normalization overlays.
    pub fn register_champion(&self, registration: &ChampionRegistration) -> PortalApiResult<Value> {
        let mut body = serde_json::to_value(registration).map_err(PortalApiError::JsonError)?;

        if let Some(fields) = body.as_object_mut() {
            // `null` when there was nothing to normalize, matching the
            // portal's expectation that the field is always present.
            fields.insert(
                "phone_number".to_string(),
                match normalize_phone(&registration.phone_number) {
                    Some(phone) => Value::String(phone),
                    None => Value::Null,
                },
            );
            if !registration.date_of_birth.is_empty() {
                fields.insert(
                    "date_of_birth".to_string(),
                    match format_date_yyyy_mm_dd(&registration.date_of_birth) {
                        Some(date) => Value::String(date),
                        None => Value::Null,
                    },
                );
            }
        }

        tracing::info!("Registering champion: {}", registration.full_name);

        let response = self.post_json("/api/champions/register", &body)?;
        self.metrics.record_registration_submitted();
        Ok(response)
    }

    /// Submit a champion application via the legacy `POST /api/champion/apply`.
    ///
    /// The payload is posted verbatim, with no normalization; kept for
    /// backward compatibility with the older endpoint contract.
    pub fn apply_champion_legacy(&self, payload: &Value) -> PortalApiResult<Value> {
        let response = self.post_json("/api/champion/apply", payload)?;
        self.metrics.record_registration_submitted();
        Ok(response)
    }

    // ========================= Auth Operations =========================

    /// Log in via `POST /api/auth/login`.
    ///
    /// Like the registration calls, the response body is returned for every
    /// status; map the status with
    /// [`classify_status`](crate::error::classify_status) to decide what to
    /// show the user.
    pub fn login(&self, credentials: &LoginCredentials) -> PortalApiResult<Value> {
        let body = serde_json::to_value(credentials).map_err(PortalApiError::JsonError)?;

        tracing::info!("Logging in: {}", credentials.username);

        let response = self.post_json("/api/auth/login", &body)?;
        self.metrics.record_login();
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = PortalClient::with_base_url("https://portal.example.org".to_string());

        assert_eq!(
            client.build_url("/api/auth/register"),
            "https://portal.example.org/api/auth/register"
        );

        assert_eq!(
            client.build_url("api/auth/register"),
            "https://portal.example.org/api/auth/register"
        );

        let client_with_slash =
            PortalClient::with_base_url("https://portal.example.org/".to_string());

        assert_eq!(
            client_with_slash.build_url("/api/auth/register"),
            "https://portal.example.org/api/auth/register"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            portal_api_url: "https://portal.example.org".to_string(),
            access_token: None,
            request_timeout: 10,
            log_level: "error".to_string(),
        };

        let client = PortalClient::new(&config);
        assert_eq!(client.base_url, "https://portal.example.org");
        assert!(client.access_token.is_none());
    }

    #[test]
    fn test_with_access_token() {
        let client = PortalClient::with_base_url("https://portal.example.org".to_string())
            .with_access_token("token-123");
        assert_eq!(client.access_token.as_deref(), Some("token-123"));
    }
}
