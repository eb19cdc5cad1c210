//! Async wrapper around the synchronous PortalClient.
//!
//! This module provides an async interface to the synchronous PortalClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime. Concurrent calls are independent:
//! there is no shared mutable state and no ordering between them.

use crate::client::PortalClient;
use crate::error::{PortalApiError, PortalApiResult};
use crate::models::{ChampionRegistration, LoginCredentials, MemberRegistration};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Async wrapper trait for portal client operations.
///
/// This trait provides async versions of all PortalClient methods,
/// internally using `tokio::task::spawn_blocking` to avoid
/// blocking the async runtime with synchronous HTTP calls.
#[async_trait]
pub trait AsyncPortalClient: Send + Sync {
    async fn register_member(&self, registration: &MemberRegistration) -> PortalApiResult<Value>;
    async fn register_champion(
        &self,
        registration: &ChampionRegistration,
    ) -> PortalApiResult<Value>;
    async fn apply_champion_legacy(&self, payload: &Value) -> PortalApiResult<Value>;
    async fn login(&self, credentials: &LoginCredentials) -> PortalApiResult<Value>;
}

/// Async wrapper around the synchronous PortalClient.
#[derive(Clone)]
pub struct AsyncPortalClientImpl {
    client: Arc<PortalClient>,
}

impl AsyncPortalClientImpl {
    pub fn new(client: PortalClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncPortalClient for AsyncPortalClientImpl {
    async fn register_member(&self, registration: &MemberRegistration) -> PortalApiResult<Value> {
        let client = self.client.clone();
        let registration = registration.clone();

        tokio::task::spawn_blocking(move || client.register_member(&registration))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn register_champion(
        &self,
        registration: &ChampionRegistration,
    ) -> PortalApiResult<Value> {
        let client = self.client.clone();
        let registration = registration.clone();

        tokio::task::spawn_blocking(move || client.register_champion(&registration))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn apply_champion_legacy(&self, payload: &Value) -> PortalApiResult<Value> {
        let client = self.client.clone();
        let payload = payload.clone();

        tokio::task::spawn_blocking(move || client.apply_champion_legacy(&payload))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn login(&self, credentials: &LoginCredentials) -> PortalApiResult<Value> {
        let client = self.client.clone();
        let credentials = credentials.clone();

        tokio::task::spawn_blocking(move || client.login(&credentials))
            .await
            .map_err(|e| PortalApiError::HttpError(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[tokio::test]
    async fn test_async_client_creation() {
        let config = Config {
            portal_api_url: "https://portal.example.org".to_string(),
            access_token: None,
            request_timeout: 10,
            log_level: "error".to_string(),
        };
        let client = PortalClient::new(&config);
        let async_client = AsyncPortalClientImpl::new(client);

        // Should be able to clone
        let _cloned = async_client.clone();
    }
}
