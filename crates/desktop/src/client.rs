//! HTTP client for the dealership API.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use speedorz_catalog::{Discount, Tax, Vehicle};
use speedorz_ordering::{CreatedOrder, OrderRequest};

use crate::api::{
    ApiError, DISCOUNTS_PATH, ORDERS_PATH, OrderingApi, PROMOTIONAL_VEHICLES_PATH, TAXES_PATH,
};
use crate::config::ClientConfig;
use crate::credentials::{Anonymous, CredentialProvider, StaticToken};

/// Client for the dealership REST API.
///
/// One `reqwest::Client` (and its connection pool) is shared by every call. No
/// timeout is configured beyond the transport default.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    /// Build a client from configuration: the configured token if present,
    /// unauthenticated otherwise.
    pub fn from_config(config: &ClientConfig) -> Self {
        let credentials: Arc<dyn CredentialProvider> = match &config.auth_token {
            Some(token) => Arc::new(StaticToken::new(token.clone())),
            None => Arc::new(Anonymous),
        };
        Self::new(config.api_url.clone(), credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.credentials.bearer_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.authorize(self.http.get(self.url(path)));
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let req = self.authorize(self.http.post(self.url(path)).json(body));
        let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Self::read_json(resp).await
    }

    async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Api(status.as_u16(), resp.text().await.unwrap_or_default()));
        }
        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl core::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OrderingApi for ApiClient {
    async fn list_discounts(&self) -> Result<Vec<Discount>, ApiError> {
        self.get_json(DISCOUNTS_PATH).await
    }

    async fn list_taxes(&self) -> Result<Vec<Tax>, ApiError> {
        self.get_json(TAXES_PATH).await
    }

    async fn list_promotional_vehicles(&self) -> Result<Vec<Vehicle>, ApiError> {
        self.get_json(PROMOTIONAL_VEHICLES_PATH).await
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<CreatedOrder, ApiError> {
        tracing::debug!(
            lines = request.lines.len(),
            client_id = %request.client_id,
            "posting purchase order"
        );
        self.post_json(ORDERS_PATH, request).await
    }
}
