//! Typed HTTP client for the dish API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::types::{Dish, Health, MessageBody, NewDish};
use crate::ClientError;

/// Thin wrapper over `reqwest` bound to one API base URL (for example
/// `http://localhost:3000/api`). Every non-2xx response is an error.
#[derive(Clone, Debug)]
pub struct DishApiClient {
    http: Client,
    base_url: String,
}

impl DishApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http: Client::new(), base_url }
    }

    /// Build a client from `API_URL`, see [`crate::env::api_url`].
    pub fn from_env() -> Self {
        Self::new(crate::env::api_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Status { status: status.as_u16(), body });
        }
        resp.json::<T>().await.map_err(|e| ClientError::Parse(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::decode(resp).await
    }

    pub async fn health(&self) -> Result<Health, ClientError> {
        self.get("/health").await
    }

    pub async fn list(&self) -> Result<Vec<Dish>, ClientError> {
        self.get("/dishes").await
    }

    pub async fn random(&self) -> Result<Dish, ClientError> {
        self.get("/dishes/random").await
    }

    pub async fn create(&self, input: &NewDish) -> Result<Dish, ClientError> {
        let resp = self
            .http
            .post(self.url("/dishes"))
            .json(input)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::decode(resp).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<MessageBody, ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/dishes/{id}")))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Self::decode(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let c = DishApiClient::new("http://localhost:3000/api/");
        assert_eq!(c.url("/dishes"), "http://localhost:3000/api/dishes");
    }

    #[test]
    fn from_env_uses_api_url_override() {
        std::env::set_var("API_URL", " http://dishes.internal:8080/api/ ");
        let c = DishApiClient::from_env();
        std::env::remove_var("API_URL");
        assert_eq!(c.base_url(), "http://dishes.internal:8080/api");

        assert_eq!(DishApiClient::from_env().base_url(), crate::env::DEFAULT_API_URL);
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        // Port 9 (discard) on localhost is closed in test environments.
        let c = DishApiClient::new("http://127.0.0.1:9/api");
        let err = c.list().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        assert_eq!(err.status(), None);
    }
}
