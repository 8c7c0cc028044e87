//! HTTP client for the petstore pet endpoints.
//!
//! Thin wrapper over `reqwest` that captures the status code and body of every
//! response instead of erroring on non-2xx, so tests can assert on negative
//! paths directly.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::pet::{Pet, Status};

/// A captured API response: status code plus raw body text.
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
    /// URL the request was sent to.
    pub url: String,
}

impl ApiResponse {
    /// Returns true for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decodes the body as the given JSON shape.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|source| Error::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

/// Client for the pet resource of the petstore API.
pub struct PetStoreClient {
    config: ApiConfig,
    client: reqwest::Client,
}

impl PetStoreClient {
    /// Creates a client for the given endpoint configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Http)?;
        Ok(Self { config, client })
    }

    /// Returns the URL for the pet collection.
    pub fn collection_url(&self) -> &str {
        &self.config.base_url
    }

    /// Returns the URL for a single pet, id taken verbatim so tests can pass
    /// deliberately non-numeric ids.
    pub fn pet_url(&self, id: &str) -> String {
        format!("{}/{}", self.config.base_url, id)
    }

    /// Returns the find-by-status URL for the given status value.
    pub fn find_by_status_url(&self, status: &str) -> String {
        format!("{}/findByStatus?status={}", self.config.base_url, status)
    }

    /// `POST /pet` with the pet as JSON body.
    pub async fn create_pet(&self, pet: &Pet) -> Result<ApiResponse> {
        let url = self.collection_url().to_string();
        debug!(id = pet.id, name = %pet.name, "creating pet");
        let response = self.client.post(&url).json(pet).send().await?;
        Self::capture(url, response).await
    }

    /// `GET /pet/{id}`.
    pub async fn get_pet(&self, id: i64) -> Result<ApiResponse> {
        self.get_pet_raw(&id.to_string()).await
    }

    /// `GET /pet/{id}` with an arbitrary (possibly non-numeric) id segment.
    pub async fn get_pet_raw(&self, id: &str) -> Result<ApiResponse> {
        let url = self.pet_url(id);
        debug!(%url, "fetching pet");
        let response = self.client.get(&url).send().await?;
        Self::capture(url, response).await
    }

    /// `GET /pet/findByStatus?status={status}`.
    pub async fn find_by_status(&self, status: Status) -> Result<ApiResponse> {
        let url = self.find_by_status_url(status.as_str());
        debug!(%url, "searching pets by status");
        let response = self.client.get(&url).send().await?;
        Self::capture(url, response).await
    }

    /// `PUT /pet` with the full pet record.
    pub async fn update_pet(&self, pet: &Pet) -> Result<ApiResponse> {
        let url = self.collection_url().to_string();
        debug!(id = pet.id, name = %pet.name, "updating pet");
        let response = self.client.put(&url).json(pet).send().await?;
        Self::capture(url, response).await
    }

    /// `PUT /pet` with a raw JSON payload, for malformed-update scenarios.
    pub async fn update_pet_raw(&self, payload: &Value) -> Result<ApiResponse> {
        let url = self.collection_url().to_string();
        debug!("updating pet with raw payload");
        let response = self.client.put(&url).json(payload).send().await?;
        Self::capture(url, response).await
    }

    /// `DELETE /pet/{id}` with the `api_key` header.
    pub async fn delete_pet(&self, id: i64) -> Result<ApiResponse> {
        self.delete_pet_raw(&id.to_string()).await
    }

    /// `DELETE /pet/{id}` with an arbitrary id segment.
    pub async fn delete_pet_raw(&self, id: &str) -> Result<ApiResponse> {
        let url = self.pet_url(id);
        debug!(%url, "deleting pet");
        let response = self
            .client
            .delete(&url)
            .header("api_key", &self.config.api_key)
            .send()
            .await?;
        Self::capture(url, response).await
    }

    async fn capture(url: String, response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse { status, body, url })
    }
}
