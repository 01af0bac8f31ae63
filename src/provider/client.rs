//! Typed client for the NASA library API.
//!
//! Builds the URL from an endpoint descriptor, issues the GET through the
//! injected [`HttpClient`], checks the status and decodes the body. Every
//! failure mode collapses into [`ClientError`]; the app layer does not
//! distinguish further.

use std::sync::Arc;

use tracing::debug;

use crate::config::AppConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Planet, SpaceLibraryFilters, SpaceLibraryItems};
use crate::provider::endpoint::NasaLibraryEndpoint;
use crate::traits::{Headers, HttpClient};

/// Client for library queries, media-URL resolution and the planets
/// document.
#[derive(Clone)]
pub struct SpaceLibraryClient {
    http: Arc<dyn HttpClient>,
    config: AppConfig,
}

impl SpaceLibraryClient {
    pub fn new(http: Arc<dyn HttpClient>, config: AppConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Fetch one library page described by `endpoint`.
    pub async fn get_library(
        &self,
        endpoint: &NasaLibraryEndpoint,
    ) -> ClientResult<SpaceLibraryItems> {
        self.fetch_json(endpoint).await
    }

    /// Fetch one default-mode library page.
    pub async fn get_library_default(&self, page: u32) -> ClientResult<SpaceLibraryItems> {
        self.fetch_json(&NasaLibraryEndpoint::LibraryDefault { page })
            .await
    }

    /// Fetch one library page under a filter set.
    pub async fn get_library_filtered(
        &self,
        filters: &SpaceLibraryFilters,
    ) -> ClientResult<SpaceLibraryItems> {
        self.fetch_json(&NasaLibraryEndpoint::LibraryFilters {
            filters: filters.clone(),
        })
        .await
    }

    /// Probe for the last default-mode page.
    pub async fn get_last_page_default(&self) -> ClientResult<SpaceLibraryItems> {
        self.fetch_json(&NasaLibraryEndpoint::LastPageDefault).await
    }

    /// Probe for the last page under a filter set.
    pub async fn get_last_page_filtered(
        &self,
        filters: &SpaceLibraryFilters,
    ) -> ClientResult<SpaceLibraryItems> {
        self.fetch_json(&NasaLibraryEndpoint::LastPageFilters {
            filters: filters.clone(),
        })
        .await
    }

    /// Resolve the asset URL list behind an item's collection document.
    pub async fn get_media_urls(&self, json_url: &str) -> ClientResult<Vec<String>> {
        self.fetch_json(&NasaLibraryEndpoint::MediaUrls {
            json_url: json_url.to_string(),
        })
        .await
    }

    /// Fetch and decode the planets document.
    pub async fn get_planets(&self) -> ClientResult<Vec<Planet>> {
        let url = self
            .config
            .planets_url
            .clone()
            .ok_or(ClientError::PlanetsUrlMissing)?;
        self.get_json(&url).await
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &NasaLibraryEndpoint,
    ) -> ClientResult<T> {
        let url = endpoint.url(&self.config);
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        debug!(url, "GET");
        let response = self.http.get(url, &Headers::new()).await?;

        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
                url: url.to_string(),
            });
        }

        Ok(response.json()?)
    }
}
