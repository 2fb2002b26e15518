// ABOUTME: Nexus REST API client over reqwest with HTTP basic auth.
// ABOUTME: Implements the Gateway trait for search, repository listing, and asset deletion.

use super::error::{DecodeSnafu, GatewayError, RequestSnafu, StatusSnafu, excerpt};
use super::gateway::Gateway;
use super::models::{Page, Repository};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{AssetId, RepositoryName};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use snafu::ResultExt;

const API_PREFIX: &str = "/service/rest/v1";

/// Authenticated session against one Nexus instance.
pub struct NexusClient {
    http: Client,
    base_url: String,
    login: String,
    password: String,
}

impl std::fmt::Debug for NexusClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NexusClient")
            .field("base_url", &self.base_url)
            .field("login", &self.login)
            .finish_non_exhaustive()
    }
}

impl NexusClient {
    /// Build a client from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the password cannot be resolved or the HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let password = config.password.resolve()?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("nexus-cleaner/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.url.trim_end_matches('/').to_string(),
            login: config.login.clone(),
            password,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GatewayError> {
        let response = self
            .http
            .get(url)
            .basic_auth(&self.login, Some(&self.password))
            .send()
            .await
            .context(RequestSnafu { url })?;

        let body = ensure_success(url, response).await?;
        serde_json::from_str(&body).context(DecodeSnafu {
            url,
            body: excerpt(&body),
        })
    }
}

/// Read the body of a response, failing on any non-2xx status.
async fn ensure_success(url: &str, response: Response) -> Result<String, GatewayError> {
    let status = response.status();
    let body = response.text().await.context(RequestSnafu { url })?;

    if !status.is_success() {
        tracing::warn!(url, status = status.as_u16(), "response not ok");
        return StatusSnafu {
            url,
            status: status.as_u16(),
            body: excerpt(&body),
        }
        .fail();
    }

    Ok(body)
}

#[async_trait]
impl Gateway for NexusClient {
    async fn list_repositories(&self) -> Result<Vec<Repository>, GatewayError> {
        let url = self.url("/repositories");
        self.get_json(&url).await
    }

    async fn search_page(
        &self,
        repository: &RepositoryName,
        cursor: Option<&str>,
    ) -> Result<Page, GatewayError> {
        let mut url = format!(
            "{}?repository={}",
            self.url("/search"),
            urlencoding::encode(repository.as_str())
        );
        if let Some(token) = cursor {
            url.push_str("&continuationToken=");
            url.push_str(&urlencoding::encode(token));
        }
        self.get_json(&url).await
    }

    async fn delete_asset(&self, id: &AssetId) -> Result<(), GatewayError> {
        let url = self.url(&format!("/assets/{}", urlencoding::encode(id.as_str())));
        let response = self
            .http
            .delete(&url)
            .basic_auth(&self.login, Some(&self.password))
            .send()
            .await
            .context(RequestSnafu { url: &url })?;

        ensure_success(&url, response).await.map(drop)
    }
}
