use std::future::Future;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid resource location '{0}'")]
    InvalidLocation(String),

    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Transport for translation resources.
///
/// `location` is the resource path, e.g. `/translation/en.json`.
pub trait ResourceFetcher: Send + Sync {
    fn fetch(&self, location: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Reads resources from a directory, treating locations as relative to it.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    /// Directory that resource locations are resolved against.
    root: PathBuf,
}

impl FileFetcher {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceFetcher for FileFetcher {
    async fn fetch(&self, location: &str) -> Result<Value, FetchError> {
        let path = self.root.join(location.trim_start_matches('/'));
        tracing::debug!(path = %path.display(), "Reading translation resource");

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| FetchError::Io { path: path.clone(), source })?;

        Ok(serde_json::from_str(&content)?)
    }
}

/// Fetches resources over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    /// Shared connection pool.
    client: reqwest::Client,
    /// Base that resource locations are joined onto.
    base_url: reqwest::Url,
}

impl HttpFetcher {
    /// # Errors
    /// `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base_url = reqwest::Url::parse(base_url)
            .map_err(|e| FetchError::InvalidLocation(format!("{base_url}: {e}")))?;
        Ok(Self { client: reqwest::Client::new(), base_url })
    }

    /// Joins `location` onto the base URL.
    fn url_for(&self, location: &str) -> Result<reqwest::Url, FetchError> {
        self.base_url
            .join(location)
            .map_err(|e| FetchError::InvalidLocation(format!("{location}: {e}")))
    }
}

impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, location: &str) -> Result<Value, FetchError> {
        let url = self.url_for(location)?;
        tracing::debug!(%url, "Fetching translation resource");

        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        Ok(serde_json::from_str(&body)?)
    }
}
