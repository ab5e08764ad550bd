//! Data source adapters

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;
use crate::model::Dataset;

/// Endpoint queried when no other URL is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000";

/// Trait for anything that can produce the dataset.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use frozen_table_lib::{RowSource, error::Error, model::Dataset};
///
/// struct FileSource(std::path::PathBuf);
///
/// #[async_trait]
/// impl RowSource for FileSource {
///     async fn fetch(&self) -> Result<Dataset, Error> {
///         let body = tokio::fs::read_to_string(&self.0).await.unwrap();
///         Dataset::from_json(&body)
///     }
/// }
/// ```
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetches the full dataset once.
    async fn fetch(&self) -> Result<Dataset, Error>;
}

/// A source that always returns the same dataset.
///
/// Useful for testing or when rows are already in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    dataset: Dataset,
}

impl StaticSource {
    /// Creates a new static source.
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl RowSource for StaticSource {
    async fn fetch(&self) -> Result<Dataset, Error> {
        Ok(self.dataset.clone())
    }
}

/// Fetches the dataset with a single HTTP GET.
///
/// This source is cheap to clone (uses `Arc` internally).
///
/// # Example
///
/// ```ignore
/// use frozen_table_lib::{HttpSource, RowSource};
///
/// let source = HttpSource::builder()
///     .url("http://localhost:4000")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let dataset = source.fetch().await?;
/// ```
#[derive(Clone)]
pub struct HttpSource {
    inner: Arc<HttpSourceInner>,
}

struct HttpSourceInner {
    url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl HttpSource {
    /// Creates a new builder for constructing a source.
    pub fn builder() -> HttpSourceBuilder<Missing> {
        HttpSourceBuilder::new()
    }

    /// Returns the endpoint URL.
    pub fn url(&self) -> &Url {
        &self.inner.url
    }
}

impl std::fmt::Debug for HttpSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSource")
            .field("url", &self.inner.url.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

#[async_trait]
impl RowSource for HttpSource {
    async fn fetch(&self) -> Result<Dataset, Error> {
        log::debug!("GET {}", self.inner.url);

        let mut request = self.inner.http_client.get(self.inner.url.clone());
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            log::warn!("{} answered {}", self.inner.url, status);
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };
            return Err(ApiError::http(status.as_u16(), message).into());
        }

        let dataset = Dataset::from_json(&body)?;
        log::info!(
            "Fetched {} rows with {} columns from {}",
            dataset.len(),
            dataset.columns().len(),
            self.inner.url
        );
        Ok(dataset)
    }
}

impl HttpSource {
    fn classify(&self, error: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(error),
        }
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`HttpSource`].
///
/// The endpoint URL is required; `build()` only exists once it is set.
pub struct HttpSourceBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl HttpSourceBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the endpoint URL.
    pub fn url(self, url: impl Into<String>) -> HttpSourceBuilder<Set<String>> {
        HttpSourceBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for HttpSourceBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> HttpSourceBuilder<U> {
    /// Sets the request timeout. Unset means no timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl HttpSourceBuilder<Set<String>> {
    /// Builds the [`HttpSource`].
    ///
    /// Fails when the URL does not parse or is not `http`/`https`.
    pub fn build(self) -> Result<HttpSource, ApiError> {
        let url = Url::parse(&self.url.0)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.url.0, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                self.url.0,
                url.scheme()
            )));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(HttpSource {
            inner: Arc::new(HttpSourceInner {
                url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
