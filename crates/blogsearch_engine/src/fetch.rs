use std::io::ErrorKind;
use std::path::Path;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use widget_logging::widget_debug;

use crate::{FailureKind, FetchError, FetchOutput, Location, ResourceKind};

/// Limits applied to every page or dataset retrieval.
///
/// No timeout is applied; a slow load leaves the widget inert.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub redirect_limit: usize,
    pub max_bytes: u64,
    /// Accepted page `Content-Type` values; empty accepts anything.
    /// Dataset fetches are never checked against it.
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec![
                "text/html".to_string(),
                "application/xhtml+xml".to_string(),
                "text/plain".to_string(),
            ],
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(
        &self,
        location: &Location,
        kind: ResourceKind,
    ) -> Result<FetchOutput, FetchError>;
}

/// Reads `http(s)` locations with `reqwest` and files with `tokio::fs`.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(self.settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        if self.settings.allowed_content_types.is_empty() {
            return true;
        }
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }

    async fn fetch_url(
        &self,
        url: &url::Url,
        kind: ResourceKind,
    ) -> Result<FetchOutput, FetchError> {
        let client = self.build_client()?;
        let response = client
            .get(url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let final_location = Location::Url(response.url().clone());
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        // Static hosts serve `blogs.json` under all sorts of types.
        if let (ResourceKind::Page, Some(ct)) = (kind, content_type.as_deref()) {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            bytes.extend_from_slice(&chunk);
        }

        widget_debug!("Fetched {} bytes from {}", bytes.len(), final_location);
        Ok(FetchOutput {
            bytes,
            content_type,
            final_location,
        })
    }

    async fn fetch_file(&self, path: &Path) -> Result<FetchOutput, FetchError> {
        let metadata = tokio::fs::metadata(path).await.map_err(map_io_error)?;
        if metadata.len() > self.settings.max_bytes {
            return Err(self.too_large(metadata.len()));
        }
        let bytes = tokio::fs::read(path).await.map_err(map_io_error)?;

        widget_debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(FetchOutput {
            bytes,
            content_type: None,
            final_location: Location::File(path.to_path_buf()),
        })
    }
}

impl Default for ReqwestFetcher {
    fn default() -> Self {
        Self::new(FetchSettings::default())
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        location: &Location,
        kind: ResourceKind,
    ) -> Result<FetchOutput, FetchError> {
        match location {
            Location::Url(url) => self.fetch_url(url, kind).await,
            Location::File(path) => self.fetch_file(path).await,
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

fn map_io_error(err: std::io::Error) -> FetchError {
    let kind = if err.kind() == ErrorKind::NotFound {
        FailureKind::NotFound
    } else {
        FailureKind::Io
    };
    FetchError::new(kind, err.to_string())
}
