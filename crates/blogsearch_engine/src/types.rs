use std::fmt;
use std::path::PathBuf;

use url::Url;

/// Where a page or dataset lives: a web address or a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Url(Url),
    File(PathBuf),
}

impl Location {
    /// `http(s)://` and `file://` inputs become URLs/paths; anything else is a file path.
    pub fn parse(input: &str) -> Location {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Location::Url(url),
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => Location::File(path),
                Err(()) => Location::File(PathBuf::from(input)),
            },
            _ => Location::File(PathBuf::from(input)),
        }
    }

    /// Resolves `relative` the way a browser resolves a relative resource
    /// against the current document.
    pub fn join(&self, relative: &str) -> Result<Location, FetchError> {
        match self {
            Location::Url(base) => base
                .join(relative)
                .map(Location::Url)
                .map_err(|err| FetchError::new(FailureKind::InvalidLocation, err.to_string())),
            Location::File(path) => {
                let dir = path.parent().map(PathBuf::from).unwrap_or_default();
                Ok(Location::File(dir.join(relative)))
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Url(url) => write!(f, "{url}"),
            Location::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// What a retrieval is for. Only pages are held to the content-type allowlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Page,
    Dataset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutput {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
    /// Where the bytes came from after redirects.
    pub final_location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidLocation,
    HttpStatus(u16),
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    NotFound,
    Io,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidLocation => write!(f, "invalid location"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::Io => write!(f, "io error"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Why the dataset could not be obtained.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("fetching {location} failed: {source}")]
    Fetch {
        location: String,
        #[source]
        source: FetchError,
    },
    #[error("malformed dataset json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("dataset has no `blogs` field")]
    MissingBlogs,
}
