use std::fmt;

/// Result type for ohmybar-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the providers layer
#[derive(Debug)]
pub enum Error {
    /// Request could not be sent or its body could not be read
    Http(reqwest::Error),

    /// Remote answered with a non-success status
    Status { url: String, status: u16 },

    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// A URL could not be built from the configured host
    Url(url::ParseError),

    /// A single record is malformed (skipped, never fatal to a batch)
    Normalization(String),

    /// Required plugin setting is missing or unusable
    Configuration(String),
}

impl Error {
    /// Whether this error aborts a whole plugin (as opposed to one record)
    pub fn is_fetch_failure(&self) -> bool {
        !matches!(self, Error::Normalization(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { url, status } => write!(f, "{} returned HTTP {}", url, status),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Url(err) => write!(f, "Invalid URL: {}", err),
            Error::Normalization(msg) => write!(f, "Malformed record: {}", msg),
            Error::Configuration(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Url(err) => Some(err),
            Error::Status { .. } | Error::Normalization(_) | Error::Configuration(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err)
    }
}
