use std::fmt;

/// Custom error type for Cribl API operations
#[derive(Debug)]
pub enum CriblError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Username/password or OAuth token exchange failed
    Authentication(Box<CriblError>),
    /// Login succeeded but the response carried no token
    MissingToken,
    /// A list request failed
    ListFailed {
        resource: &'static str,
        source: Box<CriblError>,
    },
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Writing the report failed
    Io(std::io::Error),
}

impl fmt::Display for CriblError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CriblError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CriblError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CriblError::Authentication(e) => write!(f, "Authentication failed: {}", e),
            CriblError::MissingToken => write!(f, "No token received from authentication"),
            CriblError::ListFailed { resource, source } => {
                write!(f, "Failed to list {}: {}", resource, source)
            }
            CriblError::Json(msg) => write!(f, "JSON error: {}", msg),
            CriblError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CriblError::Io(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for CriblError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CriblError::Http(e) => Some(e),
            CriblError::Authentication(e) => Some(e.as_ref()),
            CriblError::ListFailed { source, .. } => Some(source.as_ref()),
            CriblError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CriblError {
    fn from(err: reqwest::Error) -> Self {
        CriblError::Http(err)
    }
}

impl From<serde_json::Error> for CriblError {
    fn from(err: serde_json::Error) -> Self {
        CriblError::Json(err.to_string())
    }
}

impl From<std::io::Error> for CriblError {
    fn from(err: std::io::Error) -> Self {
        CriblError::Io(err)
    }
}

impl From<dotenvy::Error> for CriblError {
    fn from(err: dotenvy::Error) -> Self {
        CriblError::Config(err.to_string())
    }
}

/// Render an error together with every error in its source chain.
///
/// reqwest keeps TLS failures (e.g. "invalid peer certificate") in the
/// source chain, not in the top-level message.
pub fn error_chain_text(err: &(dyn std::error::Error + 'static)) -> String {
    let mut text = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        text.push_str(": ");
        text.push_str(&cause.to_string());
        current = cause.source();
    }
    text
}

/// Result type alias for Cribl operations
pub type Result<T> = std::result::Result<T, CriblError>;
