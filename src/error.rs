use thiserror::Error;

/// Every way a feed or fragment load can fail. None of these reach the page; the
/// session logs them and carries on with whatever it already has.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(i32),

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported feed shape: expected an array or an object, found {0}")]
    Shape(&'static str),
}

impl From<minreq::Error> for LoadError {
    fn from(error: minreq::Error) -> Self {
        Self::Network(error.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(error: std::io::Error) -> Self {
        Self::Network(error.to_string())
    }
}
