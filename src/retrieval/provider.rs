use std::fmt;

use async_trait::async_trait;

use crate::core::resource::Resource;

/// Errors that can occur while resolving a source reference.
/// Variants carry enough info to render a useful status line.
#[derive(Debug)]
pub enum RetrievalError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Feed endpoint answered with a non-success status.
    Http { status: u16 },
    /// Body was not a decodable resource feed.
    Decode(String),
    /// Local file could not be read.
    Io(String),
}

impl fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalError::Network(msg) => write!(f, "network error: {msg}"),
            RetrievalError::Http { status } => write!(f, "feed error (HTTP {status})"),
            RetrievalError::Decode(msg) => write!(f, "decode error: {msg}"),
            RetrievalError::Io(msg) => write!(f, "file error: {msg}"),
        }
    }
}

impl std::error::Error for RetrievalError {}

/// A transport that can resolve a source reference into a full store.
///
/// Implementations are free to interpret the reference however they like
/// (URL, file path, fixture name); the loader treats it as opaque.
#[async_trait]
pub trait ResourceProvider: Send + Sync {
    /// Short name for logs and the title bar.
    fn name(&self) -> &str;

    /// Resolve `source` into a complete, ordered resource store.
    async fn fetch(&self, source: &str) -> Result<Vec<Resource>, RetrievalError>;
}
