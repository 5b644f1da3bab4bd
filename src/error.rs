// src/error.rs
use cdk_docs_traits::ResourceError;
use thiserror::Error;

/// Errors surfaced by the resource catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The URI does not use the catalog's scheme or does not match any route.
    #[error("Invalid resource URI '{uri}': {reason}")]
    InvalidUri { uri: String, reason: String },

    /// The URI is well formed but names nothing in the mirror.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// The provider could not reach its backing store.
    #[error("Resource backend failed: {0}")]
    Backend(#[from] ResourceError),

    #[error("Failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn invalid_uri(uri: &str, reason: impl Into<String>) -> Self {
        CatalogError::InvalidUri {
            uri: uri.to_string(),
            reason: reason.into(),
        }
    }
}
