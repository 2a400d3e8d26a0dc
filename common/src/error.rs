//! Failure taxonomy for calls to the upstream catalog.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Why a catalog request produced no data.
///
/// Serialisable so it can travel through a server function unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum CatalogError {
    /// Network or HTTP-level failure.
    #[error("transport error: {0}")]
    Transport(String),
    /// The upstream has no record for the requested id.
    #[error("item {0} not found")]
    NotFound(u32),
    /// The upstream answered with a body we could not read.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}

/// Collapse a detail lookup into "found" or "not found".
///
/// Every failure is terminal for the request; anything other than a plain
/// miss is logged before being treated as one.
pub fn found_or_none<T>(result: Result<T, CatalogError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(CatalogError::NotFound(_)) => None,
        Err(e) => {
            warn!("Detail lookup failed, treating as not found: {e}");
            None
        }
    }
}
