//! Error types for LoadForge

use thiserror::Error;

/// Main error type for LoadForge operations.
///
/// An infeasible search (an empty slot, or objectives nothing can meet) is
/// not an error: it is reported as an empty result list.
#[derive(Debug, Error)]
pub enum LoadForgeError {
    /// The catalog or definition service is unreachable or not loaded
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Malformed objectives or other caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid search configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for LoadForge operations
pub type Result<T> = std::result::Result<T, LoadForgeError>;
