/// Error types for the preloader crates
use thiserror::Error;

/// Main error type for preloader operations
#[derive(Error, Debug)]
pub enum PreloaderError {
    /// The indicator element is not in the page
    #[error("Preloader element not found: #{id}")]
    ElementNotFound { id: String },

    /// No `window` or `document` to look the element up in
    #[error("No document available to look up the preloader element")]
    NoDocument,

    /// A DOM call threw
    #[error("DOM operation failed: {0}")]
    Dom(String),

    /// Configuration values are unusable
    #[error("Invalid preloader config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("Failed to parse preloader config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Reconfiguration attempted while operations are in flight
    #[error("Preloader is busy (loading level: {level})")]
    Busy { level: usize },
}

/// Type alias for Results using PreloaderError
pub type Result<T> = std::result::Result<T, PreloaderError>;
