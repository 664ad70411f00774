use thiserror::Error;

/// Result type alias using LotformError
pub type Result<T> = std::result::Result<T, LotformError>;

/// Error taxonomy for lotform operations
///
/// Each variant maps to a stable error code usable for programmatic
/// handling and for the HTTP surface's status mapping. The taxonomy is
/// deliberately small: the only locally distinguished condition is the
/// missing lot; everything else surfaces as a wrapped generic failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LotformError {
    /// The requested inspection lot matches no backend record
    #[error("Inspection lot not found: {lot_id}")]
    LotNotFound { lot_id: String },

    /// A backend connection failed during fetch or lookup
    #[error("Backend connection '{connection}' failed: {message}")]
    Backend { connection: String, message: String },

    /// Document assembly or markup rendering failed
    #[error("Document rendering failed: {message}")]
    Render { message: String },

    /// Record decoding or encoding failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// The inbound query cannot be forwarded (unknown or non-passthrough entity)
    #[error("Invalid query: {message}")]
    InvalidQuery { message: String },

    /// Startup configuration is unusable
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl LotformError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            LotformError::LotNotFound { .. } => "ERR_LOT_NOT_FOUND",
            LotformError::Backend { .. } => "ERR_BACKEND",
            LotformError::Render { .. } => "ERR_RENDER",
            LotformError::Serialization { .. } => "ERR_SERIALIZATION",
            LotformError::InvalidQuery { .. } => "ERR_INVALID_QUERY",
            LotformError::Config { .. } => "ERR_CONFIG",
        }
    }

    /// Whether this error is the distinguished not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, LotformError::LotNotFound { .. })
    }
}

/// Conversion from serde_json::Error to LotformError
impl From<serde_json::Error> for LotformError {
    fn from(err: serde_json::Error) -> Self {
        LotformError::Serialization {
            message: err.to_string(),
        }
    }
}
