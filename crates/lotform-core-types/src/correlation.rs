//! Correlation types for request tracking
//!
//! Every inbound request gets a RequestId so that a failed composition can
//! be correlated with the backend calls it issued.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one inbound request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh RequestId (UUIDv7, so ids sort by creation time)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Adopt an id handed in from outside, e.g. a gateway header
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through a composition for correlation
///
/// The lot identifier is attached as soon as it is known so that every log
/// line emitted on the request path can name it.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub lot_id: Option<String>,
}

impl RequestContext {
    /// Create a new context with a fresh RequestId
    pub fn new() -> Self {
        Self {
            request_id: RequestId::new(),
            lot_id: None,
        }
    }

    /// Attach the inspection-lot identifier to the context
    pub fn with_lot_id(mut self, lot_id: impl Into<String>) -> Self {
        self.lot_id = Some(lot_id.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
