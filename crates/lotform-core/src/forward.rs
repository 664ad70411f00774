//! Query Forwarder
//!
//! Relays inbound read queries for the passthrough entity sets to the
//! appropriate backend connection and returns the rows unchanged. No
//! transformation, no validation beyond entity routing, no caching;
//! backend errors propagate to the caller as-is.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::connection::Connection;
use crate::errors::{LotformError, Result};
use crate::query::{EntitySet, Query};

/// Routes passthrough reads to their backend connection
pub struct QueryForwarder {
    inspection: Arc<dyn Connection>,
    decision_codes: Arc<dyn Connection>,
}

impl QueryForwarder {
    /// Create a forwarder over the two passthrough sources
    pub fn new(inspection: Arc<dyn Connection>, decision_codes: Arc<dyn Connection>) -> Self {
        Self {
            inspection,
            decision_codes,
        }
    }

    /// Forward a read query and return the backend rows unchanged
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuery` for entity sets that are not exposed for
    /// passthrough reads, or whatever the backend connection raised.
    pub async fn forward(&self, query: Query) -> Result<Vec<Value>> {
        let connection = match query.entity {
            EntitySet::UsageDecisionSet => &self.decision_codes,
            entity if entity.is_passthrough() => &self.inspection,
            entity => {
                return Err(LotformError::InvalidQuery {
                    message: format!("{} is not a passthrough entity set", entity),
                });
            }
        };

        debug!(
            connection = connection.name(),
            entity = query.entity.as_str(),
            "forwarding read query"
        );
        connection.run(query).await
    }
}
