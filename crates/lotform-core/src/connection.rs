//! The backend connection seam
//!
//! A `Connection` is an established, named link to one remote data source
//! that can run declarative read queries. Connections are created once at
//! startup and injected into the forwarder and composer as explicit
//! dependencies; nothing in this crate holds them globally.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::Result;
use crate::query::Query;

/// An established connection to a remote record source
///
/// `run` is a single best-effort request/response: no retries, no caching,
/// no pagination. Rows come back as raw JSON objects so that passthrough
/// reads return exactly what the backend produced.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Name of the backing service, used in error and log context
    fn name(&self) -> &str;

    /// Run a declarative read query and return the matching records
    ///
    /// # Errors
    ///
    /// Returns `Backend` when the remote call fails; the original message is
    /// preserved for diagnosability.
    async fn run(&self, query: Query) -> Result<Vec<Value>>;
}
