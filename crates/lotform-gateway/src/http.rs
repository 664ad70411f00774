//! HTTP connection to a backend record service

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use lotform_core::{Connection, Filter, LotformError, Query, Result};

use crate::odata;

/// A named HTTP connection to one backend record service
///
/// The entity-set name is appended to the base URL; filters and projection
/// travel as OData-style query parameters. Transport concerns beyond a
/// single request/response (auth headers, timeouts) belong to the
/// `reqwest::Client` handed in at construction.
pub struct HttpConnection {
    name: String,
    base_url: String,
    client: reqwest::Client,
}

impl HttpConnection {
    /// Create a connection with the given service name and base URL
    pub fn new(name: impl Into<String>, base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            name: name.into(),
            base_url,
            client,
        }
    }

    fn backend_error(&self, message: impl Into<String>) -> LotformError {
        LotformError::Backend {
            connection: self.name.clone(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl Connection for HttpConnection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, query: Query) -> Result<Vec<Value>> {
        // An empty membership filter matches nothing; callers are expected
        // to skip the query instead of sending one.
        for filter in &query.filters {
            if let Filter::In { field, values } = filter {
                if values.is_empty() {
                    return Err(LotformError::InvalidQuery {
                        message: format!("membership filter on '{}' has no values", field),
                    });
                }
            }
        }

        let url = format!("{}/{}", self.base_url, query.entity.as_str());
        let params = odata::query_params(&query);
        debug!(connection = %self.name, %url, "running backend query");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|err| self.backend_error(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.backend_error(format!("{}: {}", status, body.trim())));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| self.backend_error(err.to_string()))?;
        odata::decode_rows(payload).map_err(|message| self.backend_error(message))
    }
}
