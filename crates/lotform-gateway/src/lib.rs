//! Lotform Gateway - HTTP backend connections
//!
//! Implements the `Connection` seam over HTTP for OData-style record
//! services: declarative queries are serialized to `$filter`/`$select`
//! query strings, and response envelopes are decoded tolerantly (`value`
//! array, V2 `d.results`, or a bare array).
//!
//! One best-effort request per query: no retries, no caching, no
//! pagination.

pub mod http;
pub mod odata;

pub use http::HttpConnection;
