//! OData-style query serialization and response decoding
//!
//! Pure functions, kept apart from the HTTP client so they can be tested
//! without a network.

use lotform_core::{Filter, Query};
use serde_json::Value;

/// Serialize a query into URL parameters
///
/// Equality and membership filters join into one `$filter` conjunction;
/// membership is expanded to an `or` group for V2 compatibility.
pub fn query_params(query: &Query) -> Vec<(String, String)> {
    let mut params = Vec::new();

    let filter = filter_expression(&query.filters);
    if !filter.is_empty() {
        params.push(("$filter".to_string(), filter));
    }
    if !query.select.is_empty() {
        params.push(("$select".to_string(), query.select.join(",")));
    }
    params.push(("$format".to_string(), "json".to_string()));
    params
}

fn filter_expression(filters: &[Filter]) -> String {
    filters
        .iter()
        .map(|filter| match filter {
            Filter::Eq { field, value } => format!("{} eq '{}'", field, escape(value)),
            Filter::In { field, values } => {
                let alternatives = values
                    .iter()
                    .map(|value| format!("{} eq '{}'", field, escape(value)))
                    .collect::<Vec<_>>()
                    .join(" or ");
                format!("({})", alternatives)
            }
        })
        .collect::<Vec<_>>()
        .join(" and ")
}

/// Escape a literal for an OData string comparison
fn escape(value: &str) -> String {
    value.replace('\'', "''")
}

/// Extract the row array from a response payload
///
/// Accepts a V4 `value` array, a V2 `d.results` array, or a bare array.
///
/// # Errors
///
/// Returns a message describing the envelope shape when no row array is
/// found.
pub fn decode_rows(payload: Value) -> Result<Vec<Value>, String> {
    match payload {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut entries) => {
            if let Some(Value::Array(rows)) = entries.remove("value") {
                return Ok(rows);
            }
            if let Some(Value::Object(mut inner)) = entries.remove("d") {
                if let Some(Value::Array(rows)) = inner.remove("results") {
                    return Ok(rows);
                }
            }
            Err("response envelope contains no row array".to_string())
        }
        _ => Err("response is not a JSON object or array".to_string()),
    }
}
