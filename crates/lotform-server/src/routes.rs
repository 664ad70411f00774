//! Routes and handlers

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{Path, Query as UrlQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use lotform_core::{
    log_op_end, log_op_error, log_op_start, EmptyValuePolicy, EntitySet, LotformError, Query,
};
use lotform_core_types::{schema, RequestContext};
use serde_json::Value;

use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/records/:entity", get(read_records))
        .route("/api/inspection-lots/:lot_id/print-form", get(print_form))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Error response: a status code and a human-readable message
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<LotformError> for ApiError {
    fn from(err: LotformError) -> Self {
        let status = match &err {
            LotformError::LotNotFound { .. } => StatusCode::NOT_FOUND,
            LotformError::InvalidQuery { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

async fn health() -> Json<Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Passthrough read for one entity set
///
/// Query-string mapping: `select` is a comma-separated projection,
/// `language` filters on the backend language key, and any other pair is
/// an equality filter on that backend field. Rows come back unchanged.
async fn read_records(
    Path(entity): Path<String>,
    UrlQuery(params): UrlQuery<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let started = Instant::now();
    let entity = EntitySet::parse(&entity)
        .filter(EntitySet::is_passthrough)
        .ok_or_else(|| ApiError::not_found(format!("unknown entity set: {}", entity)))?;

    let rows = state
        .forwarder
        .forward(build_query(entity, &params))
        .await
        .map_err(|err| {
            log_op_error!(
                "read_records",
                err,
                duration_ms = started.elapsed().as_millis() as u64,
                entity = entity.as_str()
            );
            ApiError::from(err)
        })?;
    Ok(Json(rows))
}

fn build_query(entity: EntitySet, params: &HashMap<String, String>) -> Query {
    let mut query = Query::from(entity);
    for (key, value) in params {
        match key.as_str() {
            "select" => {
                query = query.project(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|field| !field.is_empty()),
                );
            }
            "language" => {
                query = query.filter_eq(schema::FIELD_LANGUAGE, value.clone());
            }
            _ => {
                query = query.filter_eq(key.clone(), value.clone());
            }
        }
    }
    query
}

#[derive(Debug, Deserialize)]
struct PrintFormParams {
    /// Optional per-request empty-value policy override
    policy: Option<String>,
}

/// Compose and return the print-form document for one inspection lot
async fn print_form(
    Path(lot_id): Path<String>,
    UrlQuery(params): UrlQuery<PrintFormParams>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let started = Instant::now();
    let ctx = RequestContext::new().with_lot_id(&lot_id);
    log_op_start!(
        "print_form",
        request_id = %ctx.request_id,
        lot_id = %lot_id
    );

    let policy = match &params.policy {
        Some(raw) => raw
            .parse::<EmptyValuePolicy>()
            .map_err(ApiError::bad_request)?,
        None => state.composer.policy(),
    };

    match state.composer.compose_with_policy(&lot_id, policy).await {
        Ok(xml) => {
            log_op_end!(
                "print_form",
                duration_ms = started.elapsed().as_millis() as u64,
                request_id = %ctx.request_id,
                lot_id = %lot_id,
                bytes = xml.len()
            );
            Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
        }
        Err(err) => {
            log_op_error!(
                "print_form",
                err,
                duration_ms = started.elapsed().as_millis() as u64,
                request_id = %ctx.request_id,
                lot_id = %lot_id
            );
            Err(err.into())
        }
    }
}
