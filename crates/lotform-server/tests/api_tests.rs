mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{lot_row, operation_row, test_app, StubConnection};
use http_body_util::BodyExt;
use lotform_core::logging_facility::init_test_capture;
use lotform_core::EntitySet;
use lotform_core_types::schema;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health_is_ok() {
    let app = test_app(StubConnection::new("inspection"), StubConnection::new("codes"));

    let (status, body) = get(app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_passthrough_returns_backend_rows_unchanged() {
    let rows = vec![json!({"InspectionLot": "4711", "Plant": "0001"})];
    let app = test_app(
        StubConnection::new("inspection").with_rows(EntitySet::InspectionLot, rows.clone()),
        StubConnection::new("codes"),
    );

    let (status, body) = get(app, "/api/records/InspectionLot?InspectionLot=4711").await;

    assert_eq!(status, StatusCode::OK);
    let payload: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload, Value::Array(rows));
}

#[tokio::test]
async fn test_unknown_entity_set_is_404() {
    let app = test_app(StubConnection::new("inspection"), StubConnection::new("codes"));

    let (status, _) = get(app, "/api/records/NoSuchSet").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_product_description_is_not_exposed() {
    let app = test_app(StubConnection::new("inspection"), StubConnection::new("codes"));

    let (status, _) = get(app, "/api/records/ProductDescription").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_print_form_returns_xml() {
    let app = test_app(
        StubConnection::new("inspection")
            .with_rows(EntitySet::InspectionLot, vec![lot_row("4711")])
            .with_rows(
                EntitySet::InspectionOperation,
                vec![operation_row("4711", "10")],
            ),
        StubConnection::new("codes"),
    );

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/inspection-lots/4711/print-form")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap(),
        "application/xml"
    );
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let xml = String::from_utf8(body.to_vec()).unwrap();
    assert!(xml.contains("<InspectionLotNode>"));
    assert!(xml.contains("<InspectionOperations>"));
}

#[tokio::test]
async fn test_print_form_missing_lot_is_404() {
    let app = test_app(StubConnection::new("inspection"), StubConnection::new("codes"));

    let (status, body) = get(app, "/api/inspection-lots/9999/print-form").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let message = String::from_utf8(body).unwrap();
    assert!(message.contains("9999"));
}

#[tokio::test]
async fn test_print_form_backend_failure_is_500() {
    let app = test_app(
        StubConnection::new("inspection").failing("503 Service Unavailable"),
        StubConnection::new("codes"),
    );

    let (status, body) = get(app, "/api/inspection-lots/4711/print-form").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let message = String::from_utf8(body).unwrap();
    assert!(message.contains("503"));
}

#[tokio::test]
async fn test_print_form_policy_override() {
    let inspection = || {
        StubConnection::new("inspection").with_rows(EntitySet::InspectionLot, vec![lot_row("4711")])
    };

    // Default policy preserves the empty operations element
    let app = test_app(inspection(), StubConnection::new("codes"));
    let (_, body) = get(app, "/api/inspection-lots/4711/print-form").await;
    assert!(String::from_utf8(body)
        .unwrap()
        .contains("<InspectionOperations/>"));

    // The prune override drops it entirely
    let app = test_app(inspection(), StubConnection::new("codes"));
    let (_, body) = get(
        app,
        "/api/inspection-lots/4711/print-form?policy=prune-empty",
    )
    .await;
    assert!(!String::from_utf8(body).unwrap().contains("InspectionOperations"));
}

#[tokio::test]
async fn test_print_form_logs_carry_request_id_and_lot_id() {
    let capture = init_test_capture();
    let app = test_app(StubConnection::new("inspection"), StubConnection::new("codes"));

    // A lot id unique to this test keeps the shared capture unambiguous
    let (status, _) = get(app, "/api/inspection-lots/314159/print-form").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let events: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| {
            e.op.as_deref() == Some("print_form")
                && e.fields.get(schema::LOG_LOT_ID).map(String::as_str) == Some("314159")
        })
        .collect();

    assert!(events
        .iter()
        .any(|e| e.event.as_deref() == Some(schema::EVENT_START)));
    let error_event = events
        .iter()
        .find(|e| e.event.as_deref() == Some(schema::EVENT_END_ERROR))
        .expect("print_form end_error event");
    assert!(error_event.fields.contains_key(schema::LOG_REQUEST_ID));
    assert_eq!(
        error_event.fields.get(schema::LOG_ERR_CODE).map(String::as_str),
        Some("ERR_LOT_NOT_FOUND")
    );
}

#[tokio::test]
async fn test_print_form_rejects_unknown_policy() {
    let app = test_app(StubConnection::new("inspection"), StubConnection::new("codes"));

    let (status, _) = get(app, "/api/inspection-lots/4711/print-form?policy=minimal").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
