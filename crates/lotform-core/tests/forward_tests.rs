mod common;

use common::{shared, RecordingConnection};
use lotform_core::query::PASSTHROUGH_ENTITY_SETS;
use lotform_core::{EntitySet, LotformError, Query, QueryForwarder};
use serde_json::json;

#[tokio::test]
async fn test_passthrough_returns_backend_rows_unchanged() {
    // One representative row per passthrough entity set, with a marker
    // field the forwarder could not invent.
    let mut inspection = RecordingConnection::new("inspection");
    let mut codes = RecordingConnection::new("codes");
    for (index, entity) in PASSTHROUGH_ENTITY_SETS.into_iter().enumerate() {
        let rows = vec![json!({"Entity": entity.as_str(), "Marker": index})];
        if entity == EntitySet::UsageDecisionSet {
            codes = codes.with_rows(entity, rows);
        } else {
            inspection = inspection.with_rows(entity, rows);
        }
    }
    let forwarder = QueryForwarder::new(shared(inspection), shared(codes));

    for (index, entity) in PASSTHROUGH_ENTITY_SETS.into_iter().enumerate() {
        let rows = forwarder.forward(Query::from(entity)).await.unwrap();
        assert_eq!(
            rows,
            vec![json!({"Entity": entity.as_str(), "Marker": index})],
            "rows for {} were altered",
            entity
        );
    }
}

#[tokio::test]
async fn test_usage_decision_set_routes_to_the_decision_code_source() {
    let inspection = shared(RecordingConnection::new("inspection"));
    let codes = shared(RecordingConnection::new("codes"));
    let forwarder = QueryForwarder::new(inspection.clone(), codes.clone());

    forwarder
        .forward(Query::from(EntitySet::UsageDecisionSet))
        .await
        .unwrap();

    assert_eq!(inspection.call_count(), 0);
    assert_eq!(codes.call_count(), 1);
}

#[tokio::test]
async fn test_filters_reach_the_backend_untouched() {
    let inspection = shared(RecordingConnection::new("inspection"));
    let codes = shared(RecordingConnection::new("codes"));
    let forwarder = QueryForwarder::new(inspection.clone(), codes);

    let query = Query::from(EntitySet::InspectionLot)
        .filter_eq("InspectionLot", "4711")
        .project(["InspectionLot", "Material"]);
    forwarder.forward(query.clone()).await.unwrap();

    assert_eq!(inspection.calls(), vec![query]);
}

#[tokio::test]
async fn test_non_passthrough_entity_is_rejected() {
    let inspection = shared(RecordingConnection::new("inspection"));
    let codes = shared(RecordingConnection::new("codes"));
    let forwarder = QueryForwarder::new(inspection.clone(), codes.clone());

    let err = forwarder
        .forward(Query::from(EntitySet::ProductDescription))
        .await
        .unwrap_err();

    assert_eq!(err.code(), "ERR_INVALID_QUERY");
    assert_eq!(inspection.call_count(), 0);
    assert_eq!(codes.call_count(), 0);
}

#[tokio::test]
async fn test_backend_error_propagates_as_is() {
    let inspection = shared(
        RecordingConnection::new("inspection")
            .failing_for(EntitySet::InspectionResult, "gateway timeout"),
    );
    let codes = shared(RecordingConnection::new("codes"));
    let forwarder = QueryForwarder::new(inspection, codes);

    let err = forwarder
        .forward(Query::from(EntitySet::InspectionResult))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        LotformError::Backend {
            connection: "inspection".into(),
            message: "gateway timeout".into()
        }
    );
}
