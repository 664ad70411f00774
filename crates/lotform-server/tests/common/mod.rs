use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value};

use lotform_core::{
    Connection, DocumentComposer, EntitySet, LotformError, Query, QueryForwarder, Result,
};
use lotform_server::{routes, AppState};

/// Canned backend connection for router tests
pub struct StubConnection {
    name: String,
    rows: HashMap<EntitySet, Vec<Value>>,
    failure: Option<String>,
}

impl StubConnection {
    #[allow(dead_code)]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: HashMap::new(),
            failure: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_rows(mut self, entity: EntitySet, rows: Vec<Value>) -> Self {
        self.rows.insert(entity, rows);
        self
    }

    /// Fail every query with a backend error
    #[allow(dead_code)]
    pub fn failing(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

#[async_trait]
impl Connection for StubConnection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, query: Query) -> Result<Vec<Value>> {
        if let Some(message) = &self.failure {
            return Err(LotformError::Backend {
                connection: self.name.clone(),
                message: message.clone(),
            });
        }
        Ok(self.rows.get(&query.entity).cloned().unwrap_or_default())
    }
}

/// Build a router over stub backends
#[allow(dead_code)]
pub fn test_app(inspection: StubConnection, codes: StubConnection) -> Router {
    let inspection: Arc<dyn Connection> = Arc::new(inspection);
    let codes: Arc<dyn Connection> = Arc::new(codes);
    let forwarder = QueryForwarder::new(inspection.clone(), codes.clone());
    let composer = DocumentComposer::new(inspection, codes);
    routes::router(AppState::new(forwarder, composer))
}

#[allow(dead_code)]
pub fn lot_row(lot_id: &str) -> Value {
    json!({
        "InspectionLot": lot_id,
        "Material": "PUMP-100",
        "Plant": "0001"
    })
}

#[allow(dead_code)]
pub fn operation_row(lot_id: &str, operation_id: &str) -> Value {
    json!({
        "InspPlanOperationInternalID": operation_id,
        "InspectionLot": lot_id,
        "OperationText": "Visual check"
    })
}
