use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use lotform_core::{Connection, EntitySet, LotformError, Query, Result};

/// In-memory connection returning canned rows per entity set
///
/// Records every query it runs so tests can assert which backend calls a
/// composition issued (and which it skipped).
pub struct RecordingConnection {
    name: String,
    rows: HashMap<EntitySet, Vec<Value>>,
    failures: HashMap<EntitySet, String>,
    calls: Mutex<Vec<Query>>,
}

impl RecordingConnection {
    #[allow(dead_code)]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rows: HashMap::new(),
            failures: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Respond to queries against `entity` with the given rows
    #[allow(dead_code)]
    pub fn with_rows(mut self, entity: EntitySet, rows: Vec<Value>) -> Self {
        self.rows.insert(entity, rows);
        self
    }

    /// Fail queries against `entity` with a backend error
    #[allow(dead_code)]
    pub fn failing_for(mut self, entity: EntitySet, message: &str) -> Self {
        self.failures.insert(entity, message.to_string());
        self
    }

    /// All queries run so far, in order
    #[allow(dead_code)]
    pub fn calls(&self) -> Vec<Query> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of queries run so far
    #[allow(dead_code)]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Connection for RecordingConnection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, query: Query) -> Result<Vec<Value>> {
        self.calls.lock().unwrap().push(query.clone());

        if let Some(message) = self.failures.get(&query.entity) {
            return Err(LotformError::Backend {
                connection: self.name.clone(),
                message: message.clone(),
            });
        }
        Ok(self.rows.get(&query.entity).cloned().unwrap_or_default())
    }
}

/// Wrap a connection for injection
#[allow(dead_code)]
pub fn shared(connection: RecordingConnection) -> Arc<RecordingConnection> {
    Arc::new(connection)
}

// ---------------------------------------------------------------------------
// Row builders
// ---------------------------------------------------------------------------

#[allow(dead_code)]
pub fn lot_row(lot_id: &str, material: &str) -> Value {
    json!({
        "InspectionLot": lot_id,
        "Material": material,
        "Plant": "0001"
    })
}

#[allow(dead_code)]
pub fn operation_row(lot_id: &str, operation_id: &str, text: &str) -> Value {
    json!({
        "InspPlanOperationInternalID": operation_id,
        "InspectionLot": lot_id,
        "OperationText": text
    })
}

#[allow(dead_code)]
pub fn characteristic_row(lot_id: &str, operation_id: &str, text: &str) -> Value {
    json!({
        "InspPlanOperationInternalID": operation_id,
        "InspectionLot": lot_id,
        "InspectionSpecificationText": text
    })
}

#[allow(dead_code)]
pub fn result_row(lot_id: &str, operation_id: &str, valuation: &str) -> Value {
    json!({
        "InspPlanOperationInternalID": operation_id,
        "InspectionLot": lot_id,
        "InspectionResultValuation": valuation
    })
}

#[allow(dead_code)]
pub fn result_value_row(lot_id: &str, operation_id: &str, value: &str) -> Value {
    json!({
        "InspPlanOperationInternalID": operation_id,
        "InspectionLot": lot_id,
        "CharacteristicValue": value
    })
}

#[allow(dead_code)]
pub fn usage_row(lot_id: &str, code: Option<&str>) -> Value {
    json!({
        "InspectionLot": lot_id,
        "InspLotUsgeDcsnSelectedSet": code
    })
}

#[allow(dead_code)]
pub fn usage_row_for_operation(lot_id: &str, operation_id: &str, code: Option<&str>) -> Value {
    json!({
        "InspectionLot": lot_id,
        "InspPlanOperationInternalID": operation_id,
        "InspLotUsgeDcsnSelectedSet": code
    })
}

#[allow(dead_code)]
pub fn code_text_row(code: &str, language: &str, text: &str) -> Value {
    json!({
        "SelectedCodeSet": code,
        "Language": language,
        "SelectedCodeSetText": text
    })
}

#[allow(dead_code)]
pub fn material_description_row(product: &str, language: &str, description: &str) -> Value {
    json!({
        "Product": product,
        "Language": language,
        "ProductDescription": description
    })
}
