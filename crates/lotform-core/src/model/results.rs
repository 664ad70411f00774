//! Per-operation child records: characteristics, results, result values
//!
//! All three share the same join shape: an optional
//! `InspPlanOperationInternalID` foreign key matching them to one operation
//! of the fetched lot. Records whose key matches no fetched operation are
//! silently dropped during composition (join semantics, not an error).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An inspection characteristic of one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionCharacteristic {
    /// Operation foreign key
    #[serde(
        rename = "InspPlanOperationInternalID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,

    /// Owning lot identifier
    #[serde(
        rename = "InspectionLot",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inspection_lot: Option<String>,

    /// Remaining backend fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A recorded inspection result of one operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionResult {
    /// Operation foreign key
    #[serde(
        rename = "InspPlanOperationInternalID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,

    /// Owning lot identifier
    #[serde(
        rename = "InspectionLot",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inspection_lot: Option<String>,

    /// Remaining backend fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A single measured value belonging to one operation's results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionResultValue {
    /// Operation foreign key
    #[serde(
        rename = "InspPlanOperationInternalID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,

    /// Owning lot identifier
    #[serde(
        rename = "InspectionLot",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inspection_lot: Option<String>,

    /// Remaining backend fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_characteristic_round_trip() {
        let row = json!({
            "InspPlanOperationInternalID": "10",
            "InspectionLot": "4711",
            "InspectionSpecificationText": "Diameter 12mm +/- 0.1"
        });
        let characteristic: InspectionCharacteristic =
            serde_json::from_value(row.clone()).unwrap();
        assert_eq!(characteristic.operation_id.as_deref(), Some("10"));
        assert_eq!(serde_json::to_value(&characteristic).unwrap(), row);
    }

    #[test]
    fn test_result_value_without_operation_key() {
        // A row with no FK deserializes fine; it just won't join anywhere.
        let value: InspectionResultValue = serde_json::from_value(json!({
            "InspectionLot": "4711",
            "CharacteristicValue": "12.02"
        }))
        .unwrap();
        assert!(value.operation_id.is_none());
    }
}
