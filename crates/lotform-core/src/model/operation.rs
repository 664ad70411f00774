//! Inspection-operation record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One operation of an inspection lot
///
/// Characteristics, results and result values join to an operation via
/// `InspPlanOperationInternalID`. The key is optional on the wire; an
/// operation without it simply attaches no children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionOperation {
    /// Operation identifier, join key for the per-operation children
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
