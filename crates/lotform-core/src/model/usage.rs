//! Usage-decision record
//!
//! A lot's usage values carry the disposition made at the end of
//! inspection. Each references a coded decision value that the composer
//! resolves to display text via the decision-code source.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One usage-decision value of an inspection lot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionUsageValue {
    /// Owning lot identifier, the default join key
    #[serde(
        rename = "InspectionLot",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub inspection_lot: Option<String>,

    /// Referenced decision code; absent when no decision was taken
    #[serde(
        rename = "InspLotUsgeDcsnSelectedSet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_code_set: Option<String>,

    /// Operation key, present on some backends; used only by the
    /// operation-keyed join strategy
    #[serde(
        rename = "InspPlanOperationInternalID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_id: Option<String>,

    /// Remaining backend fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
