//! Inspection-lot record
//!
//! The root record of a composed document. Only the identifier and the
//! material reference are typed; every other backend field passes through
//! the flattened map untouched, so the composed document stays complete
//! when the backend schema grows fields this crate has never heard of.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One inspection lot, keyed by its lot identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionLot {
    /// Lot identifier
    #[serde(rename = "InspectionLot")]
    pub inspection_lot: String,

    /// Material identifier, used for the description lookup
    #[serde(rename = "Material", default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,

    /// Remaining backend fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
