//! Canonical schema constants
//!
//! Backend field keys used in filters and joins, and the canonical keys for
//! structured logging. Keeping them here ensures the gateway, composer and
//! server spell them identically.

// Backend record field keys
pub const FIELD_INSPECTION_LOT: &str = "InspectionLot";
pub const FIELD_MATERIAL: &str = "Material";
pub const FIELD_OPERATION_INTERNAL_ID: &str = "InspPlanOperationInternalID";
pub const FIELD_SELECTED_CODE_SET: &str = "InspLotUsgeDcsnSelectedSet";
pub const FIELD_CODE_SET: &str = "SelectedCodeSet";
pub const FIELD_CODE_SET_TEXT: &str = "SelectedCodeSetText";
pub const FIELD_LANGUAGE: &str = "Language";
pub const FIELD_PRODUCT: &str = "Product";
pub const FIELD_PRODUCT_DESCRIPTION: &str = "ProductDescription";

// Composed document node names
pub const NODE_ROOT: &str = "InspectionLotNode";
pub const NODE_OPERATIONS: &str = "InspectionOperations";
pub const NODE_CHARACTERISTICS: &str = "InspectionCharacteristics";
pub const NODE_RESULTS: &str = "InspectionResults";
pub const NODE_RESULT_VALUES: &str = "InspectionResultValues";
pub const NODE_USAGE_VALUES: &str = "InspectionUsageValues";
pub const NODE_MATERIAL_DESCRIPTION: &str = "MaterialDescription";

// Canonical field keys for structured logging
pub const LOG_COMPONENT: &str = "component";
pub const LOG_OP: &str = "op";
pub const LOG_EVENT: &str = "event";
pub const LOG_DURATION_MS: &str = "duration_ms";
pub const LOG_REQUEST_ID: &str = "request_id";
pub const LOG_LOT_ID: &str = "lot_id";
pub const LOG_CONNECTION: &str = "connection";
pub const LOG_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_keys_are_distinct() {
        // The usage-value join deliberately uses the lot key; the two keys
        // must never be conflated by a rename.
        assert_ne!(FIELD_INSPECTION_LOT, FIELD_OPERATION_INTERNAL_ID);
        assert_ne!(FIELD_SELECTED_CODE_SET, FIELD_CODE_SET);
    }

    #[test]
    fn test_event_names_are_distinct() {
        assert_ne!(EVENT_START, EVENT_END);
        assert_ne!(EVENT_START, EVENT_END_ERROR);
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }
}
