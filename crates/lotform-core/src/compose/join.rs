//! Usage-value join strategy
//!
//! Usage values historically attach to operation nodes via the *lot*
//! identifier, so every operation of a lot carries the lot's full
//! usage-value set. Whether that is intended business semantics is an open
//! question; the strategy is therefore a named, swappable choice so the
//! operation-keyed join can be selected without restructuring the composer.

use crate::model::InspectionUsageValue;

/// Which key attaches usage values to an operation node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UsageJoinStrategy {
    /// Match on the lot identifier (historical behavior; the default)
    #[default]
    LotKeyed,
    /// Match on the operation identifier (corrected join)
    OperationKeyed,
}

impl UsageJoinStrategy {
    /// Whether a usage value belongs under the given operation node
    pub fn attaches(
        &self,
        usage: &InspectionUsageValue,
        lot_id: &str,
        operation_id: Option<&str>,
    ) -> bool {
        match self {
            UsageJoinStrategy::LotKeyed => usage.inspection_lot.as_deref() == Some(lot_id),
            UsageJoinStrategy::OperationKeyed => {
                match (usage.operation_id.as_deref(), operation_id) {
                    (Some(usage_key), Some(operation_key)) => usage_key == operation_key,
                    _ => false,
                }
            }
        }
    }

    /// Configuration name of this strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            UsageJoinStrategy::LotKeyed => "lot-keyed",
            UsageJoinStrategy::OperationKeyed => "operation-keyed",
        }
    }
}

impl std::str::FromStr for UsageJoinStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "lot-keyed" => Ok(UsageJoinStrategy::LotKeyed),
            "operation-keyed" => Ok(UsageJoinStrategy::OperationKeyed),
            other => Err(format!("unknown usage join strategy: {}", other)),
        }
    }
}
