//! Empty-value normalization
//!
//! Two mutually exclusive policies decide what a composed tree looks like
//! where data is absent. They produce materially different documents from
//! the same record sets, so the choice is an explicit, configurable enum
//! rather than two code paths.

use serde_json::{Map, Value};

/// How absent and empty values are represented in the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyValuePolicy {
    /// Empty arrays become empty mappings, which render as empty elements;
    /// everything else passes through unchanged, recursively.
    #[default]
    PreserveEmpty,
    /// Null entries, empty-mapping array elements and empty arrays are
    /// removed recursively, producing a minimal document.
    PruneEmpty,
}

impl EmptyValuePolicy {
    /// Normalize a composed tree under this policy
    pub fn apply(&self, tree: Value) -> Value {
        match self {
            EmptyValuePolicy::PreserveEmpty => preserve_empty(tree),
            EmptyValuePolicy::PruneEmpty => {
                prune_empty(tree).unwrap_or_else(|| Value::Object(Map::new()))
            }
        }
    }

    /// Configuration name of this policy
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyValuePolicy::PreserveEmpty => "preserve-empty",
            EmptyValuePolicy::PruneEmpty => "prune-empty",
        }
    }
}

impl std::str::FromStr for EmptyValuePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "preserve-empty" => Ok(EmptyValuePolicy::PreserveEmpty),
            "prune-empty" => Ok(EmptyValuePolicy::PruneEmpty),
            other => Err(format!("unknown empty-value policy: {}", other)),
        }
    }
}

/// Replace empty arrays with empty mappings, recursively
fn preserve_empty(value: Value) -> Value {
    match value {
        Value::Array(items) if items.is_empty() => Value::Object(Map::new()),
        Value::Array(items) => Value::Array(items.into_iter().map(preserve_empty).collect()),
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, child)| (key, preserve_empty(child)))
                .collect(),
        ),
        other => other,
    }
}

/// Drop null entries, empty-mapping array elements and empty arrays,
/// recursively. Returns `None` when the value prunes away entirely.
fn prune_empty(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Array(items) => {
            let kept: Vec<Value> = items
                .into_iter()
                .filter_map(prune_empty)
                .filter(|item| !matches!(item, Value::Object(entries) if entries.is_empty()))
                .collect();
            if kept.is_empty() {
                None
            } else {
                Some(Value::Array(kept))
            }
        }
        Value::Object(entries) => {
            let kept: Map<String, Value> = entries
                .into_iter()
                .filter_map(|(key, child)| prune_empty(child).map(|child| (key, child)))
                .collect();
            Some(Value::Object(kept))
        }
        other => Some(other),
    }
}
