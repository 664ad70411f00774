//! Secondary lookup records
//!
//! Display texts for decision codes and materials live in separate backend
//! sources and are fetched per composed document, filtered by the
//! referenced key set and the fixed language tag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Display text for one decision code in one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionCodeText {
    /// Coded decision value
    #[serde(
        rename = "SelectedCodeSet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub selected_code_set: Option<String>,

    /// Language key of this text row
    #[serde(rename = "Language", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Human-readable decision text
    #[serde(
        rename = "SelectedCodeSetText",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,

    /// Remaining backend fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Display text for one material in one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDescription {
    /// Material identifier
    #[serde(rename = "Product", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    /// Language key of this text row
    #[serde(rename = "Language", default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Human-readable material description
    #[serde(
        rename = "ProductDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Remaining backend fields, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
