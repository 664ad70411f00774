//! The Document Composer
//!
//! Fetches six related record sets for one inspection lot (plus two
//! auxiliary text lookups), joins them in memory into a single nested tree
//! and renders the tree as XML. The tree is rebuilt fully on every call;
//! the composer holds no state beyond its injected connections and
//! configuration.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use lotform_core_types::{schema, LanguageTag};

use crate::compose::join::UsageJoinStrategy;
use crate::compose::normalize::EmptyValuePolicy;
use crate::connection::Connection;
use crate::errors::{LotformError, Result};
use crate::model::{
    DecisionCodeText, InspectionCharacteristic, InspectionLot, InspectionOperation,
    InspectionResult, InspectionResultValue, InspectionUsageValue, MaterialDescription,
};
use crate::query::{EntitySet, Query};
use crate::render;

/// Composes the print-form document for a single inspection lot
pub struct DocumentComposer {
    inspection: Arc<dyn Connection>,
    decision_codes: Arc<dyn Connection>,
    /// Material-description source; when unset no description is resolved
    materials: Option<Arc<dyn Connection>>,
    join_strategy: UsageJoinStrategy,
    policy: EmptyValuePolicy,
    language: LanguageTag,
}

impl DocumentComposer {
    /// Create a composer over the inspection and decision-code sources
    pub fn new(inspection: Arc<dyn Connection>, decision_codes: Arc<dyn Connection>) -> Self {
        Self {
            inspection,
            decision_codes,
            materials: None,
            join_strategy: UsageJoinStrategy::default(),
            policy: EmptyValuePolicy::default(),
            language: LanguageTag::default(),
        }
    }

    /// Enable the material-description lookup via the given source
    pub fn with_materials(mut self, materials: Arc<dyn Connection>) -> Self {
        self.materials = Some(materials);
        self
    }

    /// Set the default empty-value policy
    pub fn with_policy(mut self, policy: EmptyValuePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the usage-value join strategy
    pub fn with_join_strategy(mut self, join_strategy: UsageJoinStrategy) -> Self {
        self.join_strategy = join_strategy;
        self
    }

    /// Set the language tag for text lookups
    pub fn with_language(mut self, language: LanguageTag) -> Self {
        self.language = language;
        self
    }

    /// The composer's default empty-value policy
    pub fn policy(&self) -> EmptyValuePolicy {
        self.policy
    }

    /// Compose the document under the default policy
    ///
    /// # Errors
    ///
    /// `LotNotFound` when the lot identifier matches no record; `Backend`,
    /// `Serialization` or `Render` for any downstream failure.
    pub async fn compose(&self, lot_id: &str) -> Result<String> {
        self.compose_with_policy(lot_id, self.policy).await
    }

    /// Compose the document under an explicit empty-value policy
    ///
    /// # Errors
    ///
    /// See [`DocumentComposer::compose`].
    pub async fn compose_with_policy(
        &self,
        lot_id: &str,
        policy: EmptyValuePolicy,
    ) -> Result<String> {
        let started = Instant::now();
        crate::log_op_start!("compose_document", lot_id, policy = policy.as_str());

        match self.compose_inner(lot_id, policy).await {
            Ok(xml) => {
                crate::log_op_end!(
                    "compose_document",
                    duration_ms = started.elapsed().as_millis() as u64,
                    lot_id,
                    bytes = xml.len()
                );
                Ok(xml)
            }
            Err(err) => {
                crate::log_op_error!(
                    "compose_document",
                    err,
                    duration_ms = started.elapsed().as_millis() as u64,
                    lot_id
                );
                Err(err)
            }
        }
    }

    async fn compose_inner(&self, lot_id: &str, policy: EmptyValuePolicy) -> Result<String> {
        // The lot fetch gates everything else: a missing lot short-circuits
        // before any child fetch is issued.
        let lot = self.fetch_lot(lot_id).await?;

        let (operations, characteristics, results, result_values, usage_values) = tokio::try_join!(
            self.fetch_for_lot::<InspectionOperation>(EntitySet::InspectionOperation, lot_id),
            self.fetch_for_lot::<InspectionCharacteristic>(
                EntitySet::InspectionCharacteristic,
                lot_id
            ),
            self.fetch_for_lot::<InspectionResult>(EntitySet::InspectionResult, lot_id),
            self.fetch_for_lot::<InspectionResultValue>(EntitySet::InspectionResultValue, lot_id),
            self.fetch_for_lot::<InspectionUsageValue>(EntitySet::InspectionUsageValue, lot_id),
        )?;

        debug!(
            lot_id,
            operations = operations.len(),
            characteristics = characteristics.len(),
            results = results.len(),
            result_values = result_values.len(),
            usage_values = usage_values.len(),
            "fetched child record sets"
        );

        let code_texts = self.resolve_code_texts(&usage_values).await?;
        let material_description = self.resolve_material_description(&lot).await?;

        let tree = self.assemble(
            &lot,
            material_description,
            &operations,
            &characteristics,
            &results,
            &result_values,
            &usage_values,
            &code_texts,
        )?;

        render::render_document(&policy.apply(tree))
    }

    /// Fetch the lot record, failing with `LotNotFound` on an empty result
    async fn fetch_lot(&self, lot_id: &str) -> Result<InspectionLot> {
        let query = Query::from(EntitySet::InspectionLot)
            .filter_eq(schema::FIELD_INSPECTION_LOT, lot_id);
        let mut rows = self.inspection.run(query).await?;

        if rows.is_empty() {
            return Err(LotformError::LotNotFound {
                lot_id: lot_id.to_string(),
            });
        }
        let lot: InspectionLot = serde_json::from_value(rows.swap_remove(0))?;
        Ok(lot)
    }

    /// Fetch one child record set filtered by the lot identifier
    async fn fetch_for_lot<T: DeserializeOwned>(
        &self,
        entity: EntitySet,
        lot_id: &str,
    ) -> Result<Vec<T>> {
        let query = Query::from(entity).filter_eq(schema::FIELD_INSPECTION_LOT, lot_id);
        let rows = self.inspection.run(query).await?;
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(Into::into))
            .collect()
    }

    /// Resolve display texts for the decision codes the usage values reference
    ///
    /// Null and empty references are ignored; when nothing remains, no
    /// lookup query is issued at all.
    async fn resolve_code_texts(
        &self,
        usage_values: &[InspectionUsageValue],
    ) -> Result<HashMap<String, String>> {
        let codes: BTreeSet<String> = usage_values
            .iter()
            .filter_map(|usage| usage.selected_code_set.as_deref())
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect();

        if codes.is_empty() {
            return Ok(HashMap::new());
        }

        let query = Query::from(EntitySet::UsageDecisionSet)
            .filter_in(schema::FIELD_CODE_SET, codes.into_iter().collect())
            .filter_eq(schema::FIELD_LANGUAGE, self.language.as_str());
        let rows = self.decision_codes.run(query).await?;

        let mut texts = HashMap::new();
        for row in rows {
            let record: DecisionCodeText = serde_json::from_value(row)?;
            if let (Some(code), Some(text)) = (record.selected_code_set, record.text) {
                // First match wins, as in the backend's own ordering
                texts.entry(code).or_insert(text);
            }
        }
        Ok(texts)
    }

    /// Resolve the lot's material description, when the source is configured
    ///
    /// Returns `None` when the variant is inactive, `Some("")` when the lot
    /// references no material or the lookup has no match.
    async fn resolve_material_description(&self, lot: &InspectionLot) -> Result<Option<String>> {
        let Some(materials) = &self.materials else {
            return Ok(None);
        };

        let references: BTreeSet<String> = lot
            .material
            .iter()
            .filter(|material| !material.is_empty())
            .cloned()
            .collect();
        if references.is_empty() {
            return Ok(Some(String::new()));
        }

        let query = Query::from(EntitySet::ProductDescription)
            .filter_in(
                schema::FIELD_PRODUCT,
                references.iter().cloned().collect(),
            )
            .filter_eq(schema::FIELD_LANGUAGE, self.language.as_str());
        let rows = materials.run(query).await?;

        for row in rows {
            let record: MaterialDescription = serde_json::from_value(row)?;
            if record.product.as_deref() == lot.material.as_deref() {
                return Ok(Some(record.description.unwrap_or_default()));
            }
        }
        Ok(Some(String::new()))
    }

    /// Join the fetched record sets into the nested document tree
    #[allow(clippy::too_many_arguments)]
    fn assemble(
        &self,
        lot: &InspectionLot,
        material_description: Option<String>,
        operations: &[InspectionOperation],
        characteristics: &[InspectionCharacteristic],
        results: &[InspectionResult],
        result_values: &[InspectionResultValue],
        usage_values: &[InspectionUsageValue],
        code_texts: &HashMap<String, String>,
    ) -> Result<Value> {
        let mut root = into_object(serde_json::to_value(lot)?)?;

        if let Some(description) = material_description {
            root.insert(
                schema::NODE_MATERIAL_DESCRIPTION.to_string(),
                Value::String(description),
            );
        }

        let operation_nodes = operations
            .iter()
            .map(|operation| {
                self.operation_node(
                    lot,
                    operation,
                    characteristics,
                    results,
                    result_values,
                    usage_values,
                    code_texts,
                )
            })
            .collect::<Result<Vec<Value>>>()?;
        root.insert(
            schema::NODE_OPERATIONS.to_string(),
            Value::Array(operation_nodes),
        );

        let mut document = Map::new();
        document.insert(schema::NODE_ROOT.to_string(), Value::Object(root));
        Ok(Value::Object(document))
    }

    /// Build one operation node with its attached children
    #[allow(clippy::too_many_arguments)]
    fn operation_node(
        &self,
        lot: &InspectionLot,
        operation: &InspectionOperation,
        characteristics: &[InspectionCharacteristic],
        results: &[InspectionResult],
        result_values: &[InspectionResultValue],
        usage_values: &[InspectionUsageValue],
        code_texts: &HashMap<String, String>,
    ) -> Result<Value> {
        let operation_key = operation.operation_id.as_deref();
        let mut node = into_object(serde_json::to_value(operation)?)?;

        node.insert(
            schema::NODE_CHARACTERISTICS.to_string(),
            children_for(characteristics, operation_key, |characteristic| {
                characteristic.operation_id.as_deref()
            })?,
        );
        node.insert(
            schema::NODE_RESULTS.to_string(),
            children_for(results, operation_key, |result| {
                result.operation_id.as_deref()
            })?,
        );
        node.insert(
            schema::NODE_RESULT_VALUES.to_string(),
            children_for(result_values, operation_key, |value| {
                value.operation_id.as_deref()
            })?,
        );

        let usage_nodes = usage_values
            .iter()
            .filter(|usage| {
                self.join_strategy
                    .attaches(usage, &lot.inspection_lot, operation_key)
            })
            .map(|usage| self.usage_node(usage, code_texts))
            .collect::<Result<Vec<Value>>>()?;
        node.insert(
            schema::NODE_USAGE_VALUES.to_string(),
            Value::Array(usage_nodes),
        );

        Ok(Value::Object(node))
    }

    /// Build one usage-value node annotated with its resolved decision text
    fn usage_node(
        &self,
        usage: &InspectionUsageValue,
        code_texts: &HashMap<String, String>,
    ) -> Result<Value> {
        let mut node = into_object(serde_json::to_value(usage)?)?;
        let text = usage
            .selected_code_set
            .as_deref()
            .and_then(|code| code_texts.get(code))
            .cloned()
            .unwrap_or_default();
        node.insert(schema::FIELD_CODE_SET_TEXT.to_string(), Value::String(text));
        Ok(Value::Object(node))
    }
}

/// Serialize the records whose operation key matches into a node array
fn children_for<T, F>(records: &[T], operation_key: Option<&str>, key_of: F) -> Result<Value>
where
    T: serde::Serialize,
    F: Fn(&T) -> Option<&str>,
{
    let nodes = records
        .iter()
        .filter(|record| keys_match(key_of(record), operation_key))
        .map(|record| serde_json::to_value(record).map_err(Into::into))
        .collect::<Result<Vec<Value>>>()?;
    Ok(Value::Array(nodes))
}

/// Two join keys match only when both sides are present and equal
fn keys_match(child_key: Option<&str>, parent_key: Option<&str>) -> bool {
    match (child_key, parent_key) {
        (Some(child), Some(parent)) => child == parent,
        _ => false,
    }
}

/// Unwrap a serialized record into its mapping
fn into_object(value: Value) -> Result<Map<String, Value>> {
    match value {
        Value::Object(entries) => Ok(entries),
        other => Err(LotformError::Render {
            message: format!("record serialized to a non-mapping value: {}", other),
        }),
    }
}
