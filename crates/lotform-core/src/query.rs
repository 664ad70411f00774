//! Declarative read queries
//!
//! A `Query` names a backend entity set, a conjunction of equality and
//! membership filters, and an optional projection. It is the only shape the
//! service ever sends to a backend: reads only, no writes.

/// A backend entity set addressable by queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntitySet {
    InspectionLot,
    InspectionOperation,
    InspectionCharacteristic,
    InspectionResult,
    InspectionResultValue,
    InspectionUsageValue,
    UsageDecisionSet,
    ProductDescription,
}

/// The seven entity sets exposed for passthrough reads
///
/// `ProductDescription` is deliberately absent: it is only queried
/// internally by the composer's material lookup.
pub const PASSTHROUGH_ENTITY_SETS: [EntitySet; 7] = [
    EntitySet::InspectionLot,
    EntitySet::InspectionOperation,
    EntitySet::InspectionCharacteristic,
    EntitySet::InspectionResult,
    EntitySet::InspectionResultValue,
    EntitySet::InspectionUsageValue,
    EntitySet::UsageDecisionSet,
];

impl EntitySet {
    /// Backend entity-set name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            EntitySet::InspectionLot => "InspectionLot",
            EntitySet::InspectionOperation => "InspectionOperation",
            EntitySet::InspectionCharacteristic => "InspectionCharacteristic",
            EntitySet::InspectionResult => "InspectionResult",
            EntitySet::InspectionResultValue => "InspectionResultValue",
            EntitySet::InspectionUsageValue => "InspectionUsageValue",
            EntitySet::UsageDecisionSet => "UsageDecisionSet",
            EntitySet::ProductDescription => "ProductDescription",
        }
    }

    /// Parse an entity-set name, e.g. from a request path
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "InspectionLot" => Some(EntitySet::InspectionLot),
            "InspectionOperation" => Some(EntitySet::InspectionOperation),
            "InspectionCharacteristic" => Some(EntitySet::InspectionCharacteristic),
            "InspectionResult" => Some(EntitySet::InspectionResult),
            "InspectionResultValue" => Some(EntitySet::InspectionResultValue),
            "InspectionUsageValue" => Some(EntitySet::InspectionUsageValue),
            "UsageDecisionSet" => Some(EntitySet::UsageDecisionSet),
            "ProductDescription" => Some(EntitySet::ProductDescription),
            _ => None,
        }
    }

    /// Whether this entity set is exposed for passthrough reads
    pub fn is_passthrough(&self) -> bool {
        !matches!(self, EntitySet::ProductDescription)
    }
}

impl std::fmt::Display for EntitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single filter predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Field equals value
    Eq { field: String, value: String },
    /// Field is one of the given values
    In {
        field: String,
        values: Vec<String>,
    },
}

/// A declarative read query: entity set, filters, projection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub entity: EntitySet,
    pub filters: Vec<Filter>,
    /// Fields to project; empty means all fields
    pub select: Vec<String>,
}

impl Query {
    /// Start a query against an entity set
    pub fn from(entity: EntitySet) -> Self {
        Self {
            entity,
            filters: Vec::new(),
            select: Vec::new(),
        }
    }

    /// Add an equality filter
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter::Eq {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Add a membership filter
    pub fn filter_in(mut self, field: impl Into<String>, values: Vec<String>) -> Self {
        self.filters.push(Filter::In {
            field: field.into(),
            values,
        });
        self
    }

    /// Set the projection
    pub fn project<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = fields.into_iter().map(Into::into).collect();
        self
    }
}
