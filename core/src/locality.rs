//! Property-locality model supplied by the storage/schema layer.
//!
//! Whether a property's storage is co-located with its owning entity's
//! primary partition is fixed at schema/storage-layout time; the model is an
//! immutable input for the duration of one query compilation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use trellis_common::{ErrorContext, Result};

/// Locality classification of one property's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyLocality {
    /// Stored alongside the owning entity's primary partition.
    Local,
    /// Stored separately, potentially on a different worker.
    Remote,
}

/// The external property-locality contract this analysis reads.
///
/// Implementations must be immutable for the duration of a compilation and
/// shareable across concurrently compiled plans.
pub trait LocalityModel: Send + Sync {
    /// Locality classification of the named property.
    fn locality(&self, property: &str) -> PropertyLocality;

    /// Every property name in the entity schema, for full-map fetches.
    fn schema_properties(&self) -> Vec<String>;
}

/// A locality model backed by an explicit per-property schema map.
///
/// A property name absent from the map classifies as `Remote`: it cannot be
/// proven co-located, and for property access over-shuffling is the safe
/// direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaLocality {
    properties: BTreeMap<String, PropertyLocality>,
}

impl SchemaLocality {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the locality of one schema property.
    pub fn with_property<S: Into<String>>(mut self, name: S, locality: PropertyLocality) -> Self {
        self.properties.insert(name.into(), locality);
        self
    }

    /// Deserialize a schema-locality map from the storage layer's JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .with_schema_context(|| "failed to parse schema locality map".to_string())
    }
}

impl FromIterator<(String, PropertyLocality)> for SchemaLocality {
    fn from_iter<I: IntoIterator<Item = (String, PropertyLocality)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

impl LocalityModel for SchemaLocality {
    fn locality(&self, property: &str) -> PropertyLocality {
        self.properties
            .get(property)
            .copied()
            .unwrap_or(PropertyLocality::Remote)
    }

    fn schema_properties(&self) -> Vec<String> {
        self.properties.keys().cloned().collect()
    }
}
