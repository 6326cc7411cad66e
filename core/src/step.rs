//! Compiled traversal step definitions.
//!
//! A [`Step`] is one operation in a compiled graph-traversal pipeline. Steps
//! are produced by the upstream traversal-plan compiler and are immutable from
//! this crate's point of view; the analysis only reads them.

use serde::{Deserialize, Serialize};

/// Direction of an edge-expansion step relative to the current vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpansionDirection {
    Out,
    In,
    Both,
}

/// Which properties a fetch step reads from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertySelection {
    /// Fetch a single named property of the current entity.
    Named(String),
    /// Fetch the full property map of the current entity. The concrete set of
    /// returned properties is not known until execution.
    All,
}

/// The closed set of traversal-operation kinds this analysis classifies.
///
/// Anything the upstream compiler emits that is not covered by a dedicated
/// variant must be mapped to [`StepKind::Other`]; new locality-sensitive step
/// kinds need an explicit variant and classifier before they are safe to run
/// distributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepKind {
    /// Moves the traversal position from a vertex to adjacent edges/vertices.
    EdgeExpansion { direction: ExpansionDirection },
    /// Tests named properties of the current entity against predicates
    /// without changing the traversal position.
    PropertyFilter { properties: Vec<String> },
    /// Re-emits a property value already bound into the current traversal
    /// record. Never reads storage.
    PropertyProjection { property: String },
    /// Reads one or all properties of the current entity from storage.
    PropertyFetch { selection: PropertySelection },
    /// Any step kind not covered above, identified by its compiler name.
    Other { name: String },
}

/// A node in the compiled traversal pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub kind: StepKind,
}

impl Step {
    pub fn new(kind: StepKind) -> Self {
        Self { kind }
    }

    /// An expansion from the current vertex to adjacent edges/vertices.
    pub fn edge_expansion(direction: ExpansionDirection) -> Self {
        Self::new(StepKind::EdgeExpansion { direction })
    }

    /// A predicate filter over the given property names.
    pub fn property_filter<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(StepKind::PropertyFilter {
            properties: properties.into_iter().map(Into::into).collect(),
        })
    }

    /// A projection of an already-bound property value.
    pub fn property_projection<S: Into<String>>(property: S) -> Self {
        Self::new(StepKind::PropertyProjection {
            property: property.into(),
        })
    }

    /// A storage fetch of one named property.
    pub fn property_fetch<S: Into<String>>(property: S) -> Self {
        Self::new(StepKind::PropertyFetch {
            selection: PropertySelection::Named(property.into()),
        })
    }

    /// A storage fetch of the full property map.
    pub fn property_map_fetch() -> Self {
        Self::new(StepKind::PropertyFetch {
            selection: PropertySelection::All,
        })
    }

    /// A step kind this analysis does not classify.
    pub fn other<S: Into<String>>(name: S) -> Self {
        Self::new(StepKind::Other { name: name.into() })
    }

    /// Compiler-facing name of the step kind, for logging.
    pub fn kind_name(&self) -> &str {
        match &self.kind {
            StepKind::EdgeExpansion { .. } => "EdgeExpansion",
            StepKind::PropertyFilter { .. } => "PropertyFilter",
            StepKind::PropertyProjection { .. } => "PropertyProjection",
            StepKind::PropertyFetch { .. } => "PropertyFetch",
            StepKind::Other { name } => name,
        }
    }
}
