//! Locality classifiers for property-accessing steps.
//!
//! One pure function per property-accessing step kind, all reading the same
//! [`LocalityModel`]. None of them need identity or lifecycle beyond the
//! single call.

use crate::locality::{LocalityModel, PropertyLocality};
use crate::step::PropertySelection;
use tracing::trace;

/// Whether a filter over `properties` needs its input shuffled in first.
///
/// A filter must have every value it tests available on the worker executing
/// it, so one remote property is enough. A filter that references no
/// properties needs nothing.
pub fn filter_needs_shuffle(properties: &[String], model: &dyn LocalityModel) -> bool {
    properties.iter().any(|property| {
        let locality = model.locality(property);
        trace!(property = %property, ?locality, "filter property lookup");
        locality == PropertyLocality::Remote
    })
}

/// Whether a projection of an already-bound value needs a shuffle.
///
/// Never: the value was bound into the traversal record by an earlier fetch,
/// and whatever locality requirement existed was resolved there.
pub fn projection_needs_shuffle() -> bool {
    false
}

/// Whether a storage fetch needs its input shuffled in first.
///
/// A single named property needs a shuffle iff that property is remote. A
/// full-map fetch is checked against the worst case across the whole schema,
/// since the set of returned properties is unknown until execution.
pub fn fetch_needs_shuffle(selection: &PropertySelection, model: &dyn LocalityModel) -> bool {
    match selection {
        PropertySelection::Named(property) => {
            let locality = model.locality(property);
            trace!(property = %property, ?locality, "fetch property lookup");
            locality == PropertyLocality::Remote
        }
        PropertySelection::All => model
            .schema_properties()
            .iter()
            .any(|property| model.locality(property) == PropertyLocality::Remote),
    }
}
