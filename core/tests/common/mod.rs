//! Shared helpers for integration tests.

use trellis_core::{PropertyLocality, SchemaLocality};

/// Schema from the reference scenario: `name` co-located, `email` remote.
pub fn user_schema() -> SchemaLocality {
    SchemaLocality::new()
        .with_property("name", PropertyLocality::Local)
        .with_property("email", PropertyLocality::Remote)
}

/// A schema whose every property is co-located.
pub fn local_only_schema() -> SchemaLocality {
    SchemaLocality::new()
        .with_property("name", PropertyLocality::Local)
        .with_property("age", PropertyLocality::Local)
}
