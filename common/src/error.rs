//! Error handling for the trellis-common crate.

use thiserror::Error;

/// Common error type that abstracts over underlying library errors.
///
/// This enum provides structured error types with support for error chaining
/// via an optional `anyhow` source.
#[derive(Error, Debug)]
pub enum CommonError {
    #[error("Schema error: {message}")]
    SchemaError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Invalid plan: {message}")]
    PlanError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Invalid configuration: {message}")]
    ConfigurationError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Serialization failed: {message}")]
    SerializationError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Result type alias for common operations.
pub type Result<T> = std::result::Result<T, CommonError>;

impl CommonError {
    /// Create a schema error with a custom message.
    pub fn schema_error<S: Into<String>>(message: S) -> Self {
        Self::SchemaError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a schema error with a custom message and source error.
    pub fn schema_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::SchemaError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a plan error with a custom message.
    pub fn plan_error<S: Into<String>>(message: S) -> Self {
        Self::PlanError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a plan error with a custom message and source error.
    pub fn plan_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::PlanError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a configuration error with a custom message.
    pub fn configuration_error<S: Into<String>>(message: S) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with a custom message and source error.
    pub fn configuration_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::ConfigurationError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create a serialization error with a custom message.
    pub fn serialization_error<S: Into<String>>(message: S) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error with a custom message and source error.
    pub fn serialization_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::SerializationError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Create an internal error with a custom message.
    pub fn internal_error<S: Into<String>>(message: S) -> Self {
        Self::InternalError {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error with a custom message and source error.
    pub fn internal_error_with_source<S: Into<String>, E: Into<anyhow::Error>>(
        message: S,
        source: E,
    ) -> Self {
        Self::InternalError {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Context helpers for adding rich context to errors.
pub mod context {
    use super::*;

    /// Extension trait for adding context to Results.
    pub trait ErrorContext<T> {
        /// Add schema context to an error.
        fn with_schema_context<F>(self, f: F) -> Result<T>
        where
            F: FnOnce() -> String;

        /// Add plan context to an error.
        fn with_plan_context<F>(self, f: F) -> Result<T>
        where
            F: FnOnce() -> String;
    }

    impl<T, E> ErrorContext<T> for std::result::Result<T, E>
    where
        E: Into<anyhow::Error>,
    {
        fn with_schema_context<F>(self, f: F) -> Result<T>
        where
            F: FnOnce() -> String,
        {
            self.map_err(|e| CommonError::schema_error_with_source(f(), e.into()))
        }

        fn with_plan_context<F>(self, f: F) -> Result<T>
        where
            F: FnOnce() -> String,
        {
            self.map_err(|e| CommonError::plan_error_with_source(f(), e.into()))
        }
    }
}

pub use context::ErrorContext;
