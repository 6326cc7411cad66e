//! Common utilities and abstractions for the Trellis project.
//!
//! This module provides the shared error type used across the
//! traversal-compiler crates.

pub mod error;

pub use error::{CommonError, ErrorContext, Result};
