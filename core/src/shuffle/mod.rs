//! Core components of the shuffle-necessity analysis.

pub mod decider;
pub mod property;

pub use decider::*;
pub use property::*;
