//! Trellis Core - shuffle-necessity analysis for distributed graph traversals
//!
//! This is the core module of the Trellis project. It decides, for each step
//! of a compiled traversal pipeline, whether the data flowing into that step
//! must be redistributed across worker partitions before the step can execute
//! with all of its inputs locally available.

pub mod config;
pub mod locality;
pub mod planner;
pub mod shuffle;
pub mod step;

pub use config::AnalysisConfig;
pub use locality::{LocalityModel, PropertyLocality, SchemaLocality};
pub use planner::{ExchangePlanner, StepDecision, TraversalPlan};
pub use shuffle::ShuffleDecider;
pub use step::{ExpansionDirection, PropertySelection, Step, StepKind};
