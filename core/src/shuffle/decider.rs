//! Per-step shuffle-necessity dispatch.

use crate::config::AnalysisConfig;
use crate::locality::LocalityModel;
use crate::shuffle::property::{
    fetch_needs_shuffle, filter_needs_shuffle, projection_needs_shuffle,
};
use crate::step::{Step, StepKind};
use tracing::debug;

/// Decides, per compiled step, whether an exchange must run before it.
///
/// Pure with respect to its inputs: the same step against the same locality
/// model always yields the same answer, and no kind is an error.
pub struct ShuffleDecider<'a> {
    model: &'a dyn LocalityModel,
    config: AnalysisConfig,
}

impl<'a> ShuffleDecider<'a> {
    pub fn new(model: &'a dyn LocalityModel) -> Self {
        Self::with_config(model, AnalysisConfig::default())
    }

    pub fn with_config(model: &'a dyn LocalityModel, config: AnalysisConfig) -> Self {
        Self { model, config }
    }

    /// Whether the data flowing into `step` must be redistributed first.
    pub fn decide(&self, step: &Step) -> bool {
        let needs_shuffle = match &step.kind {
            // Adjacent edges/vertices cross partition boundaries in general;
            // a per-edge remote lookup would be the more expensive fallback.
            StepKind::EdgeExpansion { .. } => true,
            StepKind::PropertyFilter { properties } => {
                filter_needs_shuffle(properties, self.model)
            }
            StepKind::PropertyProjection { .. } => projection_needs_shuffle(),
            StepKind::PropertyFetch { selection } => fetch_needs_shuffle(selection, self.model),
            // Unclassified kinds are assumed to operate on already-local
            // state unless configured otherwise. A new locality-sensitive
            // step kind lands here until it gets its own variant.
            StepKind::Other { .. } => self.config.shuffle_unclassified_steps,
        };

        if self.config.log_decisions {
            debug!(kind = step.kind_name(), needs_shuffle, "shuffle decision");
        }

        needs_shuffle
    }
}
