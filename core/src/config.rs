//! Configuration for the shuffle-necessity analysis.

use serde::{Deserialize, Serialize};

/// Knobs for the analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Whether steps of unclassified kinds request a shuffle. The default is
    /// `false`: such steps are assumed to operate on already-local state.
    /// Deployments that would rather over-shuffle than risk a new step kind
    /// reading non-local data can flip this without touching the classifiers.
    pub shuffle_unclassified_steps: bool,
    /// Emit a `debug!` event for every per-step decision.
    pub log_decisions: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            shuffle_unclassified_steps: false,
            log_decisions: true,
        }
    }
}
