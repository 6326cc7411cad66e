//! Applies the shuffle-necessity analysis across a whole compiled pipeline.
//!
//! The downstream physical-plan generator consumes one [`StepDecision`] per
//! step and inserts an exchange operator immediately before each step whose
//! decision is `true`. The exchange operator itself lives outside this crate.

use crate::config::AnalysisConfig;
use crate::locality::LocalityModel;
use crate::shuffle::ShuffleDecider;
use crate::step::{PropertySelection, Step, StepKind};
use serde::{Deserialize, Serialize};
use tracing::info;
use trellis_common::{CommonError, ErrorContext, Result};
use uuid::Uuid;

/// A compiled traversal pipeline, as handed over by the upstream compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalPlan {
    /// Identifier for log correlation across compiler passes.
    pub id: Uuid,
    pub steps: Vec<Step>,
}

impl TraversalPlan {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            id: Uuid::new_v4(),
            steps,
        }
    }

    /// Deserialize a plan from the upstream compiler's JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .with_plan_context(|| "failed to parse compiled traversal plan".to_string())
    }
}

/// The analysis verdict for one step of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDecision {
    /// Index of the step within the plan's pipeline.
    pub step_index: usize,
    /// Whether an exchange must be inserted immediately before this step.
    pub needs_shuffle: bool,
}

/// Runs the [`ShuffleDecider`] over every step of a plan.
#[derive(Debug, Clone, Default)]
pub struct ExchangePlanner {
    config: AnalysisConfig,
}

impl ExchangePlanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Decide shuffle necessity for every step of `plan`, in pipeline order.
    ///
    /// Classification itself is total; the error case is a malformed step
    /// payload from the upstream compiler, such as an empty property name.
    pub fn plan(
        &self,
        plan: &TraversalPlan,
        model: &dyn LocalityModel,
    ) -> Result<Vec<StepDecision>> {
        let decider = ShuffleDecider::with_config(model, self.config.clone());

        let mut decisions = Vec::with_capacity(plan.steps.len());
        for (step_index, step) in plan.steps.iter().enumerate() {
            validate_step(step, step_index)?;
            decisions.push(StepDecision {
                step_index,
                needs_shuffle: decider.decide(step),
            });
        }

        let exchanges = decisions.iter().filter(|d| d.needs_shuffle).count();
        info!(
            plan_id = %plan.id,
            steps = decisions.len(),
            exchanges,
            "planned exchange points"
        );

        Ok(decisions)
    }
}

/// Reject step payloads the upstream compiler should never emit.
fn validate_step(step: &Step, step_index: usize) -> Result<()> {
    let empty_property_name = match &step.kind {
        StepKind::PropertyFilter { properties } => properties.iter().any(|p| p.is_empty()),
        StepKind::PropertyProjection { property } => property.is_empty(),
        StepKind::PropertyFetch {
            selection: PropertySelection::Named(property),
        } => property.is_empty(),
        _ => false,
    };

    if empty_property_name {
        return Err(CommonError::plan_error(format!(
            "step {step_index} ({}) references an empty property name",
            step.kind_name()
        )));
    }
    Ok(())
}
