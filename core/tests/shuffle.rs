//! Integration tests for the shuffle-necessity analysis.
//!
//! These tests exercise the decision pass end to end: the per-step decider
//! against every step kind, and the planner walk over whole pipelines.

mod common;

use common::*;
use tracing_test::traced_test;
use trellis_core::{
    AnalysisConfig, ExchangePlanner, ExpansionDirection, ShuffleDecider, Step, TraversalPlan,
};

#[test]
fn test_edge_expansion_always_requires_shuffle() {
    let model = local_only_schema();
    let decider = ShuffleDecider::new(&model);

    // Locality of the schema is irrelevant for expansion steps.
    assert!(decider.decide(&Step::edge_expansion(ExpansionDirection::Out)));
    assert!(decider.decide(&Step::edge_expansion(ExpansionDirection::In)));
    assert!(decider.decide(&Step::edge_expansion(ExpansionDirection::Both)));
}

#[test]
fn test_projection_never_requires_shuffle() {
    let model = user_schema();
    let decider = ShuffleDecider::new(&model);

    // Even a projection of the remote property: the value is already bound.
    assert!(!decider.decide(&Step::property_projection("email")));
    assert!(!decider.decide(&Step::property_projection("name")));
}

#[test]
fn test_filter_shuffles_iff_any_property_is_remote() {
    let model = user_schema();
    let decider = ShuffleDecider::new(&model);

    assert!(!decider.decide(&Step::property_filter(["name"])));
    assert!(decider.decide(&Step::property_filter(["email"])));
    assert!(decider.decide(&Step::property_filter(["name", "email"])));
    assert!(!decider.decide(&Step::property_filter(Vec::<String>::new())));
}

#[test]
fn test_single_property_fetch_follows_that_property() {
    let model = user_schema();
    let decider = ShuffleDecider::new(&model);

    assert!(!decider.decide(&Step::property_fetch("name")));
    assert!(decider.decide(&Step::property_fetch("email")));
}

#[test]
fn test_fetch_of_property_absent_from_schema_is_conservative() {
    let model = user_schema();
    let decider = ShuffleDecider::new(&model);

    assert!(decider.decide(&Step::property_fetch("nickname")));
}

#[test]
fn test_full_map_fetch_checks_worst_case_across_schema() {
    let mixed = user_schema();
    assert!(ShuffleDecider::new(&mixed).decide(&Step::property_map_fetch()));

    let local_only = local_only_schema();
    assert!(!ShuffleDecider::new(&local_only).decide(&Step::property_map_fetch()));
}

#[test]
fn test_unclassified_steps_require_no_shuffle_by_default() {
    let model = user_schema();
    let decider = ShuffleDecider::new(&model);

    assert!(!decider.decide(&Step::other("PathStep")));
    assert!(!decider.decide(&Step::other("OrderStep")));
}

#[test]
fn test_unclassified_steps_can_be_forced_conservative() {
    let model = user_schema();
    let config = AnalysisConfig {
        shuffle_unclassified_steps: true,
        ..AnalysisConfig::default()
    };
    let decider = ShuffleDecider::with_config(&model, config);

    assert!(decider.decide(&Step::other("PathStep")));
    // Classified kinds are unaffected by the fallback knob.
    assert!(!decider.decide(&Step::property_fetch("name")));
}

#[test]
fn test_repeated_decisions_agree() {
    let model = user_schema();
    let decider = ShuffleDecider::new(&model);

    let steps = vec![
        Step::edge_expansion(ExpansionDirection::Both),
        Step::property_filter(["name", "email"]),
        Step::property_projection("name"),
        Step::property_fetch("email"),
        Step::property_map_fetch(),
        Step::other("PathStep"),
    ];

    for step in &steps {
        assert_eq!(decider.decide(step), decider.decide(step));
    }
}

#[test]
fn test_planner_places_exchanges_before_shuffling_steps() {
    let model = user_schema();
    let plan = TraversalPlan::new(vec![
        Step::edge_expansion(ExpansionDirection::Out),
        Step::property_filter(["name"]),
        Step::property_fetch("email"),
        Step::property_projection("email"),
        Step::property_map_fetch(),
        Step::other("OrderStep"),
    ]);

    let decisions = ExchangePlanner::new().plan(&plan, &model).unwrap();

    let verdicts: Vec<bool> = decisions.iter().map(|d| d.needs_shuffle).collect();
    assert_eq!(verdicts, vec![true, false, true, false, true, false]);
    for (index, decision) in decisions.iter().enumerate() {
        assert_eq!(decision.step_index, index);
    }
}

#[test]
fn test_planner_rejects_malformed_step_payloads() {
    let model = user_schema();
    let plan = TraversalPlan::new(vec![Step::property_filter(["name", ""])]);

    let result = ExchangePlanner::new().plan(&plan, &model);
    assert!(result.is_err());
    let message = format!("{}", result.unwrap_err());
    assert!(message.contains("empty property name"));
}

#[traced_test]
#[test]
fn test_per_step_decisions_are_logged() {
    let model = user_schema();
    let decider = ShuffleDecider::new(&model);

    decider.decide(&Step::property_fetch("email"));
    assert!(logs_contain("shuffle decision"));
}

#[traced_test]
#[test]
fn test_decision_logging_can_be_disabled() {
    let model = user_schema();
    let config = AnalysisConfig {
        log_decisions: false,
        ..AnalysisConfig::default()
    };
    let decider = ShuffleDecider::with_config(&model, config);

    decider.decide(&Step::property_fetch("email"));
    assert!(!logs_contain("shuffle decision"));
}

#[test]
fn test_planner_honors_analysis_config() {
    let model = user_schema();
    let plan = TraversalPlan::new(vec![Step::other("PathStep")]);

    let config = AnalysisConfig {
        shuffle_unclassified_steps: true,
        ..AnalysisConfig::default()
    };
    let decisions = ExchangePlanner::with_config(config).plan(&plan, &model).unwrap();

    assert_eq!(decisions.len(), 1);
    assert!(decisions[0].needs_shuffle);
}
