//! Tests for the structural validator: error rules, warnings, suggestions,
//! and the completeness/confidence scores.
mod common;
use common::*;
use shindan::prelude::*;

#[test]
fn empty_graph_reports_all_missing_components() {
    let report = validate(&StrategyGraph::default());

    assert!(!report.is_valid);
    let codes = report.error_codes();
    assert!(codes.contains(&ErrorCode::MissingDataSource));
    assert!(codes.contains(&ErrorCode::MissingCondition));
    assert!(codes.contains(&ErrorCode::MissingAction));
    assert!(report.errors.iter().all(|e| e.severity == Severity::Critical));
    assert!(report.errors.iter().all(|e| e.auto_fixable));
    assert_eq!(report.completeness, 0);
    assert_eq!(report.confidence, 0.0);
}

#[test]
fn each_missing_component_is_reported_once() {
    for kind in [NodeKind::DataSource, NodeKind::Condition, NodeKind::Action] {
        let nodes = [NodeKind::DataSource, NodeKind::Condition, NodeKind::Action]
            .into_iter()
            .filter(|k| *k != kind)
            .enumerate()
            .map(|(i, k)| node(&format!("n{}", i), k, "n"))
            .collect();
        let report = validate(&StrategyGraph::new(nodes, vec![]));

        let criticals: Vec<_> = report
            .errors
            .iter()
            .filter(|e| e.severity == Severity::Critical)
            .collect();
        assert_eq!(criticals.len(), 1, "missing {} should be one error", kind);
        assert!(!report.is_valid);
    }
}

#[test]
fn missing_component_fixes_propose_node_additions() {
    let report = validate(&StrategyGraph::default());
    for error in &report.errors {
        match &error.fix {
            Some(FixAction::AddNode { kind, .. }) => {
                let expected = match error.code {
                    ErrorCode::MissingDataSource => NodeKind::DataSource,
                    ErrorCode::MissingCondition => NodeKind::Condition,
                    ErrorCode::MissingAction => NodeKind::Action,
                    other => panic!("unexpected code {:?}", other),
                };
                assert_eq!(*kind, expected);
            }
            other => panic!("expected AddNode fix, got {:?}", other),
        }
    }
}

#[test]
fn minimal_strategy_is_valid() {
    let report = validate(&minimal_strategy());
    assert!(report.is_valid);
    assert!(report.errors.is_empty());
    assert_eq!(report.completeness, 80); // trio + edges, no risk
}

#[test]
fn cycle_is_reported_with_traversal_order() {
    let report = validate(&cyclic_strategy());

    let cycle_errors: Vec<_> = report
        .errors
        .iter()
        .filter(|e| e.code == ErrorCode::CircularDependency)
        .collect();
    assert_eq!(cycle_errors.len(), 1);

    let error = cycle_errors[0];
    assert_eq!(error.node_ids, vec!["a", "b", "c"]);
    assert!(error.message.contains("a -> b -> c -> a"));
    assert!(!error.auto_fixable);
    assert!(error.fix.is_none());
}

#[test]
fn self_loop_is_a_cycle() {
    let graph = StrategyGraph::new(
        vec![node("m", NodeKind::Math, "M")],
        vec![Edge::new("e", "m", "m")],
    );
    let report = validate(&graph);
    assert!(
        report
            .error_codes()
            .contains(&ErrorCode::CircularDependency)
    );
}

#[test]
fn dangling_edge_is_exactly_one_removable_error() {
    let report = validate(&dangling_edge_strategy());

    let invalid: Vec<_> = report
        .errors
        .iter()
        .filter(|e| e.code == ErrorCode::InvalidConnection)
        .collect();
    assert_eq!(invalid.len(), 1);

    let error = invalid[0];
    assert!(error.auto_fixable);
    assert_eq!(
        error.fix,
        Some(FixAction::RemoveEdge {
            edge_id: "ghost".to_string()
        })
    );
    assert_eq!(error.node_ids, vec!["nowhere"]);
}

#[test]
fn incompatible_connection_is_flagged_but_not_fixable() {
    let mut graph = minimal_strategy();
    // Actions are sinks; an action feeding an indicator is nonsense.
    graph.edges.push(Edge::new("bad", "buy", "rsi"));

    let report = validate(&graph);
    let incompatible: Vec<_> = report
        .errors
        .iter()
        .filter(|e| e.code == ErrorCode::IncompatibleConnection)
        .collect();
    assert_eq!(incompatible.len(), 1);
    assert_eq!(incompatible[0].severity, Severity::Medium);
    assert!(!incompatible[0].auto_fixable);
}

#[test]
fn missing_risk_management_is_a_high_impact_warning() {
    let report = validate(&minimal_strategy());
    let warning = report
        .warnings
        .iter()
        .find(|w| w.code == WarningCode::NoRiskManagement)
        .expect("expected risk warning");
    assert_eq!(warning.impact, Severity::High);
    assert_eq!(warning.node_ids, vec!["buy"]);

    let protected = validate(&protected_strategy());
    assert!(
        !protected
            .warning_codes()
            .contains(&WarningCode::NoRiskManagement)
    );
}

#[test]
fn oversized_graphs_trigger_complexity_warnings() {
    let mut graph = protected_strategy();
    for i in 0..12 {
        graph
            .nodes
            .push(node(&format!("extra{}", i), NodeKind::Math, "Extra"));
        graph
            .edges
            .push(Edge::new(format!("ee{}", i), format!("extra{}", i), "cond"));
    }
    assert!(graph.nodes.len() > 15);

    let report = validate(&graph);
    assert!(
        report
            .warning_codes()
            .contains(&WarningCode::ExcessiveComplexity)
    );
}

#[test]
fn too_many_indicators_warns_about_overfitting() {
    let mut graph = protected_strategy();
    for i in 0..9 {
        let id = format!("ind{}", i);
        graph.nodes.push(indicator(&id, "sma", 20.0));
        graph.edges.push(Edge::new(format!("ie{}", i), id, "cond"));
    }

    let report = validate(&graph);
    assert!(
        report
            .warning_codes()
            .contains(&WarningCode::TooManyIndicators)
    );
}

#[test]
fn out_of_range_parameters_warn_per_node() {
    let mut graph = minimal_strategy();
    graph.nodes.push(indicator("wild_rsi", "rsi", 60.0));
    graph.edges.push(Edge::new("e5", "wild_rsi", "cond"));
    graph.nodes.push(indicator("slow_sma", "sma", 250.0));
    graph.edges.push(Edge::new("e6", "slow_sma", "cond"));
    graph.nodes.push(indicator("fine_sma", "sma", 100.0));
    graph.edges.push(Edge::new("e7", "fine_sma", "cond"));

    let report = validate(&graph);
    let out_of_range: Vec<_> = report
        .warnings
        .iter()
        .filter(|w| w.code == WarningCode::ParameterOutOfRange)
        .collect();
    assert_eq!(out_of_range.len(), 2);
    let flagged: Vec<_> = out_of_range.iter().flat_map(|w| &w.node_ids).collect();
    assert!(flagged.contains(&&"wild_rsi".to_string()));
    assert!(flagged.contains(&&"slow_sma".to_string()));
}

#[test]
fn disconnected_nodes_are_warned_individually() {
    let mut graph = minimal_strategy();
    graph.nodes.push(node("lost", NodeKind::Timing, "Sessions"));

    let report = validate(&graph);
    let disconnected: Vec<_> = report
        .warnings
        .iter()
        .filter(|w| w.code == WarningCode::DisconnectedNode)
        .collect();
    assert_eq!(disconnected.len(), 1);
    assert_eq!(disconnected[0].node_ids, vec!["lost"]);
}

#[test]
fn suggestions_follow_graph_shape() {
    let report = validate(&minimal_strategy());

    let categories: Vec<_> = report.suggestions.iter().map(|s| s.category).collect();
    // One indicator, parameterized nodes, no timing node.
    assert!(categories.contains(&SuggestionCategory::ConfirmationIndicator));
    assert!(categories.contains(&SuggestionCategory::ParameterOptimization));
    assert!(categories.contains(&SuggestionCategory::TimeFilter));
}

#[test]
fn completeness_is_monotone_and_capped() {
    let mut graph = StrategyGraph::default();
    let mut last = validate(&graph).completeness;
    assert_eq!(last, 0);

    graph.nodes.push(node("d", NodeKind::DataSource, "Data"));
    graph.nodes.push(node("c", NodeKind::Condition, "Cond"));
    graph.nodes.push(node("a", NodeKind::Action, "Buy"));
    for step in [
        None,
        Some(Edge::new("e1", "d", "c")),
        None, // risk node added below
    ] {
        if let Some(edge) = step {
            graph.edges.push(edge);
        }
        let completeness = validate(&graph).completeness;
        assert!(completeness >= last);
        assert!(completeness <= 100);
        last = completeness;
    }

    graph.nodes.push(node("r", NodeKind::Risk, "Stop"));
    graph.edges.push(Edge::new("e2", "r", "a"));
    graph.edges.push(Edge::new("e3", "c", "a"));
    let completeness = validate(&graph).completeness;
    assert!(completeness >= last);
    assert_eq!(completeness, 100);
}

#[test]
fn confidence_stays_in_unit_interval() {
    let graphs = [
        StrategyGraph::default(),
        minimal_strategy(),
        protected_strategy(),
        cyclic_strategy(),
        dangling_edge_strategy(),
    ];
    for graph in &graphs {
        let report = validate(graph);
        assert!(
            (0.0..=1.0).contains(&report.confidence),
            "confidence {} out of range",
            report.confidence
        );
    }
}

#[test]
fn fully_protected_strategy_scores_perfectly() {
    let report = validate(&protected_strategy());
    assert!(report.is_valid);
    assert_eq!(report.completeness, 100);
    assert!(report.warnings.is_empty());
    assert_eq!(report.confidence, 1.0);
}

#[test]
fn validation_is_idempotent() {
    let graph = dangling_edge_strategy();
    assert_eq!(validate(&graph), validate(&graph));
}
