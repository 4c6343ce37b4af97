//! Tests for the contextual suggestion engine, the best-practice and
//! improvement suggesters, and the impact analyzer.
mod common;
use common::*;
use shindan::prelude::*;

// --- Contextual suggestions ---

#[test]
fn empty_graph_suggests_a_data_source_first() {
    let suggestions = contextual_suggestions(None, &StrategyGraph::default());

    assert_eq!(suggestions.len(), 1);
    match &suggestions[0].proposed {
        FixAction::AddNode { kind, .. } => assert_eq!(*kind, NodeKind::DataSource),
        other => panic!("expected AddNode, got {:?}", other),
    }
}

#[test]
fn pipeline_fills_in_order() {
    let mut graph = StrategyGraph::default();
    let expected = [
        NodeKind::DataSource,
        NodeKind::Indicator,
        NodeKind::Condition,
        NodeKind::Action,
    ];
    for (i, kind) in expected.into_iter().enumerate() {
        let suggestions = contextual_suggestions(None, &graph);
        match &suggestions[0].proposed {
            FixAction::AddNode { kind: proposed, .. } => assert_eq!(*proposed, kind),
            other => panic!("expected AddNode, got {:?}", other),
        }
        graph.nodes.push(node(&format!("n{}", i), kind, "n"));
    }

    // All pipeline stages present: nothing left to propose.
    assert!(contextual_suggestions(None, &graph).is_empty());
}

#[test]
fn unconnected_condition_suggests_an_action() {
    let graph = StrategyGraph::new(
        vec![node("cond", NodeKind::Condition, "Signal")],
        vec![],
    );
    let selected = graph.node("cond");

    let suggestions = contextual_suggestions(selected, &graph);
    let add_action = suggestions
        .iter()
        .find(|s| s.id == "add-action-cond")
        .expect("expected an add-action suggestion");

    match &add_action.proposed {
        FixAction::AddNode { kind, config, .. } => {
            assert_eq!(*kind, NodeKind::Action);
            assert_eq!(config.get("quantityPercent"), Some(&serde_json::json!(25)));
            assert_eq!(config.get("side"), Some(&serde_json::json!("buy")));
        }
        other => panic!("expected AddNode, got {:?}", other),
    }
}

#[test]
fn selected_action_without_risk_is_critical() {
    let graph = minimal_strategy();
    let suggestions = contextual_suggestions(graph.node("buy"), &graph);

    assert!(!suggestions.is_empty());
    let first = &suggestions[0];
    assert_eq!(first.priority, Severity::Critical);
    match &first.proposed {
        FixAction::AddNode { kind, .. } => assert_eq!(*kind, NodeKind::Risk),
        other => panic!("expected AddNode, got {:?}", other),
    }
}

#[test]
fn unattached_risk_node_proposes_an_edge() {
    let mut graph = minimal_strategy();
    graph.nodes.push(node("stop", NodeKind::Risk, "Stop Loss"));

    let suggestions = contextual_suggestions(graph.node("stop"), &graph);
    let attach = suggestions
        .iter()
        .find(|s| s.id == "attach-risk-stop")
        .expect("expected an attach suggestion");
    assert_eq!(
        attach.proposed,
        FixAction::AddEdge {
            source: "stop".to_string(),
            target: "buy".to_string(),
        }
    );
}

#[test]
fn suggestions_are_sorted_by_priority_then_confidence() {
    let graph = StrategyGraph::new(
        vec![node("cond", NodeKind::Condition, "Signal")],
        vec![],
    );
    let suggestions = contextual_suggestions(graph.node("cond"), &graph);
    for pair in suggestions.windows(2) {
        assert!(
            pair[0].priority > pair[1].priority
                || (pair[0].priority == pair[1].priority
                    && pair[0].confidence >= pair[1].confidence)
        );
    }
}

// --- Best practices and improvements ---

#[test]
fn unprotected_strategy_gets_risk_practice() {
    let practices = best_practices(&minimal_strategy());
    assert!(practices.iter().any(|p| p.id == "use-stop-losses"));
    assert!(practices.iter().any(|p| p.id == "avoid-over-optimization"));

    let protected = best_practices(&protected_strategy());
    assert!(!protected.iter().any(|p| p.id == "use-stop-losses"));
}

#[test]
fn risk_practice_carries_educational_tips() {
    let practices = best_practices(&minimal_strategy());
    let risk = practices
        .iter()
        .find(|p| p.id == "use-stop-losses")
        .expect("risk practice expected");
    assert_eq!(risk.category, PracticeCategory::RiskManagement);
    assert!(!risk.tips.is_empty());
}

#[test]
fn missing_risk_yields_a_critical_improvement() {
    let improvements = generate_improvements(&minimal_strategy());
    let risk = improvements
        .iter()
        .find(|i| i.id == "add-risk-management")
        .expect("expected add-risk-management");

    assert_eq!(risk.priority, Severity::Critical);
    assert!(!risk.implementation_steps.is_empty());
    assert!(risk.example_config.is_some());
    // Critical priority sorts first.
    assert_eq!(improvements[0].id, "add-risk-management");
}

#[test]
fn protected_strategy_drops_the_risk_improvement() {
    let improvements = generate_improvements(&protected_strategy());
    assert!(!improvements.iter().any(|i| i.id == "add-risk-management"));
}

#[test]
fn improvements_are_sorted_by_priority_then_impact() {
    let improvements = generate_improvements(&minimal_strategy());
    for pair in improvements.windows(2) {
        let a = (pair[0].priority.ordinal(), pair[0].impact.ordinal());
        let b = (pair[1].priority.ordinal(), pair[1].impact.ordinal());
        assert!(a >= b);
    }
}

// --- Impact analysis ---

#[test]
fn removing_risk_raises_the_risk_metric() {
    let graph = minimal_strategy();
    let change = StrategyChange::NodeRemoved {
        node: node("stop", NodeKind::Risk, "Stop Loss"),
    };
    let analysis = analyze_impact(&change, &graph);

    let delta = analysis
        .deltas
        .iter()
        .find(|d| d.metric == "Risk Level")
        .expect("expected a risk delta");
    assert_eq!(delta.before, 30.0);
    assert_eq!(delta.after, 60.0);
    assert!(!analysis.is_neutral());
}

#[test]
fn adding_risk_lowers_the_risk_metric() {
    let change = StrategyChange::NodeAdded {
        node: node("stop", NodeKind::Risk, "Stop Loss"),
    };
    let analysis = analyze_impact(&change, &minimal_strategy());
    let delta = analysis
        .deltas
        .iter()
        .find(|d| d.metric == "Risk Level")
        .expect("expected a risk delta");
    assert!(delta.after < delta.before);
}

#[test]
fn uneventful_changes_are_neutral() {
    let change = StrategyChange::NodeAdded {
        node: node("gate", NodeKind::Logic, "AND"),
    };
    let analysis = analyze_impact(&change, &minimal_strategy());
    assert!(analysis.is_neutral());
    assert!(analysis.deltas.is_empty());
}

#[test]
fn edge_changes_move_signal_coverage() {
    let graph = minimal_strategy();
    let added = analyze_impact(
        &StrategyChange::EdgeAdded {
            edge: Edge::new("e9", "rsi", "cond"),
        },
        &graph,
    );
    let removed = analyze_impact(
        &StrategyChange::EdgeRemoved {
            edge: Edge::new("e2", "rsi", "cond"),
        },
        &graph,
    );
    assert!(added.deltas[0].after > added.deltas[0].before);
    assert!(removed.deltas[0].after < removed.deltas[0].before);
}

#[test]
fn impact_analysis_is_idempotent() {
    let graph = minimal_strategy();
    let change = StrategyChange::NodeRemoved {
        node: node("stop", NodeKind::Risk, "Stop Loss"),
    };
    assert_eq!(analyze_impact(&change, &graph), analyze_impact(&change, &graph));
}
