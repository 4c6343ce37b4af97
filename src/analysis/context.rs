//! Next-step suggestions for the node the user currently has selected.

use crate::analysis::report::{FixAction, Severity};
use crate::analysis::validator::market_buy_config;
use crate::graph::{Node, NodeKind, StrategyGraph};
use ahash::AHashMap;
use serde::Serialize;

/// A proposed next step, anchored to the current selection (or the graph as
/// a whole when nothing is selected).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextualSuggestion {
    pub id: String,
    pub title: String,
    pub message: String,
    pub priority: Severity,
    pub confidence: f64,
    pub proposed: FixAction,
}

/// Produces suggestions for the selection, sorted by descending priority and
/// then descending confidence.
pub fn contextual_suggestions(
    selected: Option<&Node>,
    graph: &StrategyGraph,
) -> Vec<ContextualSuggestion> {
    let mut suggestions = match selected {
        Some(node) => for_selected_node(node, graph),
        None => pipeline_gap(graph).into_iter().collect(),
    };

    suggestions.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then(b.confidence.total_cmp(&a.confidence))
    });
    suggestions
}

fn for_selected_node(node: &Node, graph: &StrategyGraph) -> Vec<ContextualSuggestion> {
    let mut suggestions = Vec::new();

    match node.kind {
        NodeKind::DataSource => {
            if !graph.has_outgoing(&node.id) {
                suggestions.push(ContextualSuggestion {
                    id: format!("feed-indicator-{}", node.id),
                    title: "Feed the data into an indicator".to_string(),
                    message: format!(
                        "'{}' is not feeding anything yet. An RSI is a common first step.",
                        node.label
                    ),
                    priority: Severity::High,
                    confidence: 0.9,
                    proposed: FixAction::AddNode {
                        kind: NodeKind::Indicator,
                        label: "RSI".to_string(),
                        config: rsi_config(),
                    },
                });
            }
        }
        NodeKind::Indicator => {
            if !graph.has_outgoing(&node.id) {
                suggestions.push(ContextualSuggestion {
                    id: format!("add-condition-{}", node.id),
                    title: "Compare the indicator against a threshold".to_string(),
                    message: format!(
                        "'{}' produces values but nothing reads them. \
                         Add a condition to turn them into signals.",
                        node.label
                    ),
                    priority: Severity::High,
                    confidence: 0.85,
                    proposed: FixAction::AddNode {
                        kind: NodeKind::Condition,
                        label: "Threshold".to_string(),
                        config: threshold_config(),
                    },
                });
            }
        }
        NodeKind::Condition => {
            if !graph.has_outgoing(&node.id) {
                suggestions.push(ContextualSuggestion {
                    id: format!("add-action-{}", node.id),
                    title: "Act on the signal".to_string(),
                    message: format!(
                        "'{}' fires signals that nothing acts on. Add an order action.",
                        node.label
                    ),
                    priority: Severity::High,
                    confidence: 0.9,
                    proposed: FixAction::AddNode {
                        kind: NodeKind::Action,
                        label: "Market Buy".to_string(),
                        config: market_buy_config(),
                    },
                });
            }
            if !graph.has_incoming(&node.id) {
                suggestions.push(ContextualSuggestion {
                    id: format!("connect-condition-input-{}", node.id),
                    title: "Give the condition an input".to_string(),
                    message: format!(
                        "'{}' has nothing to compare. Connect an indicator or data source.",
                        node.label
                    ),
                    priority: Severity::Medium,
                    confidence: 0.8,
                    proposed: FixAction::AddNode {
                        kind: NodeKind::Indicator,
                        label: "RSI".to_string(),
                        config: rsi_config(),
                    },
                });
            }
        }
        NodeKind::Action => {
            if !graph.has_kind(NodeKind::Risk) {
                suggestions.push(ContextualSuggestion {
                    id: format!("protect-action-{}", node.id),
                    title: "Protect the position".to_string(),
                    message: format!(
                        "'{}' opens positions with no exit protection. Add a stop-loss.",
                        node.label
                    ),
                    priority: Severity::Critical,
                    confidence: 0.95,
                    proposed: FixAction::AddNode {
                        kind: NodeKind::Risk,
                        label: "Stop Loss".to_string(),
                        config: stop_loss_config(),
                    },
                });
            }
        }
        NodeKind::Risk => {
            if !graph.has_outgoing(&node.id) {
                if let Some(action) = graph.nodes_of_kind(NodeKind::Action).next() {
                    suggestions.push(ContextualSuggestion {
                        id: format!("attach-risk-{}", node.id),
                        title: "Attach the risk control to an action".to_string(),
                        message: format!(
                            "'{}' protects nothing until it is connected to an action.",
                            node.label
                        ),
                        priority: Severity::High,
                        confidence: 0.85,
                        proposed: FixAction::AddEdge {
                            source: node.id.clone(),
                            target: action.id.clone(),
                        },
                    });
                }
            }
        }
        // No per-node heuristics; fall back to the pipeline gap, if any.
        NodeKind::Timing | NodeKind::Math | NodeKind::Logic => {}
    }

    if suggestions.is_empty() {
        suggestions.extend(pipeline_gap(graph));
    }
    suggestions
}

/// With no selection, propose the first missing component in pipeline order.
fn pipeline_gap(graph: &StrategyGraph) -> Option<ContextualSuggestion> {
    const PIPELINE: [NodeKind; 4] = [
        NodeKind::DataSource,
        NodeKind::Indicator,
        NodeKind::Condition,
        NodeKind::Action,
    ];

    let missing = PIPELINE.into_iter().find(|kind| !graph.has_kind(*kind))?;
    let (label, config) = match missing {
        NodeKind::DataSource => ("Market Data", market_data_config()),
        NodeKind::Indicator => ("RSI", rsi_config()),
        NodeKind::Condition => ("Threshold", threshold_config()),
        _ => ("Market Buy", market_buy_config()),
    };

    Some(ContextualSuggestion {
        id: format!("pipeline-add-{}", missing),
        title: format!("Add a {} node", missing),
        message: format!(
            "The strategy pipeline is missing a {} step. Add one to move forward.",
            missing
        ),
        priority: Severity::High,
        confidence: 0.8,
        proposed: FixAction::AddNode {
            kind: missing,
            label: label.to_string(),
            config,
        },
    })
}

fn market_data_config() -> AHashMap<String, serde_json::Value> {
    let mut config = AHashMap::new();
    config.insert("symbol".to_string(), serde_json::json!("BTCUSDT"));
    config.insert("timeframe".to_string(), serde_json::json!("1h"));
    config
}

fn rsi_config() -> AHashMap<String, serde_json::Value> {
    let mut config = AHashMap::new();
    config.insert("indicatorId".to_string(), serde_json::json!("rsi"));
    config.insert(
        "parameters".to_string(),
        serde_json::json!({ "period": 14 }),
    );
    config
}

fn threshold_config() -> AHashMap<String, serde_json::Value> {
    let mut config = AHashMap::new();
    config.insert("conditionType".to_string(), serde_json::json!("less-than"));
    config.insert("threshold".to_string(), serde_json::json!(30));
    config
}

fn stop_loss_config() -> AHashMap<String, serde_json::Value> {
    let mut config = AHashMap::new();
    config.insert("riskType".to_string(), serde_json::json!("stop-loss"));
    config.insert("stopPercent".to_string(), serde_json::json!(2.0));
    config
}
