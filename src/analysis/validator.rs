//! Structural validation of a strategy graph.
//!
//! Every rule is evaluated independently, in a fixed order, against the same
//! immutable snapshot. The result is data; nothing here ever fails.

use crate::analysis::report::{
    ErrorCode, FixAction, Severity, SuggestionCategory, ValidationError, ValidationReport,
    ValidationSuggestion, ValidationWarning, WarningCode,
};
use crate::graph::{Node, NodeKind, StrategyGraph};
use ahash::{AHashMap, AHashSet};

/// Above this node count the graph is flagged as hard to reason about.
const COMPLEXITY_THRESHOLD: usize = 15;
/// Above this indicator count the graph is flagged as overfitting-prone.
const INDICATOR_THRESHOLD: usize = 8;
/// Sane RSI period bounds.
const RSI_PERIOD_RANGE: (f64, f64) = (5.0, 50.0);
/// SMA periods above this lag too much to be useful.
const SMA_PERIOD_MAX: f64 = 200.0;

/// Runs every validation rule against the snapshot and assembles the report.
pub fn validate(graph: &StrategyGraph) -> ValidationReport {
    let errors = collect_errors(graph);
    let warnings = collect_warnings(graph);
    let suggestions = collect_suggestions(graph);
    let completeness = completeness_score(graph);
    let confidence = confidence_score(errors.len(), warnings.len(), completeness);

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        suggestions,
        completeness,
        confidence,
    }
}

/// Which target kinds each source kind may feed into.
pub fn allowed_targets(source: NodeKind) -> &'static [NodeKind] {
    match source {
        NodeKind::DataSource => &[NodeKind::Indicator, NodeKind::Condition, NodeKind::Math],
        NodeKind::Indicator => &[NodeKind::Condition, NodeKind::Math, NodeKind::Action],
        NodeKind::Condition => &[NodeKind::Action, NodeKind::Logic],
        NodeKind::Math => &[NodeKind::Condition, NodeKind::Action, NodeKind::Math],
        NodeKind::Logic => &[NodeKind::Action, NodeKind::Condition],
        NodeKind::Timing => &[NodeKind::Condition, NodeKind::Action],
        NodeKind::Risk => &[NodeKind::Action],
        // Actions are sinks.
        NodeKind::Action => &[],
    }
}

fn collect_errors(graph: &StrategyGraph) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    missing_component_errors(graph, &mut errors);
    cycle_errors(graph, &mut errors);
    edge_errors(graph, &mut errors);

    errors
}

fn missing_component_errors(graph: &StrategyGraph, errors: &mut Vec<ValidationError>) {
    let required: [(NodeKind, ErrorCode, &str, FixAction); 3] = [
        (
            NodeKind::DataSource,
            ErrorCode::MissingDataSource,
            "Strategy has no data source. Every strategy needs market data to act on.",
            FixAction::AddNode {
                kind: NodeKind::DataSource,
                label: "Market Data".to_string(),
                config: default_config(&[("symbol", "BTCUSDT"), ("timeframe", "1h")]),
            },
        ),
        (
            NodeKind::Condition,
            ErrorCode::MissingCondition,
            "Strategy has no entry condition. Add a condition node to decide when to trade.",
            FixAction::AddNode {
                kind: NodeKind::Condition,
                label: "Entry Condition".to_string(),
                config: default_config(&[("conditionType", "greater-than")]),
            },
        ),
        (
            NodeKind::Action,
            ErrorCode::MissingAction,
            "Strategy has no action. Add a buy or sell node so signals lead to orders.",
            FixAction::AddNode {
                kind: NodeKind::Action,
                label: "Market Buy".to_string(),
                config: market_buy_config(),
            },
        ),
    ];

    for (kind, code, message, fix) in required {
        if !graph.has_kind(kind) {
            errors.push(ValidationError {
                id: format!("missing-{}", kind),
                code,
                message: message.to_string(),
                severity: Severity::Critical,
                auto_fixable: true,
                fix: Some(fix),
                node_ids: Vec::new(),
            });
        }
    }
}

fn cycle_errors(graph: &StrategyGraph, errors: &mut Vec<ValidationError>) {
    for cycle in find_cycles(graph) {
        let trail = cycle.join(" -> ");
        errors.push(ValidationError {
            id: format!("circular-dependency-{}", cycle.join("-")),
            code: ErrorCode::CircularDependency,
            message: format!(
                "Circular dependency detected: {} -> {}",
                trail,
                cycle.first().map(String::as_str).unwrap_or_default()
            ),
            severity: Severity::Critical,
            auto_fixable: false,
            fix: None,
            node_ids: cycle,
        });
    }
}

/// Depth-first cycle search over edges whose endpoints both resolve.
///
/// The visited set is shared across seed nodes, so a node fully explored
/// under an earlier seed is not re-entered. A cycle reachable only through
/// such nodes can go unreported; for interactively edited graphs of this
/// size the next touching edit re-triggers detection. The recursion stack
/// and path are per-traversal, so every reported cycle is real and listed
/// in traversal order.
fn find_cycles(graph: &StrategyGraph) -> Vec<Vec<String>> {
    let node_ids: AHashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in &graph.edges {
        if node_ids.contains(edge.source.as_str()) && node_ids.contains(edge.target.as_str()) {
            adjacency
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }
    }

    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut cycles = Vec::new();

    for node in &graph.nodes {
        if !visited.contains(node.id.as_str()) {
            let mut on_stack: AHashSet<&str> = AHashSet::new();
            let mut path: Vec<&str> = Vec::new();
            dfs_cycles(
                node.id.as_str(),
                &adjacency,
                &mut visited,
                &mut on_stack,
                &mut path,
                &mut cycles,
            );
        }
    }

    cycles
}

fn dfs_cycles<'a>(
    node: &'a str,
    adjacency: &AHashMap<&'a str, Vec<&'a str>>,
    visited: &mut AHashSet<&'a str>,
    on_stack: &mut AHashSet<&'a str>,
    path: &mut Vec<&'a str>,
    cycles: &mut Vec<Vec<String>>,
) {
    visited.insert(node);
    on_stack.insert(node);
    path.push(node);

    if let Some(targets) = adjacency.get(node) {
        for &next in targets {
            if on_stack.contains(next) {
                // Stack membership guarantees `next` is on the current path.
                let start = path.iter().position(|&p| p == next).unwrap_or(0);
                cycles.push(path[start..].iter().map(|s| s.to_string()).collect());
            } else if !visited.contains(next) {
                dfs_cycles(next, adjacency, visited, on_stack, path, cycles);
            }
        }
    }

    path.pop();
    on_stack.remove(node);
}

fn edge_errors(graph: &StrategyGraph, errors: &mut Vec<ValidationError>) {
    for edge in &graph.edges {
        let source = graph.node(&edge.source);
        let target = graph.node(&edge.target);

        match (source, target) {
            (Some(source), Some(target)) => {
                if !allowed_targets(source.kind).contains(&target.kind) {
                    errors.push(ValidationError {
                        id: format!("incompatible-connection-{}", edge.id),
                        code: ErrorCode::IncompatibleConnection,
                        message: format!(
                            "A {} node cannot feed into a {} node ('{}' -> '{}')",
                            source.kind, target.kind, source.label, target.label
                        ),
                        severity: Severity::Medium,
                        auto_fixable: false,
                        fix: None,
                        node_ids: vec![source.id.clone(), target.id.clone()],
                    });
                }
            }
            _ => {
                let mut missing = Vec::new();
                if source.is_none() {
                    missing.push(edge.source.clone());
                }
                if target.is_none() {
                    missing.push(edge.target.clone());
                }
                errors.push(ValidationError {
                    id: format!("invalid-connection-{}", edge.id),
                    code: ErrorCode::InvalidConnection,
                    message: format!(
                        "Edge '{}' references missing node(s): {}",
                        edge.id,
                        missing.join(", ")
                    ),
                    severity: Severity::High,
                    auto_fixable: true,
                    fix: Some(FixAction::RemoveEdge {
                        edge_id: edge.id.clone(),
                    }),
                    node_ids: missing,
                });
            }
        }
    }
}

fn collect_warnings(graph: &StrategyGraph) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if graph.has_kind(NodeKind::Action) && !graph.has_kind(NodeKind::Risk) {
        warnings.push(ValidationWarning {
            id: "no-risk-management".to_string(),
            code: WarningCode::NoRiskManagement,
            message: "Strategy places orders without any risk management. \
                      Add a stop-loss or position-sizing node."
                .to_string(),
            impact: Severity::High,
            node_ids: graph
                .nodes_of_kind(NodeKind::Action)
                .map(|n| n.id.clone())
                .collect(),
        });
    }

    if graph.nodes.len() > COMPLEXITY_THRESHOLD {
        warnings.push(ValidationWarning {
            id: "excessive-complexity".to_string(),
            code: WarningCode::ExcessiveComplexity,
            message: format!(
                "Strategy has {} nodes (threshold {}). Consider simplifying.",
                graph.nodes.len(),
                COMPLEXITY_THRESHOLD
            ),
            impact: Severity::Medium,
            node_ids: Vec::new(),
        });
    }

    let indicator_count = graph.count_kind(NodeKind::Indicator);
    if indicator_count > INDICATOR_THRESHOLD {
        warnings.push(ValidationWarning {
            id: "too-many-indicators".to_string(),
            code: WarningCode::TooManyIndicators,
            message: format!(
                "Strategy uses {} indicators (threshold {}). \
                 Many overlapping indicators tend to overfit.",
                indicator_count, INDICATOR_THRESHOLD
            ),
            impact: Severity::Medium,
            node_ids: Vec::new(),
        });
    }

    for node in &graph.nodes {
        if let Some(message) = parameter_range_issue(node) {
            warnings.push(ValidationWarning {
                id: format!("parameter-out-of-range-{}", node.id),
                code: WarningCode::ParameterOutOfRange,
                message,
                impact: Severity::Low,
                node_ids: vec![node.id.clone()],
            });
        }
    }

    for node in &graph.nodes {
        if !graph.is_connected(&node.id) {
            warnings.push(ValidationWarning {
                id: format!("disconnected-node-{}", node.id),
                code: WarningCode::DisconnectedNode,
                message: format!("Node '{}' is not connected to anything", node.label),
                impact: Severity::Low,
                node_ids: vec![node.id.clone()],
            });
        }
    }

    warnings
}

/// Range checks for indicators with well-known parameter conventions.
fn parameter_range_issue(node: &Node) -> Option<String> {
    let period = node.parameter_f64("period")?;
    match node.indicator_id()? {
        "rsi" if !(RSI_PERIOD_RANGE.0..=RSI_PERIOD_RANGE.1).contains(&period) => Some(format!(
            "RSI period {} is outside the usual {}-{} range",
            period, RSI_PERIOD_RANGE.0, RSI_PERIOD_RANGE.1
        )),
        "sma" if period > SMA_PERIOD_MAX => Some(format!(
            "SMA period {} is above {}; the average will lag badly",
            period, SMA_PERIOD_MAX
        )),
        _ => None,
    }
}

fn collect_suggestions(graph: &StrategyGraph) -> Vec<ValidationSuggestion> {
    let mut suggestions = Vec::new();

    if graph.count_kind(NodeKind::Indicator) == 1 {
        suggestions.push(ValidationSuggestion {
            id: "confirmation-indicator".to_string(),
            category: SuggestionCategory::ConfirmationIndicator,
            message: "A single indicator produces many false signals. \
                      Consider adding a confirmation indicator."
                .to_string(),
        });
    }

    if graph.nodes.iter().any(|n| n.parameters().is_some()) {
        suggestions.push(ValidationSuggestion {
            id: "parameter-optimization".to_string(),
            category: SuggestionCategory::ParameterOptimization,
            message: "Nodes carry tunable parameters. Run an optimization pass \
                      to find better values."
                .to_string(),
        });
    }

    if !graph.has_kind(NodeKind::Timing) {
        suggestions.push(ValidationSuggestion {
            id: "time-filter".to_string(),
            category: SuggestionCategory::TimeFilter,
            message: "Consider a time filter to avoid trading illiquid sessions."
                .to_string(),
        });
    }

    suggestions
}

/// Structural completeness: 60 for the required trio, +20 for a first edge,
/// +20 for risk management, capped at 100.
fn completeness_score(graph: &StrategyGraph) -> u8 {
    let mut score = 0u8;
    if graph.has_kind(NodeKind::DataSource)
        && graph.has_kind(NodeKind::Condition)
        && graph.has_kind(NodeKind::Action)
    {
        score += 60;
    }
    if !graph.edges.is_empty() {
        score += 20;
    }
    if graph.has_kind(NodeKind::Risk) {
        score += 20;
    }
    score.min(100)
}

/// Confidence starts at 1.0, pays 0.2 per error and 0.1 per warning, is
/// scaled by completeness and clamped to [0, 1].
fn confidence_score(error_count: usize, warning_count: usize, completeness: u8) -> f64 {
    let penalized = 1.0 - 0.2 * error_count as f64 - 0.1 * warning_count as f64;
    (penalized * completeness as f64 / 100.0).clamp(0.0, 1.0)
}

fn default_config(entries: &[(&str, &str)]) -> AHashMap<String, serde_json::Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect()
}

/// The canonical market-buy action configuration suggested by fixes.
pub(crate) fn market_buy_config() -> AHashMap<String, serde_json::Value> {
    let mut config = AHashMap::new();
    config.insert(
        "orderType".to_string(),
        serde_json::Value::String("market".to_string()),
    );
    config.insert(
        "side".to_string(),
        serde_json::Value::String("buy".to_string()),
    );
    config.insert("quantityPercent".to_string(), serde_json::json!(25));
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_clamped() {
        assert_eq!(confidence_score(10, 10, 100), 0.0);
        assert_eq!(confidence_score(0, 0, 100), 1.0);
        let mid = confidence_score(1, 2, 80);
        assert!((0.0..=1.0).contains(&mid));
    }

    #[test]
    fn action_targets_are_empty() {
        assert!(allowed_targets(NodeKind::Action).is_empty());
    }
}
