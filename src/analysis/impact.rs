//! Naive before/after estimates for a single graph edit.
//!
//! The metric values are illustrative heuristics, not backtest output; they
//! exist so the UI can show a directionally-correct delta next to an edit.

use crate::graph::{Edge, Node, NodeKind, StrategyGraph};
use serde::Serialize;

/// One graph edit, as reported by the builder.
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyChange {
    NodeAdded { node: Node },
    NodeRemoved { node: Node },
    NodeModified { node: Node },
    EdgeAdded { edge: Edge },
    EdgeRemoved { edge: Edge },
}

/// An estimated shift in a single named metric (0-100 scale).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDelta {
    pub metric: String,
    pub before: f64,
    pub after: f64,
}

impl MetricDelta {
    fn new(metric: &str, before: f64, after: f64) -> Self {
        Self {
            metric: metric.to_string(),
            before,
            after,
        }
    }
}

/// The estimated impact of one change on the strategy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceImpactAnalysis {
    pub summary: String,
    pub deltas: Vec<MetricDelta>,
}

impl PerformanceImpactAnalysis {
    /// The zero-impact analysis returned when a branch has nothing to say.
    pub fn neutral() -> Self {
        Self {
            summary: "No measurable impact expected from this change".to_string(),
            deltas: Vec::new(),
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.deltas.is_empty()
    }
}

/// Dispatches on the change and returns the matching canned estimate.
pub fn analyze_impact(change: &StrategyChange, graph: &StrategyGraph) -> PerformanceImpactAnalysis {
    match change {
        StrategyChange::NodeAdded { node } => node_added(node),
        StrategyChange::NodeRemoved { node } => node_removed(node, graph),
        StrategyChange::NodeModified { node } => node_modified(node),
        StrategyChange::EdgeAdded { edge: _ } => PerformanceImpactAnalysis {
            summary: "Connecting components improves signal flow".to_string(),
            deltas: vec![MetricDelta::new("Signal Coverage", 50.0, 60.0)],
        },
        StrategyChange::EdgeRemoved { edge: _ } => PerformanceImpactAnalysis {
            summary: "Disconnecting components leaves signals unused".to_string(),
            deltas: vec![MetricDelta::new("Signal Coverage", 60.0, 50.0)],
        },
    }
}

fn node_added(node: &Node) -> PerformanceImpactAnalysis {
    match node.kind {
        NodeKind::Risk => PerformanceImpactAnalysis {
            summary: "Adding risk management reduces exposure on losing trades".to_string(),
            deltas: vec![
                MetricDelta::new("Risk Level", 60.0, 30.0),
                MetricDelta::new("Max Drawdown", 25.0, 15.0),
            ],
        },
        NodeKind::Indicator => PerformanceImpactAnalysis {
            summary: "An additional indicator can filter noise, at some lag cost".to_string(),
            deltas: vec![
                MetricDelta::new("Signal Quality", 50.0, 65.0),
                MetricDelta::new("Signal Frequency", 60.0, 45.0),
            ],
        },
        NodeKind::Condition => PerformanceImpactAnalysis {
            summary: "A tighter entry condition trades frequency for precision".to_string(),
            deltas: vec![MetricDelta::new("Entry Precision", 50.0, 60.0)],
        },
        NodeKind::Timing => PerformanceImpactAnalysis {
            summary: "A session filter avoids illiquid hours".to_string(),
            deltas: vec![MetricDelta::new("Fill Quality", 55.0, 65.0)],
        },
        _ => PerformanceImpactAnalysis::neutral(),
    }
}

fn node_removed(node: &Node, graph: &StrategyGraph) -> PerformanceImpactAnalysis {
    match node.kind {
        NodeKind::Risk => PerformanceImpactAnalysis {
            summary: "Removing risk management leaves positions unprotected".to_string(),
            deltas: vec![
                MetricDelta::new("Risk Level", 30.0, 60.0),
                MetricDelta::new("Max Drawdown", 15.0, 25.0),
            ],
        },
        NodeKind::Indicator => PerformanceImpactAnalysis {
            summary: "Removing an indicator loosens signal filtering".to_string(),
            deltas: vec![
                MetricDelta::new("Signal Quality", 65.0, 50.0),
                MetricDelta::new("Signal Frequency", 45.0, 60.0),
            ],
        },
        NodeKind::Condition if graph.count_kind(NodeKind::Condition) == 0 => {
            PerformanceImpactAnalysis {
                summary: "Without any entry condition the strategy cannot trade".to_string(),
                deltas: vec![MetricDelta::new("Entry Precision", 60.0, 0.0)],
            }
        }
        NodeKind::Condition => PerformanceImpactAnalysis {
            summary: "A looser entry condition increases trade frequency".to_string(),
            deltas: vec![MetricDelta::new("Entry Precision", 60.0, 50.0)],
        },
        _ => PerformanceImpactAnalysis::neutral(),
    }
}

fn node_modified(node: &Node) -> PerformanceImpactAnalysis {
    match node.kind {
        NodeKind::Indicator => PerformanceImpactAnalysis {
            summary: "Changed indicator parameters shift signal sensitivity".to_string(),
            deltas: vec![MetricDelta::new("Parameter Sensitivity", 50.0, 55.0)],
        },
        NodeKind::Risk => PerformanceImpactAnalysis {
            summary: "Changed risk parameters alter per-trade exposure".to_string(),
            deltas: vec![MetricDelta::new("Risk Level", 30.0, 35.0)],
        },
        _ => PerformanceImpactAnalysis::neutral(),
    }
}
