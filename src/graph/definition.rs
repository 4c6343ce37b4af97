use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The category of a node in the strategy graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    DataSource,
    Indicator,
    Condition,
    Action,
    Risk,
    Timing,
    Math,
    Logic,
}

impl NodeKind {
    /// All kinds, in the order rules scan them.
    pub const ALL: [NodeKind; 8] = [
        NodeKind::DataSource,
        NodeKind::Indicator,
        NodeKind::Condition,
        NodeKind::Action,
        NodeKind::Risk,
        NodeKind::Timing,
        NodeKind::Math,
        NodeKind::Logic,
    ];

    /// The wire name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::DataSource => "data-source",
            NodeKind::Indicator => "indicator",
            NodeKind::Condition => "condition",
            NodeKind::Action => "action",
            NodeKind::Risk => "risk",
            NodeKind::Timing => "timing",
            NodeKind::Math => "math",
            NodeKind::Logic => "logic",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canvas coordinates. Layout only, never consulted by any rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single typed unit in the strategy graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    /// Free-form parameter map, e.g. `{"indicatorId": "rsi", "parameters": {"period": 14}}`.
    #[serde(default)]
    pub config: AHashMap<String, serde_json::Value>,
    #[serde(default)]
    pub position: Position,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            config: AHashMap::new(),
            position: Position::default(),
        }
    }

    /// The indicator identifier (`"rsi"`, `"sma"`, ...) if this node carries one.
    pub fn indicator_id(&self) -> Option<&str> {
        self.config.get("indicatorId").and_then(|v| v.as_str())
    }

    /// The nested tuning-parameter object, if present and non-empty.
    pub fn parameters(&self) -> Option<&serde_json::Map<String, serde_json::Value>> {
        self.config
            .get("parameters")
            .and_then(|v| v.as_object())
            .filter(|m| !m.is_empty())
    }

    /// Looks up a numeric value inside the `parameters` object.
    pub fn parameter_f64(&self, key: &str) -> Option<f64> {
        self.parameters()?.get(key)?.as_f64()
    }
}

/// A directed connection between two nodes, referencing their ids.
///
/// Endpoints are not guaranteed to resolve; a dangling edge is a condition
/// the validator reports, not one the model rejects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The complete strategy graph snapshot every analyzer operates on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrategyGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl StrategyGraph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes_of_kind(kind).count()
    }

    pub fn has_kind(&self, kind: NodeKind) -> bool {
        self.nodes.iter().any(|n| n.kind == kind)
    }

    /// Whether any edge touches the node, as source or target.
    pub fn is_connected(&self, node_id: &str) -> bool {
        self.edges
            .iter()
            .any(|e| e.source == node_id || e.target == node_id)
    }

    /// Whether the node has at least one outgoing edge.
    pub fn has_outgoing(&self, node_id: &str) -> bool {
        self.edges.iter().any(|e| e.source == node_id)
    }

    /// Whether the node has at least one incoming edge.
    pub fn has_incoming(&self, node_id: &str) -> bool {
        self.edges.iter().any(|e| e.target == node_id)
    }
}
