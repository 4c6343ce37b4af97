//! Common test utilities for building strategy graphs.
use shindan::prelude::*;

/// A node with an empty config, for structural tests.
#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind, label: &str) -> Node {
    Node::new(id, kind, label)
}

/// An indicator node carrying an `indicatorId` and a `period` parameter.
#[allow(dead_code)]
pub fn indicator(id: &str, indicator_id: &str, period: f64) -> Node {
    let mut n = Node::new(id, NodeKind::Indicator, indicator_id.to_uppercase());
    n.config.insert(
        "indicatorId".to_string(),
        serde_json::json!(indicator_id),
    );
    n.config.insert(
        "parameters".to_string(),
        serde_json::json!({ "period": period }),
    );
    n
}

/// The canonical minimal valid strategy:
/// `data -> rsi -> cond -> buy`, no risk management.
#[allow(dead_code)]
pub fn minimal_strategy() -> StrategyGraph {
    StrategyGraph::new(
        vec![
            node("data", NodeKind::DataSource, "Market Data"),
            indicator("rsi", "rsi", 14.0),
            node("cond", NodeKind::Condition, "RSI < 30"),
            node("buy", NodeKind::Action, "Market Buy"),
        ],
        vec![
            Edge::new("e1", "data", "rsi"),
            Edge::new("e2", "rsi", "cond"),
            Edge::new("e3", "cond", "buy"),
        ],
    )
}

/// The minimal strategy plus a connected stop-loss risk node.
#[allow(dead_code)]
pub fn protected_strategy() -> StrategyGraph {
    let mut graph = minimal_strategy();
    graph
        .nodes
        .push(node("stop", NodeKind::Risk, "Stop Loss"));
    graph.edges.push(Edge::new("e4", "stop", "buy"));
    graph
}

/// A three-node directed cycle: `a -> b -> c -> a`.
#[allow(dead_code)]
pub fn cyclic_strategy() -> StrategyGraph {
    StrategyGraph::new(
        vec![
            node("a", NodeKind::Math, "A"),
            node("b", NodeKind::Math, "B"),
            node("c", NodeKind::Math, "C"),
        ],
        vec![
            Edge::new("e1", "a", "b"),
            Edge::new("e2", "b", "c"),
            Edge::new("e3", "c", "a"),
        ],
    )
}

/// The minimal strategy plus one edge pointing at a node that does not exist.
#[allow(dead_code)]
pub fn dangling_edge_strategy() -> StrategyGraph {
    let mut graph = minimal_strategy();
    graph.edges.push(Edge::new("ghost", "rsi", "nowhere"));
    graph
}
