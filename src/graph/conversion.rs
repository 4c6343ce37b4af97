use super::definition::StrategyGraph;
use crate::error::GraphConversionError;

/// A trait for custom builder formats that can be converted into a [`StrategyGraph`].
///
/// The analyzers operate on the canonical graph model only. By implementing
/// this trait on your own export structs you provide the translation layer
/// from whatever your builder persists (JSON, database rows, ...) into the
/// snapshot the engine consumes.
///
/// # Example
///
/// ```rust,no_run
/// use shindan::prelude::*;
/// use shindan::error::GraphConversionError;
///
/// struct ExportedNode { id: String, node_type: String }
/// struct BuilderExport { nodes: Vec<ExportedNode> }
///
/// impl IntoGraph for BuilderExport {
///     fn into_graph(self) -> std::result::Result<StrategyGraph, GraphConversionError> {
///         let mut nodes = Vec::new();
///         for raw in self.nodes {
///             let kind = serde_json::from_value(serde_json::Value::String(raw.node_type.clone()))
///                 .map_err(|_| GraphConversionError::UnknownNodeKind {
///                     node_id: raw.id.clone(),
///                     kind: raw.node_type,
///                 })?;
///             nodes.push(Node::new(raw.id, kind, ""));
///         }
///         Ok(StrategyGraph::new(nodes, vec![]))
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into the canonical strategy graph.
    fn into_graph(self) -> Result<StrategyGraph, GraphConversionError>;
}

impl IntoGraph for StrategyGraph {
    fn into_graph(self) -> Result<StrategyGraph, GraphConversionError> {
        Ok(self)
    }
}
