use thiserror::Error;

/// Errors that can occur when converting a custom builder format into a
/// canonical `StrategyGraph`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error("Node '{node_id}' has an unknown kind: '{kind}'")]
    UnknownNodeKind { node_id: String, kind: String },

    #[error("Invalid builder export: {0}")]
    ValidationError(String),
}

/// Errors that can occur when extending a pattern catalog.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("A pattern with id '{0}' is already registered")]
    DuplicatePatternId(String),

    #[error("Pattern '{pattern_id}' has a malformed element tag: '{tag}'")]
    MalformedElementTag { pattern_id: String, tag: String },

    #[error("Pattern '{pattern_id}' has an out-of-range confidence weight: {weight}")]
    InvalidConfidenceWeight { pattern_id: String, weight: f64 },
}
