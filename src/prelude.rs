//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the shindan
//! crate. Import this module to get access to the core surface without
//! importing each item individually.
//!
//! # Example
//!
//! ```rust
//! use shindan::prelude::*;
//!
//! let graph = StrategyGraph::default();
//! let report = validate(&graph);
//! assert!(!report.is_valid); // an empty graph is missing everything
//! ```

// Graph model
pub use crate::graph::{Edge, IntoGraph, Node, NodeKind, Position, StrategyGraph};

// Analyzers and their result types
pub use crate::analysis::{
    BestPracticeRecommendation, ContextualSuggestion, EducationalTip, ErrorCode, FixAction,
    ImprovementSuggestion, MetricDelta, PerformanceImpactAnalysis, PracticeCategory, Severity,
    StrategyChange, SuggestionCategory, ValidationError, ValidationReport, ValidationSuggestion,
    ValidationWarning, WarningCode, analyze_impact, best_practices, contextual_suggestions,
    generate_improvements, validate,
};

// Pattern catalog and matcher
pub use crate::catalog::{
    ElementCategory, ElementTag, Pattern, PatternCatalog, PatternMatch, PatternMatcher,
    StrategyKind, tokenize,
};

// Script block extraction
pub use crate::script::{CodeBlock, extract_code_blocks, extract_pine_blocks};

// Error types
pub use crate::error::{CatalogError, GraphConversionError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
