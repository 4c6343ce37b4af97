use crate::graph::NodeKind;
use ahash::AHashMap;
use serde::Serialize;
use std::fmt;

/// Severity attached to errors (and reused as warning impact and
/// improvement priority). Ordering follows the ordinal map, `Low` lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// The fixed ordinal used for ranking: critical=4 down to low=1.
    pub fn ordinal(&self) -> u8 {
        match self {
            Severity::Critical => 4,
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        f.write_str(name)
    }
}

/// A concrete corrective action a consumer can apply to the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum FixAction {
    AddNode {
        kind: NodeKind,
        label: String,
        config: AHashMap<String, serde_json::Value>,
    },
    RemoveNode {
        node_id: String,
    },
    AddEdge {
        source: String,
        target: String,
    },
    RemoveEdge {
        edge_id: String,
    },
}

/// Machine-readable classification of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    MissingDataSource,
    MissingCondition,
    MissingAction,
    CircularDependency,
    InvalidConnection,
    IncompatibleConnection,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCode::MissingDataSource => "MISSING_DATA_SOURCE",
            ErrorCode::MissingCondition => "MISSING_CONDITION",
            ErrorCode::MissingAction => "MISSING_ACTION",
            ErrorCode::CircularDependency => "CIRCULAR_DEPENDENCY",
            ErrorCode::InvalidConnection => "INVALID_CONNECTION",
            ErrorCode::IncompatibleConnection => "INCOMPATIBLE_CONNECTION",
        };
        f.write_str(name)
    }
}

/// Machine-readable classification of a validation warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    NoRiskManagement,
    ExcessiveComplexity,
    TooManyIndicators,
    ParameterOutOfRange,
    DisconnectedNode,
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WarningCode::NoRiskManagement => "NO_RISK_MANAGEMENT",
            WarningCode::ExcessiveComplexity => "EXCESSIVE_COMPLEXITY",
            WarningCode::TooManyIndicators => "TOO_MANY_INDICATORS",
            WarningCode::ParameterOutOfRange => "PARAMETER_OUT_OF_RANGE",
            WarningCode::DisconnectedNode => "DISCONNECTED_NODE",
        };
        f.write_str(name)
    }
}

/// A structural problem that makes the strategy invalid.
///
/// Ids are deterministic (`<rule>-<subject>`), so re-validating the same
/// snapshot yields an identical report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub id: String,
    pub code: ErrorCode,
    pub message: String,
    pub severity: Severity,
    pub auto_fixable: bool,
    pub fix: Option<FixAction>,
    /// The nodes involved, in rule-specific order.
    pub node_ids: Vec<String>,
}

/// A non-fatal concern about the strategy's shape or parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationWarning {
    pub id: String,
    pub code: WarningCode,
    pub message: String,
    pub impact: Severity,
    pub node_ids: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionCategory {
    ConfirmationIndicator,
    ParameterOptimization,
    TimeFilter,
}

/// A gentle next-step hint emitted alongside the validation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationSuggestion {
    pub id: String,
    pub category: SuggestionCategory,
    pub message: String,
}

/// The full result of validating one graph snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    pub suggestions: Vec<ValidationSuggestion>,
    /// Structural completeness, 0-100.
    pub completeness: u8,
    /// Overall confidence in the strategy, 0.0-1.0.
    pub confidence: f64,
}

impl ValidationReport {
    pub fn error_codes(&self) -> Vec<ErrorCode> {
        self.errors.iter().map(|e| e.code).collect()
    }

    pub fn warning_codes(&self) -> Vec<WarningCode> {
        self.warnings.iter().map(|w| w.code).collect()
    }
}
