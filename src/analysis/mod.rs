pub mod context;
pub mod impact;
pub mod practices;
pub mod report;
pub mod validator;

pub use context::{ContextualSuggestion, contextual_suggestions};
pub use impact::{MetricDelta, PerformanceImpactAnalysis, StrategyChange, analyze_impact};
pub use practices::{
    BestPracticeRecommendation, EducationalTip, ImprovementSuggestion, PracticeCategory,
    best_practices, generate_improvements,
};
pub use report::{
    ErrorCode, FixAction, Severity, SuggestionCategory, ValidationError, ValidationReport,
    ValidationSuggestion, ValidationWarning, WarningCode,
};
pub use validator::validate;
