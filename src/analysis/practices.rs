//! Best-practice recommendations and ranked improvement suggestions.
//!
//! These are hand-authored records gated by presence checks on the graph,
//! not derived computation. The implementation steps and example configs are
//! static guidance text.

use crate::analysis::report::Severity;
use crate::graph::{NodeKind, StrategyGraph};
use serde::Serialize;
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeCategory {
    RiskManagement,
    Robustness,
    Timing,
    Confirmation,
}

/// A short educational note attached to a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationalTip {
    pub id: String,
    pub topic: String,
    pub message: String,
}

/// A general best-practice pointer triggered by the graph's current shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestPracticeRecommendation {
    pub id: String,
    pub category: PracticeCategory,
    pub title: String,
    pub message: String,
    pub tips: Vec<EducationalTip>,
}

/// A ranked, actionable improvement with a canned implementation guide.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementSuggestion {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Severity,
    pub impact: Severity,
    pub implementation_steps: Vec<String>,
    /// A literal example node configuration, when one helps.
    pub example_config: Option<serde_json::Value>,
}

fn tip(id: &str, topic: &str, message: &str) -> EducationalTip {
    EducationalTip {
        id: id.to_string(),
        topic: topic.to_string(),
        message: message.to_string(),
    }
}

/// Recommendations filtered by simple presence/absence checks.
pub fn best_practices(graph: &StrategyGraph) -> Vec<BestPracticeRecommendation> {
    let mut recommendations = Vec::new();

    if !graph.has_kind(NodeKind::Risk) {
        recommendations.push(BestPracticeRecommendation {
            id: "use-stop-losses".to_string(),
            category: PracticeCategory::RiskManagement,
            title: "Always define your exit before your entry".to_string(),
            message: "Strategies without stop-losses turn small losing trades into \
                      account-threatening ones. Decide the maximum acceptable loss \
                      per trade and encode it as a risk node."
                .to_string(),
            tips: vec![
                tip(
                    "tip-risk-per-trade",
                    "Position sizing",
                    "A common rule of thumb is risking no more than 1-2% of equity per trade.",
                ),
                tip(
                    "tip-stop-placement",
                    "Stop placement",
                    "Place stops beyond recent swing points rather than at round numbers.",
                ),
            ],
        });
    }

    if graph.has_kind(NodeKind::Indicator) {
        recommendations.push(BestPracticeRecommendation {
            id: "avoid-over-optimization".to_string(),
            category: PracticeCategory::Robustness,
            title: "Prefer robust parameters over perfect backtests".to_string(),
            message: "Indicator parameters tuned to one historical window rarely \
                      survive the next one. Favor defaults and wide plateaus of \
                      profitability over single sharp peaks."
                .to_string(),
            tips: vec![tip(
                "tip-walk-forward",
                "Walk-forward testing",
                "Validate parameters on out-of-sample data before trading them.",
            )],
        });
    }

    if !graph.has_kind(NodeKind::Timing) {
        recommendations.push(BestPracticeRecommendation {
            id: "use-session-filters".to_string(),
            category: PracticeCategory::Timing,
            title: "Trade when your edge exists".to_string(),
            message: "Most setups behave differently across sessions. A timing node \
                      restricting signals to liquid hours removes a whole class of \
                      bad fills."
                .to_string(),
            tips: vec![],
        });
    }

    if graph.count_kind(NodeKind::Indicator) == 1 {
        recommendations.push(BestPracticeRecommendation {
            id: "confirm-signals".to_string(),
            category: PracticeCategory::Confirmation,
            title: "Confirm signals with a second, uncorrelated measure".to_string(),
            message: "A single indicator fires on every wiggle. Pairing a momentum \
                      measure with a trend or volume measure filters most noise."
                .to_string(),
            tips: vec![tip(
                "tip-uncorrelated",
                "Indicator pairing",
                "Combining two momentum oscillators adds little; combine different families.",
            )],
        });
    }

    recommendations
}

/// Produces improvement suggestions sorted by priority, then impact
/// (critical=4 down to low=1).
pub fn generate_improvements(graph: &StrategyGraph) -> Vec<ImprovementSuggestion> {
    let mut improvements = Vec::new();

    if graph.has_kind(NodeKind::Action) && !graph.has_kind(NodeKind::Risk) {
        improvements.push(ImprovementSuggestion {
            id: "add-risk-management".to_string(),
            title: "Add risk management".to_string(),
            description: "The strategy opens positions without any stop-loss or \
                          position-size control. This is the single highest-value \
                          improvement available."
                .to_string(),
            priority: Severity::Critical,
            impact: Severity::High,
            implementation_steps: vec![
                "Add a risk node to the canvas".to_string(),
                "Set the stop distance (2% is a conservative starting point)".to_string(),
                "Connect the risk node to every action node".to_string(),
                "Re-validate the strategy".to_string(),
            ],
            example_config: Some(serde_json::json!({
                "riskType": "stop-loss",
                "stopPercent": 2.0,
            })),
        });
    }

    if graph.count_kind(NodeKind::Indicator) == 1 {
        improvements.push(ImprovementSuggestion {
            id: "add-confirmation-indicator".to_string(),
            title: "Add a confirmation indicator".to_string(),
            description: "Entries currently depend on a single indicator. A second, \
                          uncorrelated indicator cuts false signals substantially."
                .to_string(),
            priority: Severity::High,
            impact: Severity::Medium,
            implementation_steps: vec![
                "Add a second indicator from a different family".to_string(),
                "Combine both signals with a logic node (AND)".to_string(),
                "Route the combined signal into the existing condition".to_string(),
            ],
            example_config: Some(serde_json::json!({
                "indicatorId": "macd",
                "parameters": { "fast": 12, "slow": 26, "signal": 9 },
            })),
        });
    }

    if !graph.has_kind(NodeKind::Timing) {
        improvements.push(ImprovementSuggestion {
            id: "add-time-filter".to_string(),
            title: "Add a time filter".to_string(),
            description: "Signals fire around the clock. Restricting them to liquid \
                          sessions usually improves fill quality."
                .to_string(),
            priority: Severity::Medium,
            impact: Severity::Medium,
            implementation_steps: vec![
                "Add a timing node".to_string(),
                "Restrict it to your market's main session".to_string(),
                "Connect it upstream of the entry condition".to_string(),
            ],
            example_config: Some(serde_json::json!({
                "sessionStart": "09:30",
                "sessionEnd": "16:00",
            })),
        });
    }

    if graph.nodes.iter().any(|n| n.parameters().is_some()) {
        improvements.push(ImprovementSuggestion {
            id: "optimize-parameters".to_string(),
            title: "Review tunable parameters".to_string(),
            description: "Several nodes carry tunable parameters that are still at \
                          their defaults or arbitrary values."
                .to_string(),
            priority: Severity::Medium,
            impact: Severity::High,
            implementation_steps: vec![
                "List every parameterized node".to_string(),
                "Sweep each parameter over a sensible range".to_string(),
                "Prefer wide stable regions over single best values".to_string(),
            ],
            example_config: None,
        });
    }

    improvements.sort_by_key(|i| Reverse((i.priority.ordinal(), i.impact.ordinal())));
    improvements
}
