use serde::{Deserialize, Serialize};
use std::fmt;

/// The archetype family a pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    TrendFollowing,
    MeanReversion,
    Breakout,
    Momentum,
    Scalping,
    Swing,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StrategyKind::TrendFollowing => "trend-following",
            StrategyKind::MeanReversion => "mean-reversion",
            StrategyKind::Breakout => "breakout",
            StrategyKind::Momentum => "momentum",
            StrategyKind::Scalping => "scalping",
            StrategyKind::Swing => "swing",
        };
        f.write_str(name)
    }
}

/// The category half of a `category:name` element tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    Indicator,
    Condition,
    Action,
    Timeframe,
    /// A category the matcher has no keyword table for. Satisfaction falls
    /// back to a substring match against the raw tag text.
    Other(String),
}

/// A parsed `category:name` requirement tag, e.g. `indicator:rsi`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementTag {
    pub category: ElementCategory,
    pub name: String,
}

impl ElementTag {
    /// Parses a `category:name` string. Text without a colon becomes an
    /// `Other` tag whose name is the whole string.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((category, name)) => {
                let category = match category {
                    "indicator" => ElementCategory::Indicator,
                    "condition" => ElementCategory::Condition,
                    "action" => ElementCategory::Action,
                    "timeframe" => ElementCategory::Timeframe,
                    other => ElementCategory::Other(other.to_string()),
                };
                Self {
                    category,
                    name: name.to_string(),
                }
            }
            None => Self {
                category: ElementCategory::Other(String::new()),
                name: raw.to_string(),
            },
        }
    }
}

impl fmt::Display for ElementTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            ElementCategory::Indicator => write!(f, "indicator:{}", self.name),
            ElementCategory::Condition => write!(f, "condition:{}", self.name),
            ElementCategory::Action => write!(f, "action:{}", self.name),
            ElementCategory::Timeframe => write!(f, "timeframe:{}", self.name),
            ElementCategory::Other(c) if c.is_empty() => f.write_str(&self.name),
            ElementCategory::Other(c) => write!(f, "{}:{}", c, self.name),
        }
    }
}

/// A named strategy archetype matched against free-text descriptions.
///
/// Patterns are immutable records. A catalog is extended by value with
/// [`PatternCatalog::with_pattern`](super::PatternCatalog::with_pattern),
/// never by mutating an existing entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: String,
    pub name: String,
    pub kind: StrategyKind,
    /// Case-insensitive substrings looked for in the user's text.
    pub keywords: Vec<String>,
    pub required_elements: Vec<ElementTag>,
    pub optional_elements: Vec<ElementTag>,
    /// Fixed multiplier applied to the combined score, in (0, 1].
    pub confidence_weight: f64,
    /// Example phrases this pattern is meant to capture.
    pub examples: Vec<String>,
}
