//! Free-text scoring against the pattern catalog.

use super::PatternCatalog;
use super::pattern::{ElementCategory, ElementTag};
use itertools::Itertools;
use serde::Serialize;

/// How heavily keyword overlap counts towards the final confidence.
const KEYWORD_WEIGHT: f64 = 0.6;
/// How heavily required-element coverage counts.
const REQUIRED_WEIGHT: f64 = 0.4;
/// Maximum bonus contributed by optional elements.
const OPTIONAL_BONUS: f64 = 0.2;
/// Matches below this confidence are dropped from the result.
const CONFIDENCE_FLOOR: f64 = 0.3;

/// One catalog pattern scored against a piece of user text.
#[derive(Debug, Clone, Serialize)]
pub struct PatternMatch {
    pub pattern_id: String,
    pub pattern_name: String,
    pub confidence: f64,
    /// Pattern keywords that were found in the text.
    pub matched_keywords: Vec<String>,
    /// Required elements the text gave no evidence for.
    pub missing_elements: Vec<String>,
}

/// Scores free text against a borrowed [`PatternCatalog`].
pub struct PatternMatcher<'a> {
    catalog: &'a PatternCatalog,
}

impl<'a> PatternMatcher<'a> {
    pub fn new(catalog: &'a PatternCatalog) -> Self {
        Self { catalog }
    }

    /// Scores every catalog pattern against the tokenized and raw text,
    /// returning matches above the confidence floor sorted by descending
    /// confidence. Equal scores keep catalog order.
    pub fn find_matches(&self, tokens: &[&str], original_text: &str) -> Vec<PatternMatch> {
        let text = original_text.to_lowercase();
        let tokens: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        self.catalog
            .patterns()
            .iter()
            .filter_map(|pattern| {
                let matched_keywords: Vec<String> = pattern
                    .keywords
                    .iter()
                    .filter(|kw| contains_term(&text, &tokens, &kw.to_lowercase()))
                    .cloned()
                    .collect();
                let keyword_score = if pattern.keywords.is_empty() {
                    0.0
                } else {
                    matched_keywords.len() as f64 / pattern.keywords.len() as f64
                };

                let (required_score, missing_elements) =
                    score_elements(&pattern.required_elements, &text, &tokens);
                let (optional_score, _) =
                    score_elements(&pattern.optional_elements, &text, &tokens);

                let combined = KEYWORD_WEIGHT * keyword_score
                    + REQUIRED_WEIGHT * required_score
                    + optional_score * OPTIONAL_BONUS;
                let confidence = (combined * pattern.confidence_weight).min(1.0);

                if confidence > CONFIDENCE_FLOOR {
                    Some(PatternMatch {
                        pattern_id: pattern.id.clone(),
                        pattern_name: pattern.name.clone(),
                        confidence,
                        matched_keywords,
                        missing_elements,
                    })
                } else {
                    None
                }
            })
            // sorted_by is stable, so catalog order breaks ties.
            .sorted_by(|a, b| b.confidence.total_cmp(&a.confidence))
            .collect()
    }
}

/// Splits text into lowercase alphanumeric tokens for [`PatternMatcher::find_matches`].
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

fn contains_term(text: &str, tokens: &[String], term: &str) -> bool {
    text.contains(term) || tokens.iter().any(|t| t.contains(term))
}

/// Returns the satisfied fraction and a display list of unmet tags.
fn score_elements(elements: &[ElementTag], text: &str, tokens: &[String]) -> (f64, Vec<String>) {
    if elements.is_empty() {
        return (0.0, Vec::new());
    }
    let mut missing = Vec::new();
    let mut satisfied = 0usize;
    for tag in elements {
        if element_satisfied(tag, text, tokens) {
            satisfied += 1;
        } else {
            missing.push(tag.to_string());
        }
    }
    (satisfied as f64 / elements.len() as f64, missing)
}

fn element_satisfied(tag: &ElementTag, text: &str, tokens: &[String]) -> bool {
    match element_evidence(tag) {
        Some(terms) => terms.iter().any(|t| contains_term(text, tokens, t)),
        // No table entry: fall back to the raw tag text itself.
        None => contains_term(text, tokens, &tag.name.to_lowercase()),
    }
}

/// The second-level keyword table: what counts as evidence that a given
/// element is present in the user's text.
fn element_evidence(tag: &ElementTag) -> Option<&'static [&'static str]> {
    let terms: &'static [&'static str] = match (&tag.category, tag.name.as_str()) {
        (ElementCategory::Indicator, "rsi") => &["rsi", "relative strength"],
        (ElementCategory::Indicator, "ma") => &["moving average", "sma", "ema"],
        (ElementCategory::Indicator, "ema") => &["ema", "exponential"],
        (ElementCategory::Indicator, "macd") => &["macd"],
        (ElementCategory::Indicator, "bollinger") => &["bollinger", "band"],
        (ElementCategory::Indicator, "volume") => &["volume"],
        (ElementCategory::Condition, "threshold") => {
            &["below", "above", "under", "over", "threshold"]
        }
        (ElementCategory::Condition, "crossover") => &["cross", "crosses", "crossover"],
        (ElementCategory::Condition, "breakout") => &["break", "breaks", "breakout"],
        (ElementCategory::Condition, "trend") => &["trend", "uptrend", "downtrend", "pullback"],
        (ElementCategory::Condition, "divergence") => &["divergence", "diverging"],
        (ElementCategory::Condition, "volume-confirm") => &["volume"],
        (ElementCategory::Action, "entry") => &["buy", "long", "enter", "short", "sell"],
        (ElementCategory::Action, "exit") => &["sell", "exit", "close", "take profit"],
        (ElementCategory::Timeframe, "intraday") => {
            &["intraday", "minute", "1m", "5m", "15m", "scalp"]
        }
        (ElementCategory::Timeframe, "daily") => &["daily", "day", "weekly", "swing"],
        _ => return None,
    };
    Some(terms)
}
