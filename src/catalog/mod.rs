use crate::error::CatalogError;

mod builtin;
pub mod matcher;
pub mod pattern;

pub use matcher::{PatternMatch, PatternMatcher, tokenize};
pub use pattern::{ElementCategory, ElementTag, Pattern, StrategyKind};

/// An owned, explicit collection of strategy archetypes.
///
/// There is no process-wide pattern list: callers construct a catalog (or
/// start from [`PatternCatalog::builtin`]), extend it by value, and hand a
/// reference to the [`PatternMatcher`]. Extension never mutates shared state.
#[derive(Debug, Clone, Default)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The default catalog seeded with the built-in archetype table.
    pub fn builtin() -> Self {
        Self {
            patterns: builtin::builtin_patterns(),
        }
    }

    /// Returns a catalog extended with `pattern`, validating the record first.
    pub fn with_pattern(mut self, pattern: Pattern) -> Result<Self, CatalogError> {
        if self.patterns.iter().any(|p| p.id == pattern.id) {
            return Err(CatalogError::DuplicatePatternId(pattern.id));
        }
        if !pattern.confidence_weight.is_finite()
            || pattern.confidence_weight <= 0.0
            || pattern.confidence_weight > 1.0
        {
            return Err(CatalogError::InvalidConfidenceWeight {
                pattern_id: pattern.id,
                weight: pattern.confidence_weight,
            });
        }
        if let Some(tag) = pattern
            .required_elements
            .iter()
            .chain(&pattern.optional_elements)
            .find(|t| t.name.is_empty())
        {
            return Err(CatalogError::MalformedElementTag {
                tag: tag.to_string(),
                pattern_id: pattern.id,
            });
        }
        self.patterns.push(pattern);
        Ok(self)
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn pattern(&self, id: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.id == id)
    }

    pub fn patterns_by_kind(&self, kind: StrategyKind) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter().filter(move |p| p.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
