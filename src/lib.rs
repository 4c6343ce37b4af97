//! # Shindan - Strategy-Graph Analysis Engine
//!
//! **Shindan** is a heuristic analysis and suggestion engine for node-based
//! trading-strategy graphs. It inspects the node/edge graph a visual builder
//! produces and emits validation errors, warnings, next-step suggestions,
//! best-practice recommendations, and naive performance-impact estimates,
//! plus a keyword matcher mapping free-text strategy descriptions to known
//! archetypes.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical in-memory
//! [`StrategyGraph`](graph::StrategyGraph) snapshot. The primary workflow is:
//!
//! 1.  **Load your data**: Parse your builder's export format into your own Rust structs.
//! 2.  **Convert**: Implement the [`IntoGraph`](graph::IntoGraph) trait to translate
//!     your structs into a `StrategyGraph`.
//! 3.  **Analyze**: Run any of the analyzers - they are pure functions of the
//!     snapshot and never fail; problems come back as data.
//!
//! ## Quick Start
//!
//! ```rust
//! use shindan::prelude::*;
//!
//! // A minimal strategy: market data -> RSI -> condition -> buy.
//! let graph = StrategyGraph::new(
//!     vec![
//!         Node::new("data", NodeKind::DataSource, "Market Data"),
//!         Node::new("rsi", NodeKind::Indicator, "RSI"),
//!         Node::new("cond", NodeKind::Condition, "RSI < 30"),
//!         Node::new("buy", NodeKind::Action, "Market Buy"),
//!     ],
//!     vec![
//!         Edge::new("e1", "data", "rsi"),
//!         Edge::new("e2", "rsi", "cond"),
//!         Edge::new("e3", "cond", "buy"),
//!     ],
//! );
//!
//! // Validate the structure.
//! let report = validate(&graph);
//! assert!(report.is_valid);
//! // No risk node yet, so the report warns and improvements rank it first.
//! let improvements = generate_improvements(&graph);
//! assert_eq!(improvements[0].id, "add-risk-management");
//!
//! // Match free text against the archetype catalog.
//! let catalog = PatternCatalog::builtin();
//! let matcher = PatternMatcher::new(&catalog);
//! let tokens = tokenize("Buy when RSI is below 30");
//! let token_refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
//! let matches = matcher.find_matches(&token_refs, "Buy when RSI is below 30");
//! assert_eq!(matches[0].pattern_id, "rsi_oversold_overbought");
//! ```

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod script;
