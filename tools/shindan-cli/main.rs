use clap::Parser;
use serde::Deserialize;
use shindan::error::GraphConversionError;
use shindan::prelude::*;
use std::fs;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the builder's export format and are only used here
// for conversion into the canonical graph.

#[derive(Deserialize)]
struct RawExport {
    nodes: Vec<RawNode>,
    edges: Vec<RawEdge>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    #[serde(alias = "nodeType", alias = "type")]
    kind: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    config: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    position: RawPosition,
}

#[derive(Deserialize, Default)]
struct RawPosition {
    #[serde(default)]
    x: f64,
    #[serde(default)]
    y: f64,
}

#[derive(Deserialize)]
struct RawEdge {
    #[serde(default)]
    id: String,
    source: String,
    target: String,
}

// --- Converter Implementation ---

impl IntoGraph for RawExport {
    fn into_graph(self) -> std::result::Result<StrategyGraph, GraphConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| {
                let kind: NodeKind =
                    serde_json::from_value(serde_json::Value::String(raw.kind.clone())).map_err(
                        |_| GraphConversionError::UnknownNodeKind {
                            node_id: raw.id.clone(),
                            kind: raw.kind,
                        },
                    )?;
                let mut node = Node::new(raw.id, kind, raw.label);
                node.config = raw.config.into_iter().collect();
                node.position = Position {
                    x: raw.position.x,
                    y: raw.position.y,
                };
                Ok(node)
            })
            .collect::<std::result::Result<Vec<_>, GraphConversionError>>()?;

        let edges = self
            .edges
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let id = if raw.id.is_empty() {
                    format!("edge-{}", index)
                } else {
                    raw.id
                };
                Edge::new(id, raw.source, raw.target)
            })
            .collect();

        Ok(StrategyGraph::new(nodes, edges))
    }
}

/// A heuristic analysis and suggestion engine for strategy graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the builder's graph export JSON file
    graph_path: Option<String>,

    /// Free-text strategy description to match against the archetype catalog
    #[arg(short, long)]
    describe: Option<String>,

    /// Print the full report as JSON instead of a human summary
    #[arg(long)]
    json: bool,

    /// Also print best-practice recommendations and ranked improvements
    #[arg(short = 's', long)]
    suggest: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Some(text) = &cli.describe {
        run_matching(text, cli.json);
        if cli.graph_path.is_none() {
            return;
        }
    }

    let graph_path = cli.graph_path.unwrap_or_else(|| {
        exit_with_error("A graph export path is required (or use --describe).")
    });
    run_analysis(&graph_path, cli.json, cli.suggest);
}

fn run_matching(text: &str, json: bool) {
    let catalog = PatternCatalog::builtin();
    let matcher = PatternMatcher::new(&catalog);
    let tokens = tokenize(text);
    let token_refs: Vec<&str> = tokens.iter().map(String::as_str).collect();
    let matches = matcher.find_matches(&token_refs, text);

    if json {
        match serde_json::to_string_pretty(&matches) {
            Ok(out) => println!("{}", out),
            Err(e) => exit_with_error(&format!("Failed to serialize matches: {}", e)),
        }
        return;
    }

    if matches.is_empty() {
        println!("No archetype matched \"{}\"", text);
        return;
    }
    println!("Archetype matches for \"{}\":", text);
    for m in &matches {
        println!(
            "  -> {} ({:.0}% confidence, keywords: {})",
            m.pattern_name,
            m.confidence * 100.0,
            m.matched_keywords.join(", ")
        );
        if !m.missing_elements.is_empty() {
            println!("     missing: {}", m.missing_elements.join(", "));
        }
    }
    println!();
}

fn run_analysis(graph_path: &str, json: bool, suggest: bool) {
    let graph_json = fs::read_to_string(graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read graph file '{}': {}", graph_path, e))
    });

    let raw: RawExport = serde_json::from_str(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));
    let graph = raw
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert export: {}", e)));

    println!(
        "Loaded graph: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );

    let report = validate(&graph);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(out) => println!("{}", out),
            Err(e) => exit_with_error(&format!("Failed to serialize report: {}", e)),
        }
    } else {
        print_report(&report);
        if suggest {
            print_suggestions(&graph);
        }
    }

    if !report.is_valid {
        std::process::exit(1);
    }
}

fn print_report(report: &ValidationReport) {
    println!("\n--- Validation Report ---");
    println!(
        "Valid: {}  Completeness: {}%  Confidence: {:.2}",
        report.is_valid, report.completeness, report.confidence
    );

    for error in &report.errors {
        let fixable = if error.auto_fixable { " [auto-fixable]" } else { "" };
        println!(
            "  ERROR [{}] ({}){}: {}",
            error.code, error.severity, fixable, error.message
        );
    }
    for warning in &report.warnings {
        println!(
            "  WARN  [{}] ({}): {}",
            warning.code, warning.impact, warning.message
        );
    }
    for suggestion in &report.suggestions {
        println!("  HINT  {}", suggestion.message);
    }
    println!();
}

fn print_suggestions(graph: &StrategyGraph) {
    let practices = best_practices(graph);
    if !practices.is_empty() {
        println!("--- Best Practices ---");
        for practice in &practices {
            println!("  {} - {}", practice.title, practice.message);
        }
        println!();
    }

    let improvements = generate_improvements(graph);
    if !improvements.is_empty() {
        println!("--- Ranked Improvements ---");
        for improvement in &improvements {
            println!(
                "  [{}/{}] {}",
                improvement.priority, improvement.impact, improvement.title
            );
            for step in &improvement.implementation_steps {
                println!("      - {}", step);
            }
        }
        println!();
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
