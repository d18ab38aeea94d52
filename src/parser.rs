//! Adjacency-list text parser (the graph builder).
//!
//! Input is one node per line:
//!
//! ```text
//! A:B,C
//! B:D
//! D:
//! ```
//!
//! The line is split on its first `:`. Names are trimmed and empty neighbor
//! tokens are dropped, so `A: B , ,C,` gives `A -> [B, C]`. Lines without a
//! colon are skipped and reported as warnings unless strict parsing is on.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::ParseError;
use crate::graph::{Graph, Node};

/// `node : successors`, split on the first colon.
static LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^:]*):(.*)$").expect("valid line regex"));

// ── Options / results ───────────────────────────────────────────────────────

/// Where the graph comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GraphSource {
    /// The built-in seven-city graph.
    #[default]
    Builtin,
    /// User-supplied adjacency-list text.
    Text(String),
}

/// Parser switches. The default is fully lenient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Turn every warning into a [`ParseError::MalformedLine`].
    pub strict: bool,
    /// Reject successors that have no entry of their own.
    pub validate_references: bool,
}

/// A line the lenient parser skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseWarning {
    MissingColon { line: usize, text: String },
    EmptyNodeName { line: usize, text: String },
}

impl ParseWarning {
    pub fn line(&self) -> usize {
        match self {
            Self::MissingColon { line, .. } | Self::EmptyNodeName { line, .. } => *line,
        }
    }

    fn into_error(self) -> ParseError {
        match self {
            Self::MissingColon { line, text } => {
                ParseError::malformed(line, text, "expected 'Node:Succ1,Succ2,...'")
            }
            Self::EmptyNodeName { line, text } => {
                ParseError::malformed(line, text, "node name is empty")
            }
        }
    }
}

impl std::fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingColon { line, text } => {
                write!(f, "line {line}: no ':' found, skipped: {text:?}")
            }
            Self::EmptyNodeName { line, text } => {
                write!(f, "line {line}: empty node name, skipped: {text:?}")
            }
        }
    }
}

/// Graph plus the lines that were skipped while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGraph {
    pub graph: Graph,
    pub warnings: Vec<ParseWarning>,
}

// ── Entry points ─────────────────────────────────────────────────────────────

/// Parse with the lenient defaults. Never fails.
pub fn parse_adjacency(src: &str) -> ParsedGraph {
    let mut graph = Graph::new();
    let mut warnings = Vec::new();

    for (i, raw) in src.lines().enumerate() {
        let line_no = i + 1;
        match parse_line(raw) {
            Line::Blank => {}
            Line::Entry(node, succs) => graph.insert(node, succs),
            Line::Skipped(make) => {
                let w = make(line_no, raw.to_string());
                warn!(line = line_no, "{w}");
                warnings.push(w);
            }
        }
    }

    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        skipped = warnings.len(),
        "parsed adjacency list"
    );
    ParsedGraph { graph, warnings }
}

/// Parse with explicit options.
pub fn parse_adjacency_with(src: &str, opts: &ParseOptions) -> Result<ParsedGraph, ParseError> {
    let parsed = parse_adjacency(src);
    if opts.strict {
        if let Some(w) = parsed.warnings.first() {
            return Err(w.clone().into_error());
        }
    }
    if opts.validate_references {
        validate_references(&parsed.graph)?;
    }
    Ok(parsed)
}

/// Build a graph from `source`.
pub fn build(source: &GraphSource, opts: &ParseOptions) -> Result<ParsedGraph, ParseError> {
    match source {
        GraphSource::Builtin => Ok(ParsedGraph {
            graph: Graph::builtin(),
            warnings: Vec::new(),
        }),
        GraphSource::Text(src) => parse_adjacency_with(src, opts),
    }
}

/// Fail on the first successor that has no entry of its own.
pub fn validate_references(graph: &Graph) -> Result<(), ParseError> {
    match graph.dangling_references().first() {
        Some((node, succ)) => Err(ParseError::dangling(node.as_str(), succ.as_str())),
        None => Ok(()),
    }
}

// ── Line parsing ─────────────────────────────────────────────────────────────

type WarningCtor = fn(usize, String) -> ParseWarning;

enum Line {
    Blank,
    Entry(Node, Vec<Node>),
    Skipped(WarningCtor),
}

fn parse_line(raw: &str) -> Line {
    if raw.trim().is_empty() {
        return Line::Blank;
    }
    let Some(caps) = LINE_RE.captures(raw) else {
        return Line::Skipped(|line, text| ParseWarning::MissingColon { line, text });
    };
    let node = caps[1].trim();
    if node.is_empty() {
        return Line::Skipped(|line, text| ParseWarning::EmptyNodeName { line, text });
    }
    let succs = caps[2]
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    Line::Entry(node.to_string(), succs)
}

#[cfg(test)]
#[path = "../tests/rust/test_parser.rs"]
mod tests;
