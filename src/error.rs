//! Error types for graph building and traversal.
//!
//! Parsing problems and traversal failures are kept apart so a caller can
//! tell a bad input file from a traversal that had to stop half-way.

use thiserror::Error;

use crate::graph::Node;

/// Result type for the public API.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a graph from adjacency-list text.
///
/// Only produced when [`ParseOptions`](crate::parser::ParseOptions) asks for
/// strict parsing or reference validation; the lenient default skips bad
/// lines and reports them as warnings instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    /// A line could not be read as `Node:Succ1,Succ2,...`.
    #[error("line {line}: {reason}: {text:?}")]
    MalformedLine {
        /// 1-based line number
        line: usize,
        /// The offending line, untrimmed
        text: String,
        /// Why the line was rejected
        reason: String,
    },

    /// A successor names a node that has no adjacency-list entry.
    #[error("node '{node}' lists successor '{successor}' which has no entry of its own")]
    DanglingReference {
        /// The node whose successor list holds the reference
        node: Node,
        /// The undefined successor
        successor: Node,
    },

    /// The input produced no nodes at all.
    #[error("adjacency list is empty")]
    EmptyGraph,
}

impl ParseError {
    pub fn malformed(line: usize, text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedLine {
            line,
            text: text.into(),
            reason: reason.into(),
        }
    }

    pub fn dangling(node: impl Into<Node>, successor: impl Into<Node>) -> Self {
        Self::DanglingReference {
            node: node.into(),
            successor: successor.into(),
        }
    }
}

/// Errors raised by the step engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TraversalError {
    /// A node was dereferenced as `current` but is not a key of the graph.
    #[error("node '{node}' is not defined in the graph")]
    MissingNode {
        /// The node that could not be looked up
        node: Node,
    },
}

impl TraversalError {
    pub fn missing_node(node: impl Into<Node>) -> Self {
        Self::MissingNode { node: node.into() }
    }

    /// The node that caused the failure.
    pub fn node(&self) -> &str {
        match self {
            Self::MissingNode { node } => node,
        }
    }
}

/// Top-level error for the [`trace`](crate::trace) entry points.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Traversal could not start (e.g. the start node is unknown).
    #[error(transparent)]
    Traversal(#[from] TraversalError),

    /// Traversal started but stopped before the stack emptied.
    ///
    /// `partial` holds everything rendered before the failure so a caller can
    /// still show it, clearly marked as incomplete.
    #[error("traversal halted after {steps} step(s): {source}")]
    Halted {
        partial: String,
        steps: usize,
        #[source]
        source: TraversalError,
    },

    /// Renderer output could not be produced.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unknown output format '{0}'; use text or json")]
    UnknownFormat(String),
}
