//! Configuration for one traced run.
//!
//! Everything the run depends on is passed in here; nothing is read from
//! globals or the environment. Pacing between steps is not part of a run:
//! callers of [`trace_with`](crate::trace_with) sleep in their own callback.

use std::str::FromStr;

use crate::engine::TraversalPolicy;
use crate::error::Error;
use crate::graph::Node;
use crate::parser::{GraphSource, ParseOptions};

/// Output format for rendered steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" | "jsonl" => Ok(Self::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub source: GraphSource,
    /// Start node. `None` = first key of the graph.
    pub start: Option<Node>,
    pub policy: TraversalPolicy,
    pub parse: ParseOptions,
    /// Unicode markers (true) or plain ASCII (false) in text output.
    pub unicode: bool,
    pub format: OutputFormat,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            source: GraphSource::Builtin,
            start: None,
            policy: TraversalPolicy::Plain,
            parse: ParseOptions::default(),
            unicode: true,
            format: OutputFormat::Text,
        }
    }
}

impl TraceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Config reading the graph from adjacency-list text.
    pub fn with_text(src: impl Into<String>) -> Self {
        Self {
            source: GraphSource::Text(src.into()),
            ..Self::default()
        }
    }
}
