//! Renderers consume the engine's step sequence and turn it into output.
//!
//! They only read [`StepRecord`]s and the static [`Graph`]; nothing here feeds
//! back into the traversal.

pub mod json;
pub mod markers;
pub mod text;

pub use json::JsonRenderer;
pub use markers::{CharSet, Markers};
pub use text::TextRenderer;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::engine::StepRecord;
use crate::error::{Result, TraversalError};
use crate::graph::{Graph, Node};

// ─── NodeStatus ──────────────────────────────────────────────────────────────

/// Display state of a node at one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Current,
    Visited,
    /// On the stack, not yet visited.
    Pending,
    Unvisited,
}

impl NodeStatus {
    /// Fill color for graphical front ends.
    pub fn color(self) -> &'static str {
        match self {
            Self::Current => "red",
            Self::Visited => "green",
            Self::Pending => "orange",
            Self::Unvisited => "lightblue",
        }
    }
}

/// Status of `node` in `step`. Current wins over visited, visited over pending.
pub fn classify(node: &str, step: &StepRecord) -> NodeStatus {
    if node == step.current {
        NodeStatus::Current
    } else if step.is_visited(node) {
        NodeStatus::Visited
    } else if step.is_pending(node) {
        NodeStatus::Pending
    } else {
        NodeStatus::Unvisited
    }
}

// ─── Renderer ────────────────────────────────────────────────────────────────

/// Something that can present a traversal.
pub trait Renderer {
    /// Static view of the graph, emitted once before the first step.
    fn render_topology(&self, graph: &Graph) -> Result<String>;

    fn render_step(&self, graph: &Graph, step: &StepRecord) -> Result<String>;

    /// Emitted after the stack empties.
    fn render_summary(&self, order: &[Node]) -> Result<String>;

    /// Emitted instead of the summary when the traversal stops on an error.
    fn render_failure(&self, err: &TraversalError, steps: usize) -> Result<String>;
}

/// Renderer for `format`.
pub fn renderer_for(format: OutputFormat, unicode: bool) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(unicode)),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}
