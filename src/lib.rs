//! dfs-stepper — step-by-step depth-first traversal with visible stack state.
//!
//! Public API: [`trace`], [`trace_dsl`] and [`trace_with`] for rendered output,
//! [`parser::parse_adjacency`] and [`engine::traverse`] for direct use of the
//! graph builder and step engine.

pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod parser;
pub mod renderers;

#[cfg(feature = "wasm")]
mod wasm;

use tracing::{debug, warn};

use crate::config::TraceConfig;
use crate::engine::{TraversalPolicy, traverse_with};
use crate::graph::Node;
use crate::parser::{GraphSource, ParseWarning, build};
use crate::renderers::renderer_for;

pub use crate::config::OutputFormat;
pub use crate::engine::{StepRecord, Traversal, traverse};
pub use crate::error::{Error, ParseError, Result, TraversalError};
pub use crate::graph::Graph;

/// Which part of a run a rendered chunk belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Topology,
    /// 0-based step index.
    Step(usize),
    Done,
    Halted,
}

/// What a completed run produced besides its rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceOutcome {
    pub start: Node,
    pub order: Vec<Node>,
    pub warnings: Vec<ParseWarning>,
}

/// Build, traverse and render, handing each rendered chunk to `emit` as soon
/// as it is ready.
///
/// A traversal that stops on a missing node still emits a [`Frame::Halted`]
/// chunk and then returns [`Error::Halted`] with an empty `partial`, since the
/// output has already been streamed.
pub fn trace_with<F>(config: &TraceConfig, mut emit: F) -> Result<TraceOutcome>
where
    F: FnMut(Frame, &str),
{
    let parsed = build(&config.source, &config.parse)?;
    let graph = &parsed.graph;
    if graph.is_empty() {
        return Err(ParseError::EmptyGraph.into());
    }

    let start = match &config.start {
        Some(s) => s.clone(),
        None => graph.first_node().cloned().ok_or(ParseError::EmptyGraph)?,
    };
    if let TraversalPolicy::ForceTarget(target) = &config.policy {
        if !graph.contains(target) {
            warn!(target = %target, "forced target is not a node of the graph");
        }
    }

    let mut traversal = traverse_with(graph, &start, config.policy.clone())?;
    let renderer = renderer_for(config.format, config.unicode);

    emit(Frame::Topology, &renderer.render_topology(graph)?);
    let mut steps = 0;
    for step in traversal.by_ref() {
        match step {
            Ok(step) => {
                steps += 1;
                emit(Frame::Step(step.index), &renderer.render_step(graph, &step)?);
            }
            Err(source) => {
                emit(Frame::Halted, &renderer.render_failure(&source, steps)?);
                return Err(Error::Halted {
                    partial: String::new(),
                    steps,
                    source,
                });
            }
        }
    }

    let order = traversal.into_order();
    emit(Frame::Done, &renderer.render_summary(&order)?);
    debug!(start = %start, visited = order.len(), "traversal complete");
    Ok(TraceOutcome {
        start,
        order,
        warnings: parsed.warnings,
    })
}

/// Run a traced traversal and return the full rendered output.
///
/// On a mid-run [`TraversalError`] the output produced so far is returned in
/// the `partial` field of [`Error::Halted`].
pub fn trace(config: &TraceConfig) -> Result<String> {
    let mut out = String::new();
    let spaced = config.format == OutputFormat::Text;
    let result = trace_with(config, |frame, chunk| {
        if spaced && !out.is_empty() && !matches!(frame, Frame::Done | Frame::Halted) {
            out.push('\n');
        }
        out.push_str(chunk);
    });
    match result {
        Ok(_) => Ok(out),
        Err(Error::Halted { steps, source, .. }) => Err(Error::Halted {
            partial: out,
            steps,
            source,
        }),
        Err(e) => Err(e),
    }
}

/// Trace a DFS over adjacency-list text as Unicode or ASCII text.
///
/// `start` defaults to the first node in the text.
pub fn trace_dsl(src: &str, start: Option<&str>, unicode: bool) -> Result<String> {
    let config = TraceConfig {
        source: GraphSource::Text(src.to_string()),
        start: start.map(str::to_owned),
        unicode,
        ..TraceConfig::default()
    };
    trace(&config)
}

#[cfg(test)]
#[path = "../tests/rust/test_api.rs"]
mod tests;
