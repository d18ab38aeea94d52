//! Plain-text renderer: topology listing, a boxed stack per step, and a
//! status line with one marker per node.

use std::fmt::Write as _;

use super::markers::{CharSet, Markers};
use super::{Renderer, classify};
use crate::engine::StepRecord;
use crate::error::{Result, TraversalError};
use crate::graph::{Graph, Node};

pub struct TextRenderer {
    pub charset: CharSet,
    markers: Markers,
}

impl TextRenderer {
    pub fn new(unicode: bool) -> Self {
        let charset = CharSet::from_unicode_flag(unicode);
        Self {
            charset,
            markers: Markers::for_charset(charset),
        }
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Stack drawn as a box, top entry first.
    fn stack_box(&self, stack: &[Node]) -> String {
        let m = &self.markers;
        if stack.is_empty() {
            return "Stack: (empty)\n".to_string();
        }
        let width = stack.iter().map(|n| n.chars().count()).max().unwrap_or(0);
        let rule: String = std::iter::repeat_n(m.horizontal, width + 2).collect();

        let mut out = String::new();
        let _ = writeln!(out, "Stack:");
        let _ = writeln!(out, "{}{}{}", m.top_left, rule, m.top_right);
        for (i, node) in stack.iter().rev().enumerate() {
            let pad = width - node.chars().count();
            let _ = write!(out, "{} {}{} {}", m.vertical, node, " ".repeat(pad), m.vertical);
            if i == 0 {
                let _ = write!(out, " {}", m.top);
            }
            out.push('\n');
        }
        let _ = writeln!(out, "{}{}{}", m.bottom_left, rule, m.bottom_right);
        out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Renderer for TextRenderer {
    fn render_topology(&self, graph: &Graph) -> Result<String> {
        let m = &self.markers;
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Graph: {} node(s), {} edge(s)",
            graph.len(),
            graph.edge_count()
        );
        let nodes = graph.referenced_nodes();
        let width = nodes.iter().map(|n| n.chars().count()).max().unwrap_or(0);
        for node in nodes {
            let pad = " ".repeat(width - node.chars().count());
            match graph.successors(node) {
                Some([]) => {
                    let _ = writeln!(out, "  {node}{pad} {} (none)", m.edge);
                }
                Some(succs) => {
                    let _ = writeln!(out, "  {node}{pad} {} {}", m.edge, succs.join(", "));
                }
                None => {
                    let _ = writeln!(out, "  {node}{pad}   (undefined)");
                }
            }
        }
        Ok(out)
    }

    fn render_step(&self, graph: &Graph, step: &StepRecord) -> Result<String> {
        let m = &self.markers;
        let mut out = String::new();
        let _ = writeln!(out, "Step {}: current {}", step.index + 1, step.current);
        out.push_str(&self.stack_box(&step.stack));

        let visited: Vec<&str> = step.visited.iter().map(String::as_str).collect();
        let _ = writeln!(out, "Visited: {}", visited.join(", "));

        let statuses: Vec<String> = graph
            .referenced_nodes()
            .into_iter()
            .map(|n| format!("{} {}", m.status(classify(n, step)), n))
            .collect();
        let _ = writeln!(out, "Nodes: {}", statuses.join("  "));
        Ok(out)
    }

    fn render_summary(&self, order: &[Node]) -> Result<String> {
        Ok(format!("Traversal order: {}\n", order.join(self.markers.then)))
    }

    fn render_failure(&self, err: &TraversalError, steps: usize) -> Result<String> {
        Ok(format!("Traversal halted after {steps} step(s): {err}\n"))
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_text.rs"]
mod tests;
