//! Line-delimited JSON renderer.
//!
//! Each call yields one object tagged by `event`: `topology`, `step`, `done`
//! or `halted`. Step events carry a status per node so a graphical front end
//! can color the drawing without re-deriving state.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{NodeStatus, Renderer, classify};
use crate::engine::StepRecord;
use crate::error::{Result, TraversalError};
use crate::graph::{Graph, Node};

pub struct JsonRenderer;

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum Event<'a> {
    Topology {
        graph: &'a Graph,
        undefined: Vec<&'a Node>,
    },
    Step {
        #[serde(flatten)]
        step: &'a StepRecord,
        status: BTreeMap<&'a str, StatusEntry>,
    },
    Done {
        order: &'a [Node],
    },
    Halted {
        node: &'a str,
        steps: usize,
        error: String,
    },
}

#[derive(Serialize)]
struct StatusEntry {
    status: NodeStatus,
    color: &'static str,
}

fn line(event: &Event<'_>) -> Result<String> {
    let mut s = serde_json::to_string(event)?;
    s.push('\n');
    Ok(s)
}

impl Renderer for JsonRenderer {
    fn render_topology(&self, graph: &Graph) -> Result<String> {
        let undefined = graph
            .referenced_nodes()
            .into_iter()
            .filter(|n| !graph.contains(n))
            .collect();
        line(&Event::Topology { graph, undefined })
    }

    fn render_step(&self, graph: &Graph, step: &StepRecord) -> Result<String> {
        let status = graph
            .referenced_nodes()
            .into_iter()
            .map(|n| {
                let status = classify(n, step);
                (
                    n.as_str(),
                    StatusEntry {
                        status,
                        color: status.color(),
                    },
                )
            })
            .collect();
        line(&Event::Step { step, status })
    }

    fn render_summary(&self, order: &[Node]) -> Result<String> {
        line(&Event::Done { order })
    }

    fn render_failure(&self, err: &TraversalError, steps: usize) -> Result<String> {
        line(&Event::Halted {
            node: err.node(),
            steps,
            error: err.to_string(),
        })
    }
}
