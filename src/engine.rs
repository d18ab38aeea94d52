//! Iterative depth-first traversal that yields one snapshot per visited node.
//!
//! The traversal keeps an explicit LIFO stack so its state can be inspected
//! between steps. [`Traversal`] is a lazy iterator: each call to `next` pops
//! until it finds an unvisited node, pushes that node's unvisited successors
//! in reverse (so siblings come off the stack left to right), and returns a
//! [`StepRecord`] of the resulting state.
//!
//! The engine does no I/O and no pacing. A consumer that wants to stop early
//! just drops the iterator.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::TraversalError;
use crate::graph::{Graph, Node};

// ── Policy ───────────────────────────────────────────────────────────────────

/// How successors are scheduled after a node is visited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TraversalPolicy {
    /// Plain stack-based DFS.
    #[default]
    Plain,
    /// After the regular pushes, push the target once more whenever it is
    /// still unvisited and a direct successor of the current node.
    ///
    /// The target then pops next, which can reorder the traversal relative
    /// to plain DFS and leaves duplicate stack entries for it.
    ForceTarget(Node),
}

// ── StepRecord ───────────────────────────────────────────────────────────────

/// Traversal state right after one node was accepted and its successors pushed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    /// 0-based position of `current` in the traversal order.
    pub index: usize,
    pub current: Node,
    /// Pending nodes, bottom of the stack first.
    pub stack: Vec<Node>,
    pub visited: BTreeSet<Node>,
    /// Entries pushed during this step, bottom first.
    pub pushed: Vec<Node>,
}

impl StepRecord {
    /// Next node to be popped, if any.
    pub fn top(&self) -> Option<&Node> {
        self.stack.last()
    }

    pub fn is_visited(&self, node: &str) -> bool {
        self.visited.contains(node)
    }

    pub fn is_pending(&self, node: &str) -> bool {
        self.stack.iter().any(|n| n == node)
    }
}

/// Result of draining a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalRun {
    pub order: Vec<Node>,
    pub steps: Vec<StepRecord>,
}

// ── Traversal ────────────────────────────────────────────────────────────────

/// Start a plain DFS from `start`.
///
/// Fails before any step is produced if `start` is not a key of `graph`.
pub fn traverse<'g>(graph: &'g Graph, start: &str) -> Result<Traversal<'g>, TraversalError> {
    traverse_with(graph, start, TraversalPolicy::Plain)
}

/// Start a DFS from `start` with the given scheduling policy.
pub fn traverse_with<'g>(
    graph: &'g Graph,
    start: &str,
    policy: TraversalPolicy,
) -> Result<Traversal<'g>, TraversalError> {
    if !graph.contains(start) {
        return Err(TraversalError::missing_node(start));
    }
    debug!(start, ?policy, nodes = graph.len(), "starting traversal");
    Ok(Traversal {
        graph,
        policy,
        stack: vec![start.to_string()],
        visited: HashSet::new(),
        order: Vec::new(),
        emitted: 0,
        failed: false,
    })
}

/// One in-flight traversal. Not restartable; call [`traverse`] again for a fresh run.
#[derive(Debug)]
pub struct Traversal<'g> {
    graph: &'g Graph,
    policy: TraversalPolicy,
    stack: Vec<Node>,
    visited: HashSet<Node>,
    order: Vec<Node>,
    emitted: usize,
    failed: bool,
}

impl<'g> Traversal<'g> {
    /// Nodes accepted so far, in visit order.
    ///
    /// A node that failed its successor lookup is included: it was accepted
    /// before the lookup.
    pub fn order(&self) -> &[Node] {
        &self.order
    }

    /// Current stack, bottom first.
    pub fn stack(&self) -> &[Node] {
        &self.stack
    }

    pub fn visited(&self) -> &HashSet<Node> {
        &self.visited
    }

    /// Step records produced so far, not counting a failed step.
    pub fn steps_emitted(&self) -> usize {
        self.emitted
    }

    pub fn is_finished(&self) -> bool {
        self.failed || self.stack.is_empty()
    }

    pub fn into_order(self) -> Vec<Node> {
        self.order
    }

    /// Drain every remaining step.
    pub fn run(mut self) -> Result<TraversalRun, TraversalError> {
        let mut steps = Vec::new();
        for step in self.by_ref() {
            steps.push(step?);
        }
        Ok(TraversalRun {
            order: self.order,
            steps,
        })
    }

    fn accept(&mut self, current: Node) -> Result<StepRecord, TraversalError> {
        self.order.push(current.clone());
        self.visited.insert(current.clone());

        let graph = self.graph;
        let Some(successors) = graph.successors(&current) else {
            return Err(TraversalError::missing_node(current));
        };

        let base = self.stack.len();
        for succ in successors.iter().rev() {
            if !self.visited.contains(succ) {
                self.stack.push(succ.clone());
            }
        }

        if let TraversalPolicy::ForceTarget(target) = &self.policy {
            if !self.visited.contains(target) && successors.contains(target) {
                debug!(current = %current, target = %target, "forcing target onto stack");
                self.stack.push(target.clone());
            }
        }

        trace!(current = %current, stack = ?self.stack, "accepted node");
        Ok(StepRecord {
            index: self.order.len() - 1,
            current,
            stack: self.stack.clone(),
            visited: self.visited.iter().cloned().collect(),
            pushed: self.stack[base..].to_vec(),
        })
    }
}

impl Iterator for Traversal<'_> {
    type Item = Result<StepRecord, TraversalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        while let Some(current) = self.stack.pop() {
            if self.visited.contains(&current) {
                trace!(node = %current, "discarding already-visited node");
                continue;
            }
            let step = self.accept(current);
            match step {
                Ok(_) => self.emitted += 1,
                Err(_) => self.failed = true,
            }
            return Some(step);
        }
        None
    }
}

impl std::iter::FusedIterator for Traversal<'_> {}

#[cfg(test)]
#[path = "../tests/rust/test_engine.rs"]
mod tests;
