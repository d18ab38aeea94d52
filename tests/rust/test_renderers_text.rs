use super::*;
use crate::engine::traverse;
use crate::parser::parse_adjacency;

fn steps(src: &str, start: &str) -> (Graph, Vec<StepRecord>) {
    let g = parse_adjacency(src).graph;
    let steps = traverse(&g, start).unwrap().run().unwrap().steps;
    (g, steps)
}

#[test]
fn test_topology_unicode() {
    let g = parse_adjacency("A:B,C\nB:\nC:").graph;
    let out = TextRenderer::new(true).render_topology(&g).unwrap();
    assert_eq!(
        out,
        "Graph: 3 node(s), 2 edge(s)\n  A ─► B, C\n  B ─► (none)\n  C ─► (none)\n"
    );
}

#[test]
fn test_topology_pads_names_and_marks_undefined() {
    let g = parse_adjacency("Long:S,X\nS:").graph;
    let out = TextRenderer::new(false).render_topology(&g).unwrap();
    assert_eq!(
        out,
        "Graph: 2 node(s), 2 edge(s)\n  Long -> S, X\n  S    -> (none)\n  X      (undefined)\n"
    );
}

#[test]
fn test_first_step_unicode() {
    let (g, steps) = steps("A:B,C\nB:\nC:", "A");
    let out = TextRenderer::new(true).render_step(&g, &steps[0]).unwrap();
    assert_eq!(
        out,
        "Step 1: current A\n\
         Stack:\n\
         ┌───┐\n\
         │ B │ ◄ top\n\
         │ C │\n\
         └───┘\n\
         Visited: A\n\
         Nodes: ● A  ◆ B  ◆ C\n"
    );
}

#[test]
fn test_last_step_has_empty_stack() {
    let (g, steps) = steps("A:B,C\nB:\nC:", "A");
    let out = TextRenderer::new(true).render_step(&g, &steps[2]).unwrap();
    assert_eq!(
        out,
        "Step 3: current C\nStack: (empty)\nVisited: A, B, C\nNodes: ✓ A  ✓ B  ● C\n"
    );
}

#[test]
fn test_stack_box_pads_to_widest_entry() {
    let (g, steps) = steps("R:x,long\nx:\nlong:", "R");
    let out = TextRenderer::new(false).render_step(&g, &steps[0]).unwrap();
    assert!(out.contains("+------+\n| x    | <- top\n| long |\n+------+\n"), "{out}");
}

#[test]
fn test_ascii_step_markers() {
    let (g, steps) = steps("A:B\nB:\nC:", "A");
    let out = TextRenderer::new(false).render_step(&g, &steps[0]).unwrap();
    assert!(out.ends_with("Nodes: * A  o B  . C\n"), "{out}");
}

#[test]
fn test_summary_and_failure() {
    let r = TextRenderer::new(false);
    let order = vec!["A".to_string(), "B".to_string(), "C".to_string()];
    assert_eq!(r.render_summary(&order).unwrap(), "Traversal order: A -> B -> C\n");
    assert_eq!(
        TextRenderer::default().render_summary(&order).unwrap(),
        "Traversal order: A → B → C\n"
    );

    let err = TraversalError::missing_node("B");
    assert_eq!(
        r.render_failure(&err, 1).unwrap(),
        "Traversal halted after 1 step(s): node 'B' is not defined in the graph\n"
    );
}
