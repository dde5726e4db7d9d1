//! Bridge (cut-edge) detection and removal.
//!
//! Detection is the low-link depth-first search, run with an explicit stack
//! so long camera chains cannot exhaust the thread stack. The search refuses
//! to walk back along the *edge* it arrived by rather than back to the parent
//! *node*; a second edge to the parent therefore counts as a back edge, which
//! is what makes parallel edges non-bridges.

use tracing::{debug, instrument};

use crate::graph::{EdgeId, ViewGraph};

const UNVISITED: usize = 0;

struct Frame {
    node: usize,
    via: Option<EdgeId>,
    cursor: usize,
}

/// Returns every live bridge of `graph`, ascending by id.
///
/// Self-loops are never bridges and do not affect the result.
///
/// # Examples
/// ```
/// use viewgraph_core::{ViewGraph, find_bridges};
///
/// let mut graph = ViewGraph::with_nodes(4);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 0);
/// let tail = graph.add_edge(2, 3);
/// assert_eq!(find_bridges(&graph), vec![tail]);
/// ```
#[must_use]
pub fn find_bridges(graph: &ViewGraph) -> Vec<EdgeId> {
    let node_count = graph.node_count();
    // Discovery times start at 1 so that 0 can mean "not yet visited".
    let mut discovered = vec![UNVISITED; node_count];
    let mut low = vec![UNVISITED; node_count];
    let mut clock = UNVISITED;
    let mut stack: Vec<Frame> = Vec::new();
    let mut bridges = Vec::new();

    for root in 0..node_count {
        if discovered[root] != UNVISITED {
            continue;
        }
        clock += 1;
        discovered[root] = clock;
        low[root] = clock;
        stack.push(Frame {
            node: root,
            via: None,
            cursor: 0,
        });

        while let Some(frame) = stack.last_mut() {
            let node = frame.node;
            let via = frame.via;
            let Some(edge) = graph.incidence_slot(node, frame.cursor) else {
                stack.pop();
                if let (Some(tree_edge), Some(parent)) = (via, stack.last()) {
                    let parent = parent.node;
                    low[parent] = low[parent].min(low[node]);
                    if low[node] > discovered[parent] {
                        bridges.push(tree_edge);
                    }
                }
                continue;
            };
            frame.cursor += 1;

            if !graph.is_live(edge) || Some(edge) == via {
                continue;
            }
            let next = graph.opposite(edge, node);
            if discovered[next] == UNVISITED {
                clock += 1;
                discovered[next] = clock;
                low[next] = clock;
                stack.push(Frame {
                    node: next,
                    via: Some(edge),
                    cursor: 0,
                });
            } else {
                low[node] = low[node].min(discovered[next]);
            }
        }
    }

    bridges.sort_unstable();
    bridges
}

/// Erases every bridge of `graph` and returns how many were erased.
///
/// All bridges are found against the unmodified graph before the first one is
/// erased.
#[instrument(
    name = "viewgraph.remove_bridges",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn remove_bridges(graph: &mut ViewGraph) -> usize {
    let bridges = find_bridges(graph);
    let removed = bridges
        .into_iter()
        .filter(|&edge| graph.erase_edge(edge))
        .count();
    debug!(removed, "bridges removed");
    removed
}
