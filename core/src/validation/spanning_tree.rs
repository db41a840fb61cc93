//! Spanning tree validity checking
//!
//! Decides whether a candidate edge set is a spanning tree of a given
//! graph: exactly `V - 1` edges, no cycle, and a single component covering
//! every vertex. The check is incremental over a fresh disjoint-set
//! forest; the first merge failure is a cycle and ends the scan.
//!
//! Invalidity is a normal outcome used by tests and comparison logic, so
//! the checker returns a plain boolean and never fails.

use log::debug;

use crate::data_structures::disjoint_set::DisjointSet;
use crate::data_structures::graph::{Edge, WeightedGraph};

/// Whether `candidate` forms a spanning tree of `graph`
///
/// Degenerate graphs (0 or 1 vertex) are spanned by the empty edge set.
/// Edges naming vertices outside the graph make the candidate invalid
/// rather than a failure.
pub fn is_spanning_tree(graph: &WeightedGraph, candidate: &[Edge]) -> bool {
    let vertices = graph.vertex_count();

    if candidate.len() != vertices.saturating_sub(1) {
        debug!(
            "validator: expected {} edges, got {}",
            vertices.saturating_sub(1),
            candidate.len()
        );
        return false;
    }

    if vertices <= 1 {
        return true;
    }

    let mut forest = DisjointSet::new(vertices);
    for edge in candidate {
        if edge.source >= vertices || edge.destination >= vertices {
            debug!(
                "validator: edge {}-{} names a vertex outside the graph",
                edge.source, edge.destination
            );
            return false;
        }
        if !forest.union(edge.source, edge.destination) {
            debug!(
                "validator: edge {}-{} closes a cycle",
                edge.source, edge.destination
            );
            return false;
        }
    }

    forest.components() == 1
}
