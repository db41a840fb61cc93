//! Prim spanning tree engine
//!
//! Grows the tree outward from vertex 0 by repeatedly committing the
//! minimum-weight edge that crosses the cut between committed and
//! uncommitted vertices. The cut property guarantees every such edge is
//! safe, which gives the greedy loop its optimality.
//!
//! The frontier is a lazy-deletion binary heap: candidate edges are pushed
//! eagerly and entries whose far endpoint was committed in the meantime are
//! discarded on pop. This removes any need for a decrease-key operation at
//! the cost of stale entries, bounding the frontier by O(E) instead of
//! O(V). An alternative dense formulation replaces the heap with a linear
//! scan for the minimum uncommitted key each round.
//!
//! # Complexity
//! - Frontier growth: O(E log E) time, O(E) space
//! - Dense scan: O(V^2) time, O(V) space
//!
//! Copyright (c) 2025 Mohammad Atashi. All rights reserved.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use log::{debug, trace};

use crate::algorithm::traits::{MstAlgorithm, MstEngine, MstResult, OperationCounter};
use crate::data_structures::graph::{Edge, WeightedGraph};

/// Frontier strategy selection for the Prim engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PrimStrategy {
    /// Lazy-deletion binary heap, O(E log E)
    LazyHeap,
    /// Linear minimum-key scan per round, O(V^2)
    DenseScan,
}

/// Prim minimum spanning tree engine
///
/// Stateless; construct once and reuse across graphs. [`PrimEngine::new`]
/// selects the heap frontier, [`PrimEngine::dense`] the quadratic scan
/// suited to dense graphs. Both produce the same total cost; the selected
/// edge set may legally differ where weight ties exist.
#[derive(Debug, Clone, Copy)]
pub struct PrimEngine {
    strategy: PrimStrategy,
}

impl PrimEngine {
    /// Engine backed by the lazy-deletion heap frontier
    pub fn new() -> Self {
        Self {
            strategy: PrimStrategy::LazyHeap,
        }
    }

    /// Engine backed by the O(V^2) minimum-key scan
    pub fn dense() -> Self {
        Self {
            strategy: PrimStrategy::DenseScan,
        }
    }
}

impl Default for PrimEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MstEngine for PrimEngine {
    fn algorithm(&self) -> MstAlgorithm {
        MstAlgorithm::Prim
    }

    fn find_mst(&self, graph: &WeightedGraph) -> MstResult {
        match self.strategy {
            PrimStrategy::LazyHeap => frontier_growth(graph),
            PrimStrategy::DenseScan => dense_scan(graph),
        }
    }
}

/// Frontier entry tagged with its push sequence number
///
/// The tag makes heap ordering total without inspecting vertex ids:
/// equal-weight candidates pop in push order, so tie resolution follows
/// traversal order and stays reproducible on identical input.
#[derive(Debug, Clone)]
struct Candidate {
    edge: Edge,
    seq: u64,
}

impl Candidate {
    fn new(edge: Edge, seq: u64) -> Self {
        Self { edge, seq }
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.edge.weight == other.edge.weight && self.seq == other.seq
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed ordering for min-heap behavior in BinaryHeap
        other
            .edge
            .weight
            .cmp(&self.edge.weight)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn empty_result(graph: &WeightedGraph, ops: OperationCounter, started: Instant) -> MstResult {
    MstResult {
        algorithm: MstAlgorithm::Prim,
        edges: Vec::new(),
        total_cost: 0,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        operation_count: ops.count(),
        execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
    }
}

/// Lazy-deletion heap variant
fn frontier_growth(graph: &WeightedGraph) -> MstResult {
    let started = Instant::now();
    let mut ops = OperationCounter::new();
    let vertices = graph.vertex_count();

    // Reachability pre-check; disconnection is reported, not fatal
    ops.record();
    if vertices == 0 || !graph.is_connected() {
        debug!("prim: input not spanning-capable ({} vertices)", vertices);
        return empty_result(graph, ops, started);
    }

    let mut in_tree = vec![false; vertices];
    let mut frontier: BinaryHeap<Candidate> = BinaryHeap::new();
    let mut mst_edges: Vec<Edge> = Vec::with_capacity(vertices.saturating_sub(1));
    let mut total_cost = 0i64;
    let mut seq = 0u64;

    in_tree[0] = true;
    ops.record();

    for edge in graph.adjacent(0) {
        frontier.push(Candidate::new(edge.clone(), seq));
        seq += 1;
        ops.record();
    }

    while mst_edges.len() < vertices - 1 {
        let Some(candidate) = frontier.pop() else {
            break;
        };
        ops.record();

        let edge = candidate.edge;
        let next = edge.destination;

        // Stale entry: far endpoint was committed after the push
        ops.record();
        if in_tree[next] {
            continue;
        }

        trace!(
            "prim: committing edge {}-{} (weight {})",
            edge.source,
            edge.destination,
            edge.weight
        );
        in_tree[next] = true;
        ops.record();
        total_cost += edge.weight;
        mst_edges.push(edge);

        for adjacent in graph.adjacent(next) {
            ops.record();
            if !in_tree[adjacent.destination] {
                frontier.push(Candidate::new(adjacent.clone(), seq));
                seq += 1;
                ops.record();
            }
        }
    }

    debug!(
        "prim: {} edges, total cost {}, {} operations",
        mst_edges.len(),
        total_cost,
        ops.count()
    );

    MstResult {
        algorithm: MstAlgorithm::Prim,
        edges: mst_edges,
        total_cost,
        vertex_count: vertices,
        edge_count: graph.edge_count(),
        operation_count: ops.count(),
        execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
    }
}

/// Dense O(V^2) variant: linear scan for the minimum uncommitted key
fn dense_scan(graph: &WeightedGraph) -> MstResult {
    let started = Instant::now();
    let mut ops = OperationCounter::new();
    let vertices = graph.vertex_count();

    ops.record();
    if vertices == 0 || !graph.is_connected() {
        debug!("prim (dense): input not spanning-capable");
        return empty_result(graph, ops, started);
    }

    const NO_PARENT: usize = usize::MAX;
    let mut key = vec![i64::MAX; vertices];
    let mut parent = vec![NO_PARENT; vertices];
    let mut in_tree = vec![false; vertices];
    key[0] = 0;

    for _ in 0..vertices {
        // Minimum-key vertex outside the tree
        let mut next = None;
        let mut best = i64::MAX;
        for v in 0..vertices {
            ops.record();
            if !in_tree[v] && key[v] < best {
                best = key[v];
                next = Some(v);
            }
        }

        // No reachable vertex left
        let Some(u) = next else {
            break;
        };

        in_tree[u] = true;
        ops.record();

        for edge in graph.adjacent(u) {
            ops.record();
            let v = edge.destination;
            if !in_tree[v] && edge.weight < key[v] {
                key[v] = edge.weight;
                parent[v] = u;
                ops.record();
            }
        }
    }

    let mut mst_edges: Vec<Edge> = Vec::with_capacity(vertices.saturating_sub(1));
    let mut total_cost = 0i64;
    for v in 1..vertices {
        if parent[v] != NO_PARENT {
            mst_edges.push(Edge::new(parent[v], v, key[v]));
            total_cost += key[v];
        }
    }

    debug!(
        "prim (dense): {} edges, total cost {}, {} operations",
        mst_edges.len(),
        total_cost,
        ops.count()
    );

    MstResult {
        algorithm: MstAlgorithm::Prim,
        edges: mst_edges,
        total_cost,
        vertex_count: vertices,
        edge_count: graph.edge_count(),
        operation_count: ops.count(),
        execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
    }
}
