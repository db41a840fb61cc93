//! Engine interface and result types for spanning tree construction
//!
//! This module establishes the seam between the spanning tree engines and
//! their consumers. Engines are stateless values implementing [`MstEngine`];
//! every invocation is a pure function of the input graph aside from timing
//! and operation-count instrumentation, so a shared read-only graph may be
//! processed by independent threads without coordination.
//!
//! Instrumentation is threaded through algorithm bodies as an explicit
//! [`OperationCounter`] value rather than shared mutable state, keeping the
//! engines reentrant.

use serde::{Deserialize, Serialize};

use crate::data_structures::graph::{Edge, WeightedGraph};

/// Identity of a spanning tree construction algorithm
///
/// Serialized labels are the lowercase names consumers key results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    /// Priority-frontier vertex growth
    Prim,
    /// Sorted edge selection over a disjoint-set forest
    Kruskal,
}

impl MstAlgorithm {
    /// Stable label used to key results
    pub fn as_str(&self) -> &'static str {
        match self {
            MstAlgorithm::Prim => "prim",
            MstAlgorithm::Kruskal => "kruskal",
        }
    }
}

impl std::fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monotonic counter of primitive algorithm steps
///
/// Counts comparisons, queue traffic, and disjoint-set operations for
/// comparative reporting. The count is advisory instrumentation only and
/// never feeds back into control flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationCounter(u64);

impl OperationCounter {
    pub fn new() -> Self {
        Self(0)
    }

    /// Records a single primitive step
    #[inline]
    pub fn record(&mut self) {
        self.0 += 1;
    }

    /// Records `n` primitive steps at once
    #[inline]
    pub fn add(&mut self, n: u64) {
        self.0 += n;
    }

    #[inline]
    pub fn count(&self) -> u64 {
        self.0
    }
}

/// Immutable record of one engine invocation
///
/// Snapshot of the selected edge set and its instrumentation. A run that
/// could not span the graph is still a well-formed result; callers detect
/// it by comparing the edge count against `vertex_count - 1` (or via
/// [`MstResult::is_spanning`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MstResult {
    /// Algorithm that produced this result
    pub algorithm: MstAlgorithm,
    /// Selected edges in acceptance order
    pub edges: Vec<Edge>,
    /// Sum of the selected edge weights
    pub total_cost: i64,
    /// Vertex count of the input graph
    pub vertex_count: usize,
    /// Edge count of the input graph
    pub edge_count: usize,
    /// Primitive steps performed during the run
    pub operation_count: u64,
    /// Wall-clock time around the algorithm body, in milliseconds
    pub execution_time_ms: f64,
}

impl MstResult {
    /// Whether the selected edge set has the size of a spanning tree
    #[inline]
    pub fn is_spanning(&self) -> bool {
        self.edges.len() == self.vertex_count.saturating_sub(1)
    }
}

/// A spanning tree construction engine
///
/// # Invariants
/// - Invocations share no mutable state with each other or the engine
/// - Disconnected input yields a partial result, never a failure
/// - Degenerate graphs (0 or 1 vertex) yield an empty result
pub trait MstEngine {
    /// Identity of the implemented algorithm
    fn algorithm(&self) -> MstAlgorithm;

    /// Computes a minimum spanning tree of `graph`
    ///
    /// On a connected graph the result holds exactly `V - 1` edges of
    /// minimum total weight. The edge set may differ between equally
    /// correct runs when weight ties exist; the total cost may not.
    fn find_mst(&self, graph: &WeightedGraph) -> MstResult;
}
