//! ARBOR: Minimum Spanning Tree Laboratory
//!
//! Computes a minimum spanning tree of a weighted undirected graph with
//! two independent algorithms and reports comparable cost, edge-set, and
//! instrumentation statistics so the constructions can be cross-validated
//! against each other.
//!
//! # Theoretical Foundation
//!
//! Both engines are greedy and both are optimal, for dual reasons:
//!
//! - **Cut property**: for any partition of the vertices, the
//!   minimum-weight crossing edge is safe for the tree. Prim grows one
//!   component and commits that edge at every step.
//! - **Cycle property**: for any cycle, the maximum-weight edge belongs to
//!   no minimum spanning tree. Kruskal scans edges by ascending weight and
//!   discards exactly the edges a cycle would condemn.
//!
//! Agreement of the two total costs on a connected input is therefore a
//! strong cross-check of both implementations, and is what the result
//! types are shaped for.
//!
//! # Architecture
//!
//! - [`data_structures`]: the adjacency-list [`WeightedGraph`] and the
//!   [`DisjointSet`] forest
//! - [`algorithm`]: the [`PrimEngine`] and [`KruskalEngine`] behind the
//!   [`MstEngine`] trait, producing [`MstResult`] snapshots
//! - [`validation`]: the spanning tree validity check
//!
//! The crate owns no I/O. Graph loading, report writing, and result
//! comparison belong to external collaborators consuming these types.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod data_structures;
pub mod validation;

pub use self::algorithm::{KruskalEngine, MstAlgorithm, MstEngine, MstResult, OperationCounter, PrimEngine};
pub use self::data_structures::{DisjointSet, Edge, GraphError, WeightedGraph};
pub use self::validation::is_spanning_tree;
