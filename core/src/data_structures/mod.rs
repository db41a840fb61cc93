//! ARBOR foundational data structures
//! Graph representation and the disjoint-set forest backing the engines
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod disjoint_set;
pub mod graph;

pub use self::disjoint_set::DisjointSet;
pub use self::graph::{Edge, GraphError, WeightedGraph};
