//! ARBOR spanning tree engines
//! Two independent constructions of the same optimum, instrumented for comparison
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod kruskal;
pub mod prim;
pub mod traits;

pub use self::kruskal::KruskalEngine;
pub use self::prim::PrimEngine;
pub use self::traits::{MstAlgorithm, MstEngine, MstResult, OperationCounter};
