//! ARBOR result validation
//! Structural checks over candidate spanning trees

pub mod spanning_tree;

pub use self::spanning_tree::is_spanning_tree;
