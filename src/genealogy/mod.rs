//! Family-tree reconstruction
//!
//! This module turns a flat list of members plus a set of directed
//! parent -> child edges into a render-ready forest of family units. The
//! work splits into three phases:
//!
//! - Index construction (`index`): child <-> parent multimaps and couple
//!   inference (two parents sharing at least one child form a couple).
//! - Recursive unit construction (`builder`): a forest of nested units, each
//!   holding one or two parents and their descendant units, with a placement
//!   set guaranteeing every member appears at most once even when the edge
//!   data is incomplete, cyclic, or records more than two parents.
//! - Classification (`builder` / `statistics`): root units, orphans (members
//!   touched by no edge), and conflict casualties that could not be placed.
//!
//! The builder is a pure function: no I/O, inputs unmutated, identical
//! output for identical input.

pub mod builder;
pub mod index;
pub mod statistics;
pub mod unit;

// Re-export commonly used types
pub use builder::build_family_tree;
pub use index::RelationshipIndex;
pub use statistics::TreeStatistics;
pub use unit::{FamilyTree, FamilyUnit};
