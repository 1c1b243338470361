//! Domain core for a family-recipe-sharing application: family groups,
//! members, parent/child relationship edges, recipe attribution, and
//! family-tree reconstruction.
//!
//! The algorithmic heart is [`genealogy::build_family_tree`], a pure
//! function that turns a flat member list plus relationship edges into a
//! forest of nested family units (single parents or inferred couples with
//! their descendants) and a list of unconnected members. Everything else is
//! plumbing around the storage collaborator defined in [`storage`].

pub mod config;
pub mod error;
pub mod genealogy;
pub mod models;
pub mod storage;

// Re-export the most common types for easier use
// Core types
pub use config::{ChildOrder, TreeConfig};
pub use error::{HeirloomError, Result};
pub use genealogy::{FamilyTree, FamilyUnit, TreeStatistics, build_family_tree};

// Entity models
pub use models::{
    Attribution, AttributionType, Difficulty, Family, Member, MemberId, Recipe, Relationship,
};

// Storage boundary
pub use storage::{FamilySnapshot, FamilyStore, InMemoryStore, load_snapshot};
