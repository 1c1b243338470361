//! Parent/child relationship edge model
//!
//! A relationship is a directed `parent -> child` fact between two members
//! of the same family group. A child may have any number of recorded parents
//! and a parent any number of children; the genealogy builder tolerates
//! whatever degree the data contains, including dangling member references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::member::MemberId;

/// A directed parent -> child fact within one family group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// Unique edge identifier
    pub id: String,
    /// Family group this edge is scoped to
    pub family_id: String,
    /// Member recorded as the parent
    pub parent_id: MemberId,
    /// Member recorded as the child
    pub child_id: MemberId,
    /// Row creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Relationship {
    /// Create a new relationship edge
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        family_id: impl Into<String>,
        parent_id: impl Into<MemberId>,
        child_id: impl Into<MemberId>,
    ) -> Self {
        Self {
            id: id.into(),
            family_id: family_id.into(),
            parent_id: parent_id.into(),
            child_id: child_id.into(),
            created_at: None,
        }
    }

    /// Whether this edge records the member as its own parent
    #[must_use]
    pub fn is_self_edge(&self) -> bool {
        self.parent_id == self.child_id
    }
}
