//! Family group entity model
//!
//! A family group is the top-level tenant scope: every member, relationship
//! edge, and recipe belongs to exactly one family group. New accounts join a
//! group through its invite code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A family group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Unique family group identifier
    pub id: String,
    /// Display name of the family group
    pub name: String,
    /// Account that created the group
    #[serde(default)]
    pub created_by: Option<String>,
    /// Invite code other accounts use to join, produced by the storage layer
    pub invite_code: String,
    /// Row creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Family {
    /// Create a new family group
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        invite_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            created_by: None,
            invite_code: invite_code.into(),
            created_at: None,
        }
    }
}
