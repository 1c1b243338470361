//! Family member entity model
//!
//! This module contains the core `Member` entity, representing a person
//! recorded within a family group. A member may or may not correspond to an
//! authenticated account; deceased relatives are recorded the same way as
//! living ones.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Identifier of a family member, assigned by the storage layer
pub type MemberId = String;

/// A person recorded within a family group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier
    pub id: MemberId,
    /// Family group this member belongs to
    pub family_id: String,
    /// Linked account identifier, if the member has signed up themselves
    #[serde(default)]
    pub user_id: Option<String>,
    /// Display name
    pub name: String,
    /// Photo URL, if one was uploaded
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Birth year, if known
    #[serde(default)]
    pub birth_year: Option<i32>,
    /// Whether the member is deceased
    #[serde(default)]
    pub is_deceased: bool,
    /// Account that added this member on their behalf
    #[serde(default)]
    pub added_by: Option<String>,
    /// Row creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Create a new member with the minimum required information
    #[must_use]
    pub fn new(id: impl Into<MemberId>, family_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            family_id: family_id.into(),
            user_id: None,
            name: name.into(),
            photo_url: None,
            birth_year: None,
            is_deceased: false,
            added_by: None,
            created_at: None,
        }
    }

    /// Set the birth year for this member
    #[must_use]
    pub fn with_birth_year(mut self, year: i32) -> Self {
        self.birth_year = Some(year);
        self
    }

    /// Mark this member as deceased
    #[must_use]
    pub fn deceased(mut self) -> Self {
        self.is_deceased = true;
        self
    }

    /// Link this member to an authenticated account
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Create a lookup map from member id to member
    #[must_use]
    pub fn create_lookup(members: &[Self]) -> FxHashMap<&str, &Self> {
        let mut lookup =
            FxHashMap::with_capacity_and_hasher(members.len(), Default::default());
        for member in members {
            lookup.insert(member.id.as_str(), member);
        }
        lookup
    }
}
