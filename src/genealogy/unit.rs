//! Family unit and tree output types
//!
//! A family unit is a derived rendering node: one or two parents plus their
//! nested descendant units. Units are transient, recomputed on every build,
//! and identified by the sorted hyphen-joined concatenation of their parent
//! ids, which stays stable across rebuilds as long as the parent set does.

use serde::Serialize;

use super::statistics::TreeStatistics;
use crate::models::{Member, MemberId};

/// A single parent or an inferred couple plus their descendant units
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyUnit {
    /// Rendering key: sorted, hyphen-joined parent ids
    pub id: String,
    /// One or two resolved parent members
    pub parents: Vec<Member>,
    /// Child units, ordered per `TreeConfig::child_order`
    pub children: Vec<FamilyUnit>,
}

impl FamilyUnit {
    /// Derive the unit id for a set of parent ids
    #[must_use]
    pub fn unit_id(parent_ids: &[&str]) -> String {
        let mut ids: Vec<&str> = parent_ids.to_vec();
        ids.sort_unstable();
        ids.join("-")
    }

    /// Whether this unit holds an inferred couple
    #[must_use]
    pub fn is_couple(&self) -> bool {
        self.parents.len() == 2
    }

    /// Ids of every member in this unit and its descendants
    #[must_use]
    pub fn member_ids(&self) -> Vec<MemberId> {
        let mut ids = Vec::new();
        self.collect_member_ids(&mut ids);
        ids
    }

    fn collect_member_ids(&self, ids: &mut Vec<MemberId>) {
        for parent in &self.parents {
            ids.push(parent.id.clone());
        }
        for child in &self.children {
            child.collect_member_ids(ids);
        }
    }

    /// Total number of units in this subtree, including this one
    #[must_use]
    pub fn unit_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(FamilyUnit::unit_count)
            .sum::<usize>()
    }
}

/// Complete output of one build: root units, orphans, and statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyTree {
    /// Root family units, one per connected ancestor group
    pub units: Vec<FamilyUnit>,
    /// Members touched by no relationship edge at all
    pub orphans: Vec<Member>,
    /// Counts gathered during construction
    pub statistics: TreeStatistics,
}

impl FamilyTree {
    /// Ids of every member placed somewhere in the forest
    #[must_use]
    pub fn placed_member_ids(&self) -> Vec<MemberId> {
        let mut ids = Vec::new();
        for unit in &self.units {
            unit.collect_member_ids(&mut ids);
        }
        ids
    }

    /// Whether the forest holds no units and no orphans
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty() && self.orphans.is_empty()
    }
}
