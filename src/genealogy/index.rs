//! Relationship indexes and couple inference
//!
//! Phase one of tree construction: derive lookup structures from the raw
//! edge list. All maps are value-ordered by first encounter so that a given
//! input always produces the same iteration order, and all of them live only
//! for the duration of one build call.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::models::{MemberId, Relationship};

/// Append a value to an insertion-ordered set backed by a `Vec`
///
/// Returns true when the value was not already present. Linear scans are
/// fine here: fan-out per member is family-scale, not dataset-scale.
fn push_unique(values: &mut Vec<MemberId>, value: &str) -> bool {
    if values.iter().any(|v| v == value) {
        return false;
    }
    values.push(value.to_string());
    true
}

/// Lookup structures derived from a relationship edge list
///
/// Duplicate edges collapse on insert, so every multimap has set semantics
/// while preserving first-encounter order. Edges may reference member ids
/// that do not resolve to any member; the index does not care.
#[derive(Debug, Default)]
pub struct RelationshipIndex {
    /// child id -> recorded parent ids
    child_to_parents: FxHashMap<MemberId, Vec<MemberId>>,
    /// parent id -> recorded child ids
    parent_to_children: FxHashMap<MemberId, Vec<MemberId>>,
    /// member id -> couple partner ids (symmetric, one-to-many)
    couples: FxHashMap<MemberId, Vec<MemberId>>,
    /// Number of distinct couples
    couple_count: usize,
}

impl RelationshipIndex {
    /// Build the index from a relationship edge list
    #[must_use]
    pub fn from_edges(relationships: &[Relationship]) -> Self {
        let mut child_to_parents: FxHashMap<MemberId, Vec<MemberId>> = FxHashMap::default();
        let mut parent_to_children: FxHashMap<MemberId, Vec<MemberId>> = FxHashMap::default();
        // First-encounter order of child ids, for deterministic couple inference
        let mut children_in_order: Vec<MemberId> = Vec::new();

        for relationship in relationships {
            let parents = child_to_parents
                .entry(relationship.child_id.clone())
                .or_insert_with(|| {
                    children_in_order.push(relationship.child_id.clone());
                    Vec::new()
                });
            push_unique(parents, &relationship.parent_id);

            let children = parent_to_children
                .entry(relationship.parent_id.clone())
                .or_default();
            push_unique(children, &relationship.child_id);
        }

        // Couples: every unordered pair drawn from a child's parent set. A
        // member can belong to several couples at once, so partners
        // accumulate rather than overwrite.
        let mut couples: FxHashMap<MemberId, Vec<MemberId>> = FxHashMap::default();
        let mut couple_count = 0;
        for child_id in &children_in_order {
            let parents = &child_to_parents[child_id];
            if parents.len() < 2 {
                continue;
            }
            for (first, second) in parents.iter().tuple_combinations() {
                if push_unique(couples.entry(first.clone()).or_default(), second) {
                    couple_count += 1;
                }
                push_unique(couples.entry(second.clone()).or_default(), first);
            }
        }

        Self {
            child_to_parents,
            parent_to_children,
            couples,
            couple_count,
        }
    }

    /// Recorded parents of a member, in first-encounter order
    #[must_use]
    pub fn parents_of(&self, member_id: &str) -> &[MemberId] {
        self.child_to_parents
            .get(member_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Recorded children of a member, in first-encounter order
    #[must_use]
    pub fn children_of(&self, member_id: &str) -> &[MemberId] {
        self.parent_to_children
            .get(member_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Couple partners of a member, in first-encounter order
    #[must_use]
    pub fn partners_of(&self, member_id: &str) -> &[MemberId] {
        self.couples
            .get(member_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the member appears as a child in any edge
    #[must_use]
    pub fn has_recorded_parent(&self, member_id: &str) -> bool {
        self.child_to_parents.contains_key(member_id)
    }

    /// Whether the member appears as a parent in any edge
    #[must_use]
    pub fn is_recorded_parent(&self, member_id: &str) -> bool {
        self.parent_to_children.contains_key(member_id)
    }

    /// Whether the member is touched by any edge at all
    #[must_use]
    pub fn is_connected(&self, member_id: &str) -> bool {
        self.has_recorded_parent(member_id) || self.is_recorded_parent(member_id)
    }

    /// Number of distinct inferred couples
    #[must_use]
    pub fn couple_count(&self) -> usize {
        self.couple_count
    }
}
