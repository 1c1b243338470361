//! Recursive family-unit construction
//!
//! Phase two and three of tree construction: walk downward from root
//! ancestors, forming one unit per single parent or inferred couple, then
//! classify what is left over. One placement set per build call guarantees
//! every member lands in at most one position, which also bounds recursion
//! depth by the member count: a member is marked placed strictly before any
//! recursive call could revisit it, so cyclic edge data breaks at whichever
//! member is reached second.

use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::index::RelationshipIndex;
use super::statistics::TreeStatistics;
use super::unit::{FamilyTree, FamilyUnit};
use crate::config::{ChildOrder, TreeConfig};
use crate::models::{Member, Relationship};

/// Build a family tree from members and relationship edges
///
/// Pure and infallible: malformed edge data (dangling member references,
/// self-edges, duplicate edges, more than two recorded parents, cycles) is
/// absorbed, never reported as an error. Members referenced by an edge but
/// missing from `members` are dropped silently. Members unique by id is a
/// precondition owned by the caller.
#[must_use]
pub fn build_family_tree(
    members: &[Member],
    relationships: &[Relationship],
    config: &TreeConfig,
) -> FamilyTree {
    let index = RelationshipIndex::from_edges(relationships);
    let lookup = Member::create_lookup(members);

    let mut builder = UnitBuilder {
        index: &index,
        lookup: &lookup,
        config,
        placed: FxHashSet::default(),
    };

    // Root candidates never appear as a child in any edge, and must appear
    // as a parent in at least one: an entirely unconnected member is an
    // orphan, not a trivial root.
    let mut units: Vec<FamilyUnit> = Vec::new();
    let mut processed_roots: FxHashSet<&str> = FxHashSet::default();

    for member in members {
        let id = member.id.as_str();
        if index.has_recorded_parent(id) || !index.is_recorded_parent(id) {
            continue;
        }
        if processed_roots.contains(id) || builder.placed.contains(id) {
            continue;
        }

        // Pair the root with a couple partner that is itself a root and not
        // already placed inside an earlier root's subtree, so the partner is
        // never re-emitted in a second position.
        let partner = index.partners_of(id).iter().find(|partner_id| {
            lookup.contains_key(partner_id.as_str())
                && !index.has_recorded_parent(partner_id.as_str())
                && !processed_roots.contains(partner_id.as_str())
                && !builder.placed.contains(partner_id.as_str())
        });

        processed_roots.insert(id);
        let parent_ids: SmallVec<[&str; 2]> = match partner {
            Some(partner_id) => {
                processed_roots.insert(partner_id.as_str());
                SmallVec::from_slice(&[id, partner_id.as_str()])
            }
            None => SmallVec::from_slice(&[id]),
        };
        units.push(builder.build_unit(&parent_ids));
    }

    // Cyclic ancestry has no root candidate at all. Break each remaining
    // cycle at its first-encountered member so the component still renders;
    // the placement set keeps the walk from looping.
    for member in members {
        let id = member.id.as_str();
        if builder.placed.contains(id) || !index.is_recorded_parent(id) {
            continue;
        }
        let partner = index.partners_of(id).iter().find(|partner_id| {
            lookup.contains_key(partner_id.as_str())
                && !builder.placed.contains(partner_id.as_str())
        });
        let parent_ids: SmallVec<[&str; 2]> = match partner {
            Some(partner_id) => SmallVec::from_slice(&[id, partner_id.as_str()]),
            None => SmallVec::from_slice(&[id]),
        };
        units.push(builder.build_unit(&parent_ids));
    }
    sort_units(&mut units, config.child_order);

    // Orphans are judged on the raw edge list, not the placement set: a
    // member that had edges but lost a placement conflict is not an orphan.
    let orphans: Vec<Member> = members
        .iter()
        .filter(|member| !index.is_connected(&member.id))
        .cloned()
        .collect();

    let unplaced: Vec<_> = members
        .iter()
        .filter(|member| {
            index.is_connected(&member.id) && !builder.placed.contains(member.id.as_str())
        })
        .map(|member| member.id.clone())
        .collect();
    if config.log_unplaced && !unplaced.is_empty() {
        warn!(
            "{} member(s) had relationship edges but could not be placed: {}",
            unplaced.len(),
            unplaced.join(", ")
        );
    }

    let statistics = TreeStatistics {
        member_count: members.len(),
        root_unit_count: units.len(),
        unit_count: units.iter().map(FamilyUnit::unit_count).sum(),
        couple_count: index.couple_count(),
        // The placement set may hold dangling child ids; count members only
        placed_count: members
            .iter()
            .filter(|member| builder.placed.contains(member.id.as_str()))
            .count(),
        orphan_count: orphans.len(),
        unplaced,
    };
    debug!(
        "Built family tree: {} root unit(s), {} orphan(s)",
        statistics.root_unit_count, statistics.orphan_count
    );

    FamilyTree {
        units,
        orphans,
        statistics,
    }
}

/// Working state for one build call
struct UnitBuilder<'a> {
    index: &'a RelationshipIndex,
    lookup: &'a FxHashMap<&'a str, &'a Member>,
    config: &'a TreeConfig,
    /// Members already incorporated somewhere in the forest
    placed: FxHashSet<&'a str>,
}

impl<'a> UnitBuilder<'a> {
    /// Build the unit for a set of parent ids and recurse into descendants
    fn build_unit(&mut self, parent_ids: &[&'a str]) -> FamilyUnit {
        // Ids that do not resolve to a member are dropped silently
        let parents: Vec<Member> = parent_ids
            .iter()
            .filter_map(|id| self.lookup.get(id).map(|member| (*member).clone()))
            .collect();

        // Union of children across all parents, first-encounter order
        let mut child_ids: Vec<&'a str> = Vec::new();
        for parent_id in parent_ids {
            for child_id in self.index.children_of(parent_id) {
                if !child_ids.contains(&child_id.as_str()) {
                    child_ids.push(child_id.as_str());
                }
            }
        }
        // Guard: keep only children with at least one of these parents
        // recorded. Always true for a union over the index today, but the
        // union step is the part most likely to be loosened later.
        child_ids.retain(|child_id| {
            self.index
                .parents_of(child_id)
                .iter()
                .any(|parent_id| parent_ids.contains(&parent_id.as_str()))
        });

        for &parent_id in parent_ids {
            self.placed.insert(parent_id);
        }

        let mut children: Vec<FamilyUnit> = Vec::new();
        let mut processed: FxHashSet<&str> = FxHashSet::default();
        for child_id in child_ids {
            if processed.contains(child_id) || self.placed.contains(child_id) {
                continue;
            }
            processed.insert(child_id);
            self.placed.insert(child_id);

            if !self.lookup.contains_key(child_id) {
                continue;
            }

            // Descend as a couple when the child has an unplaced partner
            let partner = self.index.partners_of(child_id).iter().find(|partner_id| {
                self.lookup.contains_key(partner_id.as_str())
                    && !self.placed.contains(partner_id.as_str())
            });
            let next: SmallVec<[&str; 2]> = match partner {
                Some(partner_id) => SmallVec::from_slice(&[child_id, partner_id.as_str()]),
                None => SmallVec::from_slice(&[child_id]),
            };
            children.push(self.build_unit(&next));
        }
        sort_units(&mut children, self.config.child_order);

        FamilyUnit {
            id: FamilyUnit::unit_id(parent_ids),
            parents,
            children,
        }
    }
}

/// Apply the configured ordering to a list of sibling units
fn sort_units(units: &mut [FamilyUnit], order: ChildOrder) {
    match order {
        ChildOrder::EdgeOrder => {}
        ChildOrder::BirthYear => {
            // Units without a birth year sort last; unit id breaks ties
            units.sort_by(|a, b| {
                let key = |unit: &FamilyUnit| {
                    let year = unit.parents.first().and_then(|parent| parent.birth_year);
                    (year.is_none(), year)
                };
                key(a).cmp(&key(b)).then_with(|| a.id.cmp(&b.id))
            });
        }
        ChildOrder::Name => {
            units.sort_by(|a, b| {
                let name = |unit: &FamilyUnit| {
                    unit.parents
                        .first()
                        .map(|parent| parent.name.clone())
                        .unwrap_or_default()
                };
                name(a).cmp(&name(b)).then_with(|| a.id.cmp(&b.id))
            });
        }
    }
}
