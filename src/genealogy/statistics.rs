//! Build statistics and summaries
//!
//! Counts gathered while constructing a family tree, including the members
//! that had relationship edges but could not be placed anywhere (placement
//! conflicts). Those members are neither rendered nor orphans, so surfacing
//! them here is the only way a caller can notice them.

use serde::Serialize;

use crate::models::MemberId;

/// Counts describing one constructed family tree
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TreeStatistics {
    /// Total number of members in the input
    pub member_count: usize,
    /// Number of root family units
    pub root_unit_count: usize,
    /// Total number of family units, nested units included
    pub unit_count: usize,
    /// Number of distinct inferred couples
    pub couple_count: usize,
    /// Number of members placed somewhere in the forest
    pub placed_count: usize,
    /// Number of members touched by no edge at all
    pub orphan_count: usize,
    /// Members touched by edges but placed nowhere (placement conflicts)
    pub unplaced: Vec<MemberId>,
}

impl TreeStatistics {
    /// Number of members lost to placement conflicts
    #[must_use]
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Generate a human-readable summary of the build
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Family Tree Summary:\n");
        summary.push_str(&format!("  Members: {}\n", self.member_count));
        summary.push_str(&format!("  Root Units: {}\n", self.root_unit_count));
        summary.push_str(&format!("  Total Units: {}\n", self.unit_count));
        summary.push_str(&format!("  Couples: {}\n", self.couple_count));
        summary.push_str(&format!("  Placed Members: {}\n", self.placed_count));
        summary.push_str(&format!("  Unconnected Members: {}\n", self.orphan_count));
        if !self.unplaced.is_empty() {
            summary.push_str(&format!(
                "  Unplaced (conflicts): {} [{}]\n",
                self.unplaced.len(),
                self.unplaced.join(", ")
            ));
        }
        summary
    }
}
