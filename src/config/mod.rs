//! Configuration for the genealogy builder.

/// Ordering applied to the child units of each family unit
///
/// The default preserves the order in which children were first encountered
/// in the relationship edge list. The index multimaps keep insertion order,
/// so this is deterministic for a given input, but it does follow edge
/// creation order rather than any attribute of the children themselves. The
/// other variants sort child units by their first parent's attributes for
/// rendering that is stable regardless of edge creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildOrder {
    /// First-encountered-edge order (insertion order of the indexes)
    #[default]
    EdgeOrder,
    /// Ascending birth year, members without one last
    BirthYear,
    /// Alphabetical by display name
    Name,
}

/// Configuration for family-tree construction
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Ordering of child units within each family unit
    pub child_order: ChildOrder,
    /// Log a warning for members that had relationship edges but could not
    /// be placed in any unit (placement conflicts)
    pub log_unplaced: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            child_order: ChildOrder::EdgeOrder,
            log_unplaced: true,
        }
    }
}
