#[cfg(test)]
mod tests {
    use heirloom::{ChildOrder, Member, Relationship, TreeConfig, build_family_tree};

    /// Create a test member
    fn member(id: &str, name: &str) -> Member {
        Member::new(id, "fam-1", name)
    }

    /// Create a test relationship edge
    fn edge(id: &str, parent_id: &str, child_id: &str) -> Relationship {
        Relationship::new(id, "fam-1", parent_id, child_id)
    }

    #[test]
    fn test_couple_with_shared_child() {
        let members = vec![
            member("1", "Alice"),
            member("2", "Bob"),
            member("3", "Cara"),
        ];
        let relationships = vec![edge("r1", "1", "3"), edge("r2", "2", "3")];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert_eq!(tree.units.len(), 1);
        assert!(tree.orphans.is_empty());

        let unit = &tree.units[0];
        assert_eq!(unit.id, "1-2");
        assert!(unit.is_couple());
        let parent_names: Vec<&str> = unit.parents.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(parent_names, ["Alice", "Bob"]);

        assert_eq!(unit.children.len(), 1);
        let child_unit = &unit.children[0];
        assert_eq!(child_unit.id, "3");
        assert_eq!(child_unit.parents[0].name, "Cara");
        assert!(child_unit.children.is_empty());

        assert_eq!(unit.member_ids(), ["1", "2", "3"]);
    }

    #[test]
    fn test_member_without_edges_is_orphan_only() {
        let members = vec![member("1", "Dan")];

        let tree = build_family_tree(&members, &[], &TreeConfig::default());

        assert!(tree.units.is_empty());
        assert_eq!(tree.orphans.len(), 1);
        assert_eq!(tree.orphans[0].name, "Dan");
        assert_eq!(tree.statistics.orphan_count, 1);
        assert_eq!(tree.statistics.placed_count, 0);
    }

    #[test]
    fn test_no_duplication_across_forest() {
        // E is both a child of the roots and a grandchild through another
        // path; the placement set must keep it in one position.
        let members = vec![
            member("a", "A"),
            member("b", "B"),
            member("c", "C"),
            member("e", "E"),
        ];
        let relationships = vec![
            edge("r1", "a", "b"),
            edge("r2", "a", "e"),
            edge("r3", "b", "c"),
            edge("r4", "c", "e"),
        ];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        let mut placed = tree.placed_member_ids();
        let total = placed.len();
        placed.sort();
        placed.dedup();
        assert_eq!(placed.len(), total, "a member was placed twice");
        assert_eq!(tree.statistics.placed_count, total);
    }

    #[test]
    fn test_root_already_placed_as_partner_is_not_paired_again() {
        // P co-parents with C (a child of R) and with M (a root). Building
        // R's subtree places P as C's couple partner, so M must come out as
        // a single-parent root rather than re-emitting P in a second unit.
        let members = vec![
            member("r", "R"),
            member("c", "C"),
            member("p", "P"),
            member("m", "M"),
            member("x", "X"),
            member("y", "Y"),
        ];
        let relationships = vec![
            edge("r1", "r", "c"),
            edge("r2", "c", "y"),
            edge("r3", "p", "y"),
            edge("r4", "m", "x"),
            edge("r5", "p", "x"),
        ];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert_eq!(tree.units.len(), 2);
        assert_eq!(tree.units[0].id, "r");
        assert_eq!(tree.units[0].children[0].id, "c-p");
        assert_eq!(tree.units[1].id, "m");
        assert!(tree.units[1].children.is_empty());

        let mut placed = tree.placed_member_ids();
        let total = placed.len();
        placed.sort();
        placed.dedup();
        assert_eq!(placed.len(), total, "a member was placed twice");
        assert_eq!(total, 6);
        assert_eq!(tree.statistics.placed_count, 6);
        assert!(tree.statistics.unplaced.is_empty());
    }

    #[test]
    fn test_cycle_terminates_with_non_empty_forest() {
        let members = vec![member("a", "A"), member("b", "B"), member("c", "C")];
        let relationships = vec![
            edge("r1", "a", "b"),
            edge("r2", "b", "c"),
            edge("r3", "c", "a"),
        ];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert!(!tree.is_empty());
        assert!(!tree.units.is_empty());
        assert!(tree.orphans.is_empty());
        // The cycle breaks at the first member: a chain A -> B -> C
        let unit = &tree.units[0];
        assert_eq!(unit.id, "a");
        assert_eq!(unit.children.len(), 1);
        assert_eq!(unit.children[0].id, "b");
        assert_eq!(unit.children[0].children[0].id, "c");
        assert!(unit.children[0].children[0].children.is_empty());
        assert_eq!(tree.statistics.placed_count, 3);
    }

    #[test]
    fn test_three_parents_place_child_once() {
        let members = vec![
            member("p1", "P1"),
            member("p2", "P2"),
            member("p3", "P3"),
            member("c", "C"),
        ];
        let relationships = vec![
            edge("r1", "p1", "c"),
            edge("r2", "p2", "c"),
            edge("r3", "p3", "c"),
        ];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        // P1+P2 form the first couple and claim C; P3 keeps its own root
        // unit without re-attaching C.
        assert_eq!(tree.units.len(), 2);
        assert_eq!(tree.units[0].id, "p1-p2");
        assert_eq!(tree.units[0].children.len(), 1);
        assert_eq!(tree.units[0].children[0].id, "c");
        assert_eq!(tree.units[1].id, "p3");
        assert!(tree.units[1].children.is_empty());
        assert_eq!(tree.statistics.couple_count, 3);

        let placed = tree.placed_member_ids();
        assert_eq!(placed.iter().filter(|id| id.as_str() == "c").count(), 1);
    }

    #[test]
    fn test_duplicate_and_self_edges_are_absorbed() {
        let members = vec![member("a", "A"), member("b", "B")];
        let relationships = vec![
            edge("r1", "a", "b"),
            edge("r2", "a", "b"),
            edge("r3", "a", "a"),
        ];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        // The self edge makes A its own child, so A is recovered by the
        // cycle pass rather than found as a root.
        assert_eq!(tree.units.len(), 1);
        assert_eq!(tree.units[0].id, "a");
        assert_eq!(tree.units[0].children.len(), 1);
        assert_eq!(tree.units[0].children[0].id, "b");
    }

    #[test]
    fn test_dangling_references_are_dropped_silently() {
        let members = vec![member("a", "A"), member("b", "B")];
        // "ghost" appears as a parent but resolves to no member
        let relationships = vec![edge("r1", "a", "b"), edge("r2", "ghost", "b")];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert_eq!(tree.units.len(), 1);
        assert_eq!(tree.units[0].id, "a");
        assert_eq!(tree.units[0].children.len(), 1);
        assert_eq!(tree.units[0].children[0].id, "b");
        assert!(tree.orphans.is_empty());
    }

    #[test]
    fn test_conflict_casualty_is_counted_not_orphaned() {
        // C's only recorded parent does not resolve, so C can never be
        // placed, but it is not an orphan either.
        let members = vec![member("c", "C")];
        let relationships = vec![edge("r1", "ghost", "c")];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert!(tree.units.is_empty());
        assert!(tree.orphans.is_empty());
        assert_eq!(tree.statistics.unplaced, vec!["c".to_string()]);
        assert_eq!(tree.statistics.unplaced_count(), 1);
    }

    #[test]
    fn test_idempotence() {
        let members = vec![
            member("1", "Alice"),
            member("2", "Bob"),
            member("3", "Cara"),
            member("4", "Dan"),
            member("5", "Eve"),
        ];
        let relationships = vec![
            edge("r1", "1", "3"),
            edge("r2", "2", "3"),
            edge("r3", "3", "5"),
            edge("r4", "4", "5"),
        ];

        let config = TreeConfig::default();
        let first = build_family_tree(&members, &relationships, &config);
        let second = build_family_tree(&members, &relationships, &config);

        assert_eq!(first, second);
    }

    #[test]
    fn test_root_couple_is_not_split_into_two_units() {
        // Both grandparents are roots; they must form one unit, not a
        // couple unit plus a separate single-parent unit.
        let members = vec![
            member("g1", "Margaret"),
            member("g2", "Henry"),
            member("k", "Alice"),
        ];
        let relationships = vec![edge("r1", "g1", "k"), edge("r2", "g2", "k")];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert_eq!(tree.units.len(), 1);
        assert_eq!(tree.units[0].id, "g1-g2");
        assert_eq!(tree.statistics.root_unit_count, 1);
    }

    #[test]
    fn test_remarriage_creates_two_couples() {
        // B co-parents with A and with C; partner lists must support both.
        let members = vec![
            member("a", "A"),
            member("b", "B"),
            member("c", "C"),
            member("x", "X"),
            member("y", "Y"),
        ];
        let relationships = vec![
            edge("r1", "a", "x"),
            edge("r2", "b", "x"),
            edge("r3", "b", "y"),
            edge("r4", "c", "y"),
        ];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert_eq!(tree.statistics.couple_count, 2);
        // A pairs with B first; C keeps its own unit with Y
        assert_eq!(tree.units.len(), 2);
        assert_eq!(tree.units[0].id, "a-b");
        assert_eq!(tree.units[1].id, "c");

        let mut placed = tree.placed_member_ids();
        let total = placed.len();
        placed.sort();
        placed.dedup();
        assert_eq!(placed.len(), total);
        assert_eq!(total, 5);
    }

    #[test]
    fn test_unit_id_is_sorted_join() {
        let members = vec![member("zeta", "Z"), member("alpha", "A"), member("k", "K")];
        let relationships = vec![edge("r1", "zeta", "k"), edge("r2", "alpha", "k")];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert_eq!(tree.units.len(), 1);
        // Sorted regardless of which parent was encountered first
        assert_eq!(tree.units[0].id, "alpha-zeta");
    }

    #[test]
    fn test_child_order_follows_edges_by_default() {
        let members = vec![
            member("p", "P"),
            member("c1", "Young"),
            member("c2", "Old"),
        ];
        let relationships = vec![edge("r1", "p", "c1"), edge("r2", "p", "c2")];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        let ids: Vec<&str> = tree.units[0].children.iter().map(|u| u.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2"]);
    }

    #[test]
    fn test_child_order_by_birth_year() {
        let members = vec![
            member("p", "P"),
            member("c1", "Young").with_birth_year(1995),
            member("c2", "Old").with_birth_year(1990),
            member("c3", "Unknown"),
        ];
        let relationships = vec![
            edge("r1", "p", "c1"),
            edge("r2", "p", "c2"),
            edge("r3", "p", "c3"),
        ];
        let config = TreeConfig {
            child_order: ChildOrder::BirthYear,
            ..TreeConfig::default()
        };

        let tree = build_family_tree(&members, &relationships, &config);

        let ids: Vec<&str> = tree.units[0].children.iter().map(|u| u.id.as_str()).collect();
        // Oldest first, missing birth year last
        assert_eq!(ids, ["c2", "c1", "c3"]);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let members = vec![member("1", "Alice"), member("2", "Bob")];
        let relationships = vec![edge("r1", "1", "2")];
        let members_before = members.clone();
        let relationships_before = relationships.clone();

        let _ = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert_eq!(members, members_before);
        assert_eq!(relationships, relationships_before);
    }

    fn member_with_year(id: &str, name: &str, year: i32) -> Member {
        member(id, name).with_birth_year(year)
    }

    #[test]
    fn test_three_generations() {
        let members = vec![
            member_with_year("g1", "Margaret", 1938),
            member_with_year("g2", "Henry", 1935),
            member_with_year("a", "Alice", 1962),
            member_with_year("b", "Bob", 1960),
            member_with_year("c", "Cara", 1990),
            member_with_year("f", "Frank", 1965),
        ];
        let relationships = vec![
            edge("r1", "g1", "a"),
            edge("r2", "g2", "a"),
            edge("r3", "g1", "f"),
            edge("r4", "g2", "f"),
            edge("r5", "a", "c"),
            edge("r6", "b", "c"),
        ];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

        assert_eq!(tree.units.len(), 1);
        let grandparents = &tree.units[0];
        assert_eq!(grandparents.id, "g1-g2");
        assert_eq!(grandparents.children.len(), 2);

        // Alice descends as a couple with Bob even though Bob is a root
        // candidate himself; he must not reappear as a separate root.
        let alice_unit = &grandparents.children[0];
        assert_eq!(alice_unit.id, "a-b");
        assert_eq!(alice_unit.children.len(), 1);
        assert_eq!(alice_unit.children[0].id, "c");

        let frank_unit = &grandparents.children[1];
        assert_eq!(frank_unit.id, "f");

        assert_eq!(tree.statistics.placed_count, 6);
        assert_eq!(tree.statistics.unit_count, 4);
        assert!(tree.statistics.unplaced.is_empty());
    }

    #[test]
    fn test_statistics_summary() {
        let members = vec![member("1", "Alice"), member("2", "Bob")];
        let relationships = vec![edge("r1", "1", "2")];

        let tree = build_family_tree(&members, &relationships, &TreeConfig::default());
        let summary = tree.statistics.summary();

        assert!(summary.contains("Members: 2"));
        assert!(summary.contains("Root Units: 1"));
        assert!(summary.contains("Placed Members: 2"));
        assert!(!summary.contains("Unplaced"));
    }
}
