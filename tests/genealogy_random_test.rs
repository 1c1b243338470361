#[cfg(test)]
mod tests {
    use heirloom::{Member, Relationship, TreeConfig, build_family_tree};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Generate a random member/edge set, including self edges, duplicate
    /// edges, and references to ids outside the member list
    fn random_input(rng: &mut StdRng, member_count: usize, edge_count: usize) -> (Vec<Member>, Vec<Relationship>) {
        let members: Vec<Member> = (0..member_count)
            .map(|i| Member::new(format!("m{i}"), "fam-1", format!("Member {i}")))
            .collect();

        let relationships: Vec<Relationship> = (0..edge_count)
            .map(|i| {
                // Ids range past the member count so some references dangle
                let parent = rng.random_range(0..member_count + 3);
                let child = rng.random_range(0..member_count + 3);
                Relationship::new(
                    format!("r{i}"),
                    "fam-1",
                    format!("m{parent}"),
                    format!("m{child}"),
                )
            })
            .collect();

        (members, relationships)
    }

    #[test]
    fn test_random_graphs_never_duplicate_members() {
        let mut rng = StdRng::seed_from_u64(42);

        for round in 0..200 {
            let member_count = rng.random_range(1..20);
            let edge_count = rng.random_range(0..40);
            let (members, relationships) = random_input(&mut rng, member_count, edge_count);

            let tree = build_family_tree(&members, &relationships, &TreeConfig::default());

            let mut placed = tree.placed_member_ids();
            let total = placed.len();
            placed.sort();
            placed.dedup();
            assert_eq!(
                placed.len(),
                total,
                "round {round}: a member appeared twice in the forest"
            );

            // Orphans and placed members never overlap
            for orphan in &tree.orphans {
                assert!(
                    !placed.contains(&orphan.id),
                    "round {round}: orphan {} was also placed",
                    orphan.id
                );
            }

            // Every member is accounted for exactly once: placed, orphaned,
            // or recorded as a placement conflict
            assert_eq!(
                total + tree.orphans.len() + tree.statistics.unplaced.len(),
                members.len(),
                "round {round}: classification does not partition the members"
            );
        }
    }

    #[test]
    fn test_random_graphs_are_idempotent() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let member_count = rng.random_range(1..15);
            let edge_count = rng.random_range(0..30);
            let (members, relationships) = random_input(&mut rng, member_count, edge_count);

            let config = TreeConfig::default();
            let first = build_family_tree(&members, &relationships, &config);
            let second = build_family_tree(&members, &relationships, &config);

            assert_eq!(first, second);
        }
    }
}
