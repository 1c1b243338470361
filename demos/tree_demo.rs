//! End-to-end demo: load a family snapshot from JSON, build the family
//! tree, and print it with per-member recipe counts.
//!
//! Run with `cargo run --example tree [path/to/snapshot.json]`.

use std::path::Path;

use rustc_hash::FxHashMap;

use heirloom::{FamilyStore, FamilyUnit, InMemoryStore, TreeConfig, load_snapshot};

#[tokio::main]
async fn main() -> heirloom::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/linden_family.json".to_string());
    let snapshot = load_snapshot(Path::new(&path))?;

    let family_id = snapshot
        .family
        .as_ref()
        .map(|family| family.id.clone())
        .or_else(|| snapshot.members.first().map(|member| member.family_id.clone()))
        .unwrap_or_default();

    let store = InMemoryStore::from_snapshot(snapshot);
    let members = store.fetch_members_async(&family_id).await?;
    let relationships = store.fetch_relationships_async(&family_id).await?;
    let recipe_counts = store.member_recipe_counts(&family_id).await?;

    let tree = heirloom::build_family_tree(&members, &relationships, &TreeConfig::default());

    println!("{}", tree.statistics.summary());
    for unit in &tree.units {
        print_unit(unit, &recipe_counts, 0);
    }
    if !tree.orphans.is_empty() {
        println!("\nNot yet connected:");
        for member in &tree.orphans {
            println!("  {}", member.name);
        }
    }

    Ok(())
}

fn print_unit(unit: &FamilyUnit, recipe_counts: &FxHashMap<String, usize>, depth: usize) {
    let indent = "  ".repeat(depth);
    let parents: Vec<String> = unit
        .parents
        .iter()
        .map(|member| {
            let mut label = member.name.clone();
            if let Some(year) = member.birth_year {
                label.push_str(&format!(" (b. {year})"));
            }
            if let Some(count) = recipe_counts.get(&member.id) {
                label.push_str(&format!(" [{count} recipe(s)]"));
            }
            label
        })
        .collect();
    println!("{indent}{}", parents.join(" + "));
    for child in &unit.children {
        print_unit(child, recipe_counts, depth + 1);
    }
}
