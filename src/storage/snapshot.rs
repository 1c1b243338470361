//! JSON snapshot loading
//!
//! A snapshot is one family group's rows serialized as a single JSON
//! document: the family itself plus its members, relationship edges,
//! recipes, and attributions. Snapshots back offline fixtures and the demo;
//! the hosted service returns the same row shapes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::TreeConfig;
use crate::error::{HeirloomError, Result};
use crate::genealogy::{FamilyTree, build_family_tree};
use crate::models::{Attribution, Family, Member, Recipe, Relationship};

/// One family group's rows, fetched or loaded as a unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilySnapshot {
    /// The family group row, when the snapshot carries one
    #[serde(default)]
    pub family: Option<Family>,
    /// All members of the group
    pub members: Vec<Member>,
    /// All parent/child edges of the group
    pub relationships: Vec<Relationship>,
    /// All recipes of the group
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    /// All recipe attributions of the group
    #[serde(default)]
    pub attributions: Vec<Attribution>,
}

impl FamilySnapshot {
    /// Build the family tree for this snapshot
    #[must_use]
    pub fn build_tree(&self, config: &TreeConfig) -> FamilyTree {
        build_family_tree(&self.members, &self.relationships, config)
    }
}

/// Load a family snapshot from a JSON file
pub fn load_snapshot(path: &Path) -> Result<FamilySnapshot> {
    if !path.exists() {
        return Err(HeirloomError::storage(format!(
            "snapshot file not found: {}",
            path.display()
        )));
    }

    log::info!("Loading family snapshot from {}", path.display());
    let contents = fs::read_to_string(path)?;
    let snapshot: FamilySnapshot = serde_json::from_str(&contents)?;
    log::info!(
        "Loaded snapshot: {} member(s), {} relationship(s), {} recipe(s)",
        snapshot.members.len(),
        snapshot.relationships.len(),
        snapshot.recipes.len()
    );
    Ok(snapshot)
}
