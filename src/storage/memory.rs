//! In-memory reference implementation of the storage boundary
//!
//! Backs the tests and the demo. Mutations perform the same validation the
//! hosted service enforces through constraints: edges stay inside one family
//! group, a member cannot be its own parent, and duplicate edges are
//! rejected. Invite codes are generated here because the storage layer owns
//! them.

use std::sync::{Mutex, MutexGuard};

use rand::Rng;

use super::snapshot::FamilySnapshot;
use super::{FamilyStore, StoreFuture};
use crate::error::{HeirloomError, Result};
use crate::models::{Attribution, Family, Member, Recipe, Relationship};

/// Length of generated invite codes
const INVITE_CODE_LEN: usize = 6;

#[derive(Debug, Default)]
struct Inner {
    families: Vec<Family>,
    members: Vec<Member>,
    relationships: Vec<Relationship>,
    recipes: Vec<Recipe>,
    attributions: Vec<Attribution>,
    next_id: u64,
}

impl Inner {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    fn has_family(&self, family_id: &str) -> bool {
        self.families.iter().any(|family| family.id == family_id)
    }

    fn has_member(&self, family_id: &str, member_id: &str) -> bool {
        self.members
            .iter()
            .any(|member| member.family_id == family_id && member.id == member_id)
    }
}

/// An in-memory family store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated from a snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: FamilySnapshot) -> Self {
        let inner = Inner {
            families: snapshot.family.into_iter().collect(),
            members: snapshot.members,
            relationships: snapshot.relationships,
            recipes: snapshot.recipes,
            attributions: snapshot.attributions,
            next_id: 0,
        };
        Self {
            inner: Mutex::new(inner),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| HeirloomError::storage("store lock poisoned"))
    }

    /// Create a family group with a generated id and invite code
    pub fn create_family(&self, name: &str, created_by: Option<&str>) -> Result<Family> {
        let mut inner = self.lock()?;
        let id = inner.next_id("fam");
        let mut family = Family::new(id, name, generate_invite_code());
        family.created_by = created_by.map(str::to_string);
        inner.families.push(family.clone());
        log::info!("Created family {} ({})", family.name, family.id);
        Ok(family)
    }

    /// Join a family group through its invite code, adding a member for the
    /// joining account
    pub fn join_family(
        &self,
        invite_code: &str,
        member_name: &str,
        user_id: &str,
    ) -> Result<Member> {
        let mut inner = self.lock()?;
        let family_id = inner
            .families
            .iter()
            .find(|family| family.invite_code == invite_code)
            .map(|family| family.id.clone())
            .ok_or_else(|| HeirloomError::invalid_input("unknown invite code"))?;

        let id = inner.next_id("mem");
        let member = Member::new(id, family_id, member_name).with_user(user_id);
        inner.members.push(member.clone());
        Ok(member)
    }

    /// Store a recipe row
    pub fn add_recipe(&self, recipe: Recipe) -> Result<Recipe> {
        let mut inner = self.lock()?;
        if !inner.has_family(&recipe.family_id) {
            return Err(HeirloomError::storage(format!(
                "unknown family: {}",
                recipe.family_id
            )));
        }
        inner.recipes.push(recipe.clone());
        Ok(recipe)
    }

    /// Store a recipe attribution row
    pub fn add_attribution(&self, attribution: Attribution) -> Result<Attribution> {
        let mut inner = self.lock()?;
        if !inner
            .recipes
            .iter()
            .any(|recipe| recipe.id == attribution.recipe_id)
        {
            return Err(HeirloomError::storage(format!(
                "unknown recipe: {}",
                attribution.recipe_id
            )));
        }
        inner.attributions.push(attribution.clone());
        Ok(attribution)
    }
}

impl FamilyStore for InMemoryStore {
    fn fetch_family<'a>(&'a self, family_id: &'a str) -> StoreFuture<'a, Option<Family>> {
        Box::pin(async move {
            let inner = self.lock()?;
            Ok(inner
                .families
                .iter()
                .find(|family| family.id == family_id)
                .cloned())
        })
    }

    fn fetch_members_async<'a>(&'a self, family_id: &'a str) -> StoreFuture<'a, Vec<Member>> {
        Box::pin(async move {
            let inner = self.lock()?;
            Ok(inner
                .members
                .iter()
                .filter(|member| member.family_id == family_id)
                .cloned()
                .collect())
        })
    }

    fn fetch_relationships_async<'a>(
        &'a self,
        family_id: &'a str,
    ) -> StoreFuture<'a, Vec<Relationship>> {
        Box::pin(async move {
            let inner = self.lock()?;
            Ok(inner
                .relationships
                .iter()
                .filter(|relationship| relationship.family_id == family_id)
                .cloned()
                .collect())
        })
    }

    fn fetch_recipes<'a>(&'a self, family_id: &'a str) -> StoreFuture<'a, Vec<Recipe>> {
        Box::pin(async move {
            let inner = self.lock()?;
            Ok(inner
                .recipes
                .iter()
                .filter(|recipe| recipe.family_id == family_id)
                .cloned()
                .collect())
        })
    }

    fn fetch_attributions<'a>(
        &'a self,
        family_id: &'a str,
    ) -> StoreFuture<'a, Vec<Attribution>> {
        Box::pin(async move {
            let inner = self.lock()?;
            let recipe_ids: Vec<&str> = inner
                .recipes
                .iter()
                .filter(|recipe| recipe.family_id == family_id)
                .map(|recipe| recipe.id.as_str())
                .collect();
            Ok(inner
                .attributions
                .iter()
                .filter(|attribution| recipe_ids.contains(&attribution.recipe_id.as_str()))
                .cloned()
                .collect())
        })
    }

    fn add_member(&self, member: Member) -> StoreFuture<'_, Member> {
        Box::pin(async move {
            let mut inner = self.lock()?;
            if !inner.has_family(&member.family_id) {
                return Err(HeirloomError::storage(format!(
                    "unknown family: {}",
                    member.family_id
                )));
            }
            let mut member = member;
            if member.id.is_empty() {
                member.id = inner.next_id("mem");
            }
            inner.members.push(member.clone());
            Ok(member)
        })
    }

    fn add_relationship<'a>(
        &'a self,
        family_id: &'a str,
        parent_id: &'a str,
        child_id: &'a str,
    ) -> StoreFuture<'a, Relationship> {
        Box::pin(async move {
            if parent_id == child_id {
                return Err(HeirloomError::invalid_input(
                    "parent and child cannot be the same member",
                ));
            }

            let mut inner = self.lock()?;
            if !inner.has_family(family_id) {
                return Err(HeirloomError::storage(format!("unknown family: {family_id}")));
            }
            if !inner.has_member(family_id, parent_id) || !inner.has_member(family_id, child_id) {
                return Err(HeirloomError::invalid_input(
                    "both members must belong to the family",
                ));
            }
            let exists = inner.relationships.iter().any(|relationship| {
                relationship.family_id == family_id
                    && relationship.parent_id == parent_id
                    && relationship.child_id == child_id
            });
            if exists {
                return Err(HeirloomError::invalid_input("relationship already exists"));
            }

            let id = inner.next_id("rel");
            let relationship = Relationship::new(id, family_id, parent_id, child_id);
            inner.relationships.push(relationship.clone());
            Ok(relationship)
        })
    }

    fn remove_relationship<'a>(&'a self, relationship_id: &'a str) -> StoreFuture<'a, ()> {
        Box::pin(async move {
            let mut inner = self.lock()?;
            let before = inner.relationships.len();
            inner
                .relationships
                .retain(|relationship| relationship.id != relationship_id);
            if inner.relationships.len() == before {
                return Err(HeirloomError::storage(format!(
                    "unknown relationship: {relationship_id}"
                )));
            }
            Ok(())
        })
    }
}

/// Generate an uppercase alphanumeric invite code
fn generate_invite_code() -> String {
    rand::rng()
        .sample_iter(rand::distr::Alphanumeric)
        .take(INVITE_CODE_LEN)
        .map(char::from)
        .collect::<String>()
        .to_uppercase()
}
