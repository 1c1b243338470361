//! Storage collaborator boundary
//!
//! The application persists families, members, relationship edges, and
//! recipes in a hosted relational service. The domain core only consumes
//! that service through the small query interface defined here; how rows are
//! actually stored, authenticated, and transported is not its concern.
//!
//! Fetches are asynchronous. Blocking wrappers are provided for callers that
//! are not running inside an async runtime; they reuse the current tokio
//! runtime when one exists and create a throwaway one otherwise.

pub mod memory;
pub mod snapshot;

use std::future::Future;
use std::pin::Pin;

use rustc_hash::FxHashMap;

use crate::error::Result;
use crate::models::{Attribution, Family, Member, MemberId, Recipe, Relationship};

pub use memory::InMemoryStore;
pub use snapshot::{FamilySnapshot, load_snapshot};

/// Boxed future returned by storage operations
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Run a storage future to completion from synchronous code
fn block_on<T>(future: StoreFuture<'_, T>) -> Result<T> {
    // Check if we're already in a tokio runtime
    if tokio::runtime::Handle::try_current().is_ok() {
        // We're already in a tokio runtime, use futures executor
        futures::executor::block_on(future)
    } else {
        // Create a blocking runtime to run the async code
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(future)
    }
}

/// Query and mutation interface consumed by the domain core
///
/// All reads are scoped to one family group. Implementations decide row
/// order; the genealogy builder only depends on whatever order a fetch
/// returns being stable for identical underlying data.
pub trait FamilyStore: Send + Sync {
    /// Fetch a family group by id
    fn fetch_family<'a>(&'a self, family_id: &'a str) -> StoreFuture<'a, Option<Family>>;

    /// Fetch all members of a family group
    fn fetch_members_async<'a>(&'a self, family_id: &'a str) -> StoreFuture<'a, Vec<Member>>;

    /// Fetch all parent/child relationship edges of a family group
    fn fetch_relationships_async<'a>(
        &'a self,
        family_id: &'a str,
    ) -> StoreFuture<'a, Vec<Relationship>>;

    /// Fetch all recipes of a family group
    fn fetch_recipes<'a>(&'a self, family_id: &'a str) -> StoreFuture<'a, Vec<Recipe>>;

    /// Fetch all recipe attributions of a family group
    fn fetch_attributions<'a>(&'a self, family_id: &'a str)
    -> StoreFuture<'a, Vec<Attribution>>;

    /// Add a member to a family group, returning the stored row
    fn add_member(&self, member: Member) -> StoreFuture<'_, Member>;

    /// Record a parent -> child relationship, returning the stored edge
    fn add_relationship<'a>(
        &'a self,
        family_id: &'a str,
        parent_id: &'a str,
        child_id: &'a str,
    ) -> StoreFuture<'a, Relationship>;

    /// Remove a relationship edge by id
    fn remove_relationship<'a>(&'a self, relationship_id: &'a str) -> StoreFuture<'a, ()>;

    /// Number of attributed recipes per member of a family group
    ///
    /// Derived from attributions; a recipe credited to a member through
    /// several attributions counts once per attribution row, matching what
    /// the tree view displays next to each node.
    fn member_recipe_counts<'a>(
        &'a self,
        family_id: &'a str,
    ) -> StoreFuture<'a, FxHashMap<MemberId, usize>> {
        Box::pin(async move {
            let attributions = self.fetch_attributions(family_id).await?;
            let mut counts: FxHashMap<MemberId, usize> = FxHashMap::default();
            for attribution in attributions {
                *counts.entry(attribution.family_member_id).or_insert(0) += 1;
            }
            Ok(counts)
        })
    }

    /// Fetch all members of a family group, blocking
    fn fetch_members(&self, family_id: &str) -> Result<Vec<Member>> {
        block_on(self.fetch_members_async(family_id))
    }

    /// Fetch all relationship edges of a family group, blocking
    fn fetch_relationships(&self, family_id: &str) -> Result<Vec<Relationship>> {
        block_on(self.fetch_relationships_async(family_id))
    }
}
