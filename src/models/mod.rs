//! Domain models for the family-recipe-sharing application
//!
//! This module contains the row-level entity models fetched from the hosted
//! storage service. They are plain data carriers; the genealogy builder only
//! reads them and never mutates them.

// Re-export entity models
pub mod family;
pub mod member;
pub mod recipe;
pub mod relationship;

// Re-export commonly used types
pub use family::Family;
pub use member::{Member, MemberId};
pub use recipe::{Attribution, AttributionType, Difficulty, Recipe};
pub use relationship::Relationship;
