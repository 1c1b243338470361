//! Recipe and attribution entity models
//!
//! Recipes carry the family history side of the application: each recipe can
//! be attributed to the member who created it or taught it to the person who
//! wrote it down. The genealogy views use attributions to show a per-member
//! recipe count next to each node in the tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::member::MemberId;

/// Difficulty rating of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// How a recipe is linked to a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributionType {
    /// The member originated the recipe
    CreatedBy,
    /// The recipe was learned from the member
    LearnedFrom,
}

/// A family recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: String,
    /// Family group this recipe belongs to
    pub family_id: String,
    /// Recipe title
    pub title: String,
    /// Short description
    #[serde(default)]
    pub description: Option<String>,
    /// The story of where the recipe came from
    #[serde(default)]
    pub origin_story: Option<String>,
    /// Approximate year the recipe entered the family
    #[serde(default)]
    pub origin_year: Option<i32>,
    /// Where the recipe came from
    #[serde(default)]
    pub origin_location: Option<String>,
    /// Preparation time in minutes
    #[serde(default)]
    pub prep_time: Option<u32>,
    /// Cooking time in minutes
    #[serde(default)]
    pub cook_time: Option<u32>,
    /// Number of servings
    #[serde(default)]
    pub servings: Option<u32>,
    /// Difficulty rating
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    /// Account that created the recipe
    #[serde(default)]
    pub created_by: Option<String>,
    /// Row creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Create a new recipe with the minimum required information
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        family_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            family_id: family_id.into(),
            title: title.into(),
            description: None,
            origin_story: None,
            origin_year: None,
            origin_location: None,
            prep_time: None,
            cook_time: None,
            servings: None,
            difficulty: None,
            created_by: None,
            created_at: None,
        }
    }

    /// Total prep plus cook time in minutes, when both are known
    #[must_use]
    pub fn total_time(&self) -> Option<u32> {
        match (self.prep_time, self.cook_time) {
            (Some(prep), Some(cook)) => Some(prep + cook),
            _ => None,
        }
    }
}

/// A link from a recipe to the member credited with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribution {
    /// Unique attribution identifier
    pub id: String,
    /// Recipe being attributed
    pub recipe_id: String,
    /// Member the recipe is credited to
    pub family_member_id: MemberId,
    /// Kind of credit
    pub attribution_type: AttributionType,
    /// Year the recipe was learned, for learned-from attributions
    #[serde(default)]
    pub year_learned: Option<i32>,
}

impl Attribution {
    /// Create a new attribution
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        recipe_id: impl Into<String>,
        family_member_id: impl Into<MemberId>,
        attribution_type: AttributionType,
    ) -> Self {
        Self {
            id: id.into(),
            recipe_id: recipe_id.into(),
            family_member_id: family_member_id.into(),
            attribution_type,
            year_learned: None,
        }
    }
}
