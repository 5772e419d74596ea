//! Age rating resource.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogResource;

/// A regional age rating assigned to a game (ESRB, PEGI, and similar
/// rating boards).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeRating {
    /// The unique catalog identifier.
    pub id: i64,
    /// The rating board's display name for the rating.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Rating board code as reported by the upstream.
    pub category: i32,
    /// Board-specific rating code.
    pub rating: i32,
    /// Why the rating was assigned.
    pub synopsis: String,
    /// URL of the rating badge image.
    pub rating_cover_url: String,
    /// IDs of content descriptors attached to this rating.
    pub content_descriptions: Vec<i64>,
}

impl CatalogResource for AgeRating {
    const NAME: &'static str = "AgeRating";
    const ENDPOINT: &'static str = "age_ratings";
}
