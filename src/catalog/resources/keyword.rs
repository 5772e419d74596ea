//! Keyword resource.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogResource;

/// A free-form descriptive keyword attached to games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    /// The unique catalog identifier.
    pub id: i64,
    /// The keyword text.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// IDs of games tagged with this keyword.
    pub games: Vec<i64>,
}

impl CatalogResource for Keyword {
    const NAME: &'static str = "Keyword";
    const ENDPOINT: &'static str = "keywords";
}
