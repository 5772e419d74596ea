//! Genre resource.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogResource;

/// A gameplay genre (e.g., "Platform", "Role-playing").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    /// The unique catalog identifier.
    pub id: i64,
    /// The genre's name.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// IDs of games tagged with this genre.
    pub games: Vec<i64>,
}

impl CatalogResource for Genre {
    const NAME: &'static str = "Genre";
    const ENDPOINT: &'static str = "genres";
}
