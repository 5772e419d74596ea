//! Collection resource.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogResource;

/// A game series (e.g., "The Legend of Zelda").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Collection {
    /// The unique catalog identifier.
    pub id: i64,
    /// The series name.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// IDs of games in the series.
    pub games: Vec<i64>,
}

impl CatalogResource for Collection {
    const NAME: &'static str = "Collection";
    const ENDPOINT: &'static str = "collections";
}
