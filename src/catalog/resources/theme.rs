//! Theme resource.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogResource;

/// A narrative or aesthetic theme (e.g., "Horror", "Open world").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// The unique catalog identifier.
    pub id: i64,
    /// The theme's name.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// IDs of games tagged with this theme.
    pub games: Vec<i64>,
}

impl CatalogResource for Theme {
    const NAME: &'static str = "Theme";
    const ENDPOINT: &'static str = "themes";
}
