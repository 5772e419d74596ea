//! Franchise resource.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogResource;

/// A commercial franchise spanning games and other media.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Franchise {
    /// The unique catalog identifier.
    pub id: i64,
    /// The franchise name.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// IDs of games in the franchise.
    pub games: Vec<i64>,
}

impl CatalogResource for Franchise {
    const NAME: &'static str = "Franchise";
    const ENDPOINT: &'static str = "franchises";
}
