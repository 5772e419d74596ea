//! Platform resource.

use serde::{Deserialize, Serialize};

use crate::catalog::resources::common::Image;
use crate::catalog::CatalogResource;

/// A hardware or software platform games release on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Platform {
    /// The unique catalog identifier.
    pub id: i64,
    /// The platform's name.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// Platform logo.
    pub logo: Option<Image>,
    /// Manufacturer website URL.
    pub website: String,
    /// Short description.
    pub summary: String,
    /// Console generation number, where applicable.
    pub generation: i32,
    /// IDs of games released on this platform.
    pub games: Vec<i64>,
}

impl CatalogResource for Platform {
    const NAME: &'static str = "Platform";
    const ENDPOINT: &'static str = "platforms";
}
