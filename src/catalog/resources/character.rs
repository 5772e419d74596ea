//! Character resource.

use serde::{Deserialize, Serialize};

use crate::catalog::resources::common::Image;
use crate::catalog::CatalogResource;

/// A fictional character appearing in catalog games.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    /// The unique catalog identifier.
    pub id: i64,
    /// The character's name.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// Portrait image.
    pub mug_shot: Option<Image>,
    /// Gender code as reported by the upstream.
    pub gender: i32,
    /// Species code as reported by the upstream.
    pub species: i32,
    /// Also-known-as names.
    pub akas: Vec<String>,
    /// IDs of games the character appears in.
    pub games: Vec<i64>,
    /// IDs of people who portrayed or voiced the character.
    pub people: Vec<i64>,
}

impl CatalogResource for Character {
    const NAME: &'static str = "Character";
    const ENDPOINT: &'static str = "characters";
}
