//! Person resource.
//!
//! People credited on games: developers, voice actors, designers.

use serde::{Deserialize, Serialize};

use crate::catalog::resources::common::Image;
use crate::catalog::CatalogResource;

/// A person in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    /// The unique catalog identifier.
    pub id: i64,
    /// Full name.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// Date of birth, Unix milliseconds.
    pub dob: i64,
    /// Gender code as reported by the upstream.
    pub gender: i32,
    /// Country code as reported by the upstream.
    pub country: i32,
    /// Portrait image.
    pub mug_shot: Option<Image>,
    /// Short biography.
    pub bio: String,
    /// Extended description.
    pub description: String,
    /// ID of the parent person record, if this is an alias.
    pub parent: i64,
    /// Personal homepage URL.
    pub homepage: String,
    /// Twitter handle or URL.
    pub twitter: String,
    /// Known aliases.
    pub nicknames: Vec<String>,
    /// IDs of games this person is credited on.
    pub games: Vec<i64>,
    /// IDs of characters this person voiced or portrayed.
    pub characters: Vec<i64>,
    /// IDs of games this person voice-acted in.
    pub voice_acted: Vec<i64>,
}

impl CatalogResource for Person {
    const NAME: &'static str = "Person";
    const ENDPOINT: &'static str = "persons";
}
