//! Game resource.
//!
//! The central catalog entity. Most other resources reference games by ID
//! through their `games` attribute.
//!
//! # Example
//!
//! ```rust,ignore
//! use gamedb_api::catalog::{CatalogResource, Game};
//! use gamedb_api::{Direction, Operator, Opt};
//!
//! // Highest-rated recent games, name and rating only
//! let games = Game::index(&client, &[
//!     Opt::fields(["name", "rating"]),
//!     Opt::filter("rating", Operator::GreaterThan, "80"),
//!     Opt::order("rating", Direction::Descending),
//!     Opt::limit(10),
//! ]).await?;
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::resources::common::{Image, Video};
use crate::catalog::CatalogResource;

/// A video game in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Game {
    /// The unique catalog identifier.
    pub id: i64,
    /// The game's title.
    pub name: String,
    /// URL-safe name.
    pub slug: String,
    /// Canonical catalog page URL.
    pub url: String,
    /// Creation time, Unix milliseconds.
    pub created_at: i64,
    /// Last update time, Unix milliseconds.
    pub updated_at: i64,
    /// Short description.
    pub summary: String,
    /// Extended plot description.
    pub storyline: String,
    /// Member user rating, 0-100.
    pub rating: f64,
    /// Number of member ratings.
    pub rating_count: i32,
    /// Aggregated external-critic rating, 0-100.
    pub aggregated_rating: f64,
    /// Relative popularity score.
    pub popularity: f64,
    /// ID of the collection (series) this game belongs to.
    pub collection: i64,
    /// ID of the franchise this game belongs to.
    pub franchise: i64,
    /// First release date, Unix milliseconds.
    pub first_release_date: i64,
    /// IDs of developing companies.
    pub developers: Vec<i64>,
    /// IDs of publishing companies.
    pub publishers: Vec<i64>,
    /// Genre IDs.
    pub genres: Vec<i64>,
    /// Theme IDs.
    pub themes: Vec<i64>,
    /// Platform IDs the game released on.
    pub platforms: Vec<i64>,
    /// Keyword IDs.
    pub keywords: Vec<i64>,
    /// Cover art.
    pub cover: Option<Image>,
    /// Screenshot gallery.
    pub screenshots: Vec<Image>,
    /// Attached videos.
    pub videos: Vec<Video>,
}

impl CatalogResource for Game {
    const NAME: &'static str = "Game";
    const ENDPOINT: &'static str = "games";
}
