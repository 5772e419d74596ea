//! Catalog resource types and the generic accessor pattern.
//!
//! [`CatalogResource`] implements Get / List / Index / Search / Count /
//! Fields once; the types under [`resources`] instantiate it per entity
//! type by declaring an endpoint path.

mod resource;
pub mod resources;

pub use resource::CatalogResource;
pub use resources::{
    AgeRating, Character, Collection, Company, Franchise, Game, Genre, Image, Keyword, Person,
    Platform, Theme, Video,
};
