//! Per-resource schema types.
//!
//! Each type is a plain attribute record with serde field tags, decodable
//! from the upstream's JSON array shape. Because callers can narrow
//! responses with field selection, every struct is `#[serde(default)]`:
//! absent attributes decode to their zero values, and unknown attributes
//! are ignored.
//!
//! Timestamps (`created_at`, `updated_at`, release dates) are Unix time in
//! milliseconds, exactly as the upstream reports them.

mod age_rating;
mod character;
mod collection;
mod common;
mod company;
mod franchise;
mod game;
mod genre;
mod keyword;
mod person;
mod platform;
mod theme;

pub use age_rating::AgeRating;
pub use character::Character;
pub use collection::Collection;
pub use common::{Image, Video};
pub use company::Company;
pub use franchise::Franchise;
pub use game::Game;
pub use genre::Genre;
pub use keyword::Keyword;
pub use person::Person;
pub use platform::Platform;
pub use theme::Theme;
