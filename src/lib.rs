//! # GameDB API Rust SDK
//!
//! A Rust SDK for the GameDB video-game catalog API, providing type-safe
//! configuration, a small query language for request construction, and a
//! uniform accessor surface across every catalog resource type.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`Config`] and [`ConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - A query builder ([`Opt`], [`Query`]) compiling field selection,
//!   filters, sorting, pagination, and search into URL query strings
//! - A generic accessor trait ([`catalog::CatalogResource`]) giving every
//!   resource type `get`, `list`, `index`, `search`, `count`, and `fields`
//! - A closed error taxonomy ([`Error`]) callers branch on by variant
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gamedb_api::{ApiKey, Client, Config, Opt, Operator};
//! use gamedb_api::catalog::{CatalogResource, Game};
//!
//! let config = Config::builder()
//!     .api_key(ApiKey::new("your-api-key")?)
//!     .build()?;
//! let client = Client::new(&config);
//!
//! // Single lookup, narrowed to one field
//! let game = Game::get(&client, 9644, &[Opt::fields(["name"])]).await?;
//!
//! // Filtered listing
//! let hits = Game::index(&client, &[
//!     Opt::filter("rating", Operator::GreaterThan, "90"),
//!     Opt::limit(10),
//! ]).await?;
//!
//! // Full-text search
//! let results = Game::search(&client, "zelda", &[]).await?;
//! ```
//!
//! ## Error Handling
//!
//! All accessors return `Result<_, Error>`. Input that is locally known to
//! be invalid (negative IDs, empty ID sets, out-of-range options) fails
//! before any network request is issued:
//!
//! ```rust,ignore
//! use gamedb_api::Error;
//!
//! match Game::get(&client, -1, &[]).await {
//!     Err(Error::NegativeId) => { /* no round trip happened */ }
//!     other => { /* ... */ }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: newtypes and options validate before dispatch
//! - **Thread-safe**: [`Client`] and [`Config`] are `Send + Sync`
//! - **One call, one request**: no retries, caching, or background tasks

pub mod catalog;
pub mod client;
pub mod config;
pub mod error;
pub mod query;

// Re-export public types at crate root for convenience
pub use catalog::CatalogResource;
pub use client::Client;
pub use config::{ApiKey, BaseUrl, Config, ConfigBuilder, DEFAULT_BASE_URL};
pub use error::{ConfigError, Error};
pub use query::{Direction, Operator, Opt, Query, MAX_LIMIT, MAX_OFFSET};
