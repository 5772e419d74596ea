//! Request options and the query builder.
//!
//! Every catalog accessor accepts zero or more [`Opt`] values. They are
//! folded into a [`Query`] which validates range constraints locally and
//! serializes to the upstream's query-string vocabulary:
//!
//! | option | wire form |
//! |---|---|
//! | [`Opt::Fields`] | `fields=name,slug` |
//! | [`Opt::Filter`] | `filter[rating][gt]=75` |
//! | [`Opt::Order`] | `order=rating:desc` |
//! | [`Opt::Limit`] | `limit=20` |
//! | [`Opt::Offset`] | `offset=40` |
//! | [`Opt::Search`] | `search=zelda` |
//!
//! Validation failures surface as [`Error::OutOfRange`](crate::Error::OutOfRange)
//! before any network request is issued.

mod builder;
mod opt;

pub use builder::{Query, MAX_LIMIT, MAX_OFFSET};
pub use opt::{Direction, Operator, Opt};
