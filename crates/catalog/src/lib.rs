//! Artist catalog crate.
//!
//! Caches the upstream collections and answers filter, search and detail
//! queries against a consistent snapshot.

pub mod cache;
pub mod filter;
pub mod location;
pub mod search;
pub mod xtime;

pub use cache::{ArtistCache, LocationIndex, Snapshot};
pub use filter::{
    ClauseKind, Combinator, DateClause, FilterEngine, FilterPlan, FilterQuery, LocationClause,
    NumericClause,
};
