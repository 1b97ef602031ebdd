//! The upstream gateway seam.
//!
//! The cache only depends on this trait, so tests can swap in a scripted
//! source and the binary plugs in [`GroupieClient`](crate::GroupieClient).

use async_trait::async_trait;
use common::{Artist, DateSet, Error, LocationSet, RelationSet};

/// Typed access to the upstream artists API.
///
/// Every call is independent and returns either a fully decoded value or an
/// error; there are no partial results.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn fetch_artists(&self) -> Result<Vec<Artist>, Error>;

    async fn fetch_all_locations(&self) -> Result<Vec<LocationSet>, Error>;

    async fn fetch_all_dates(&self) -> Result<Vec<DateSet>, Error>;

    async fn fetch_all_relations(&self) -> Result<Vec<RelationSet>, Error>;
}
