//! In-memory artist cache with refresh-on-expiry.
//!
//! Holds one consistent snapshot of the four upstream collections. Reads
//! take the shared lock only long enough to clone an `Arc`; a stale read
//! falls through to a single exclusive refresh section, so concurrent
//! callers that all see an expired snapshot trigger one upstream cycle.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use common::{Artist, DateSet, Error, LocationSet, RelationSet};
use groupie_client::Gateway;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{info, warn};

/// Artist id → hyphenated concert places.
pub type LocationIndex = Arc<HashMap<u32, Vec<String>>>;

/// All four collections from one refresh cycle, plus the derived index.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Bumped on every successful refresh; 0 means never populated.
    pub generation: u64,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub artists: Vec<Artist>,
    pub locations: Vec<LocationSet>,
    pub dates: Vec<DateSet>,
    pub relations: Vec<RelationSet>,
    pub location_index: LocationIndex,
}

impl Snapshot {
    pub fn new(
        generation: u64,
        artists: Vec<Artist>,
        locations: Vec<LocationSet>,
        dates: Vec<DateSet>,
        relations: Vec<RelationSet>,
    ) -> Self {
        let location_index: HashMap<u32, Vec<String>> = locations
            .iter()
            .map(|set| (set.id, set.locations.clone()))
            .collect();

        Self {
            generation,
            refreshed_at: Some(Utc::now()),
            artists,
            locations,
            dates,
            relations,
            location_index: Arc::new(location_index),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.refreshed_at.is_some()
    }

    pub fn artist(&self, id: u32) -> Option<&Artist> {
        self.artists.iter().find(|a| a.id == id)
    }
}

struct CacheState {
    snapshot: Arc<Snapshot>,
    refreshed_at: Option<Instant>,
    last_failure: Option<String>,
}

/// Process-wide cache of upstream artist data.
pub struct ArtistCache {
    gateway: Arc<dyn Gateway>,
    ttl: Duration,
    state: RwLock<CacheState>,
    refresh_lock: Mutex<()>,
    /// Completed refresh cycles, successful or not.
    attempts: AtomicU64,
}

impl ArtistCache {
    pub fn new(gateway: Arc<dyn Gateway>, ttl: Duration) -> Self {
        Self {
            gateway,
            ttl,
            state: RwLock::new(CacheState {
                snapshot: Arc::new(Snapshot::default()),
                refreshed_at: None,
                last_failure: None,
            }),
            refresh_lock: Mutex::new(()),
            attempts: AtomicU64::new(0),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Current snapshot, refreshing it first if it is missing or expired.
    ///
    /// A failed refresh keeps serving the previous snapshot; only when no
    /// refresh has ever succeeded is the error returned.
    pub async fn get(&self) -> Result<Arc<Snapshot>, Error> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            return Ok(snapshot);
        }

        let seen = self.attempts.load(Ordering::SeqCst);
        let _guard = self.refresh_lock.lock().await;

        // Another caller may have refreshed while we waited.
        if let Some(snapshot) = self.fresh_snapshot().await {
            return Ok(snapshot);
        }

        // ...or tried and failed; one failed cycle per wait is enough.
        if self.attempts.load(Ordering::SeqCst) != seen {
            let state = self.state.read().await;
            let err = Error::Refresh(state.last_failure.clone().unwrap_or_default());
            return Self::stale_or(&state, err);
        }

        match self.refresh().await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) => Self::stale_or(&*self.state.read().await, e),
        }
    }

    fn stale_or(state: &CacheState, err: Error) -> Result<Arc<Snapshot>, Error> {
        if state.refreshed_at.is_some() {
            warn!(
                "Serving stale artist data (generation {}): {}",
                state.snapshot.generation, err
            );
            Ok(state.snapshot.clone())
        } else {
            Err(err)
        }
    }

    /// Refresh regardless of the TTL.
    pub async fn refresh_now(&self) -> Result<Arc<Snapshot>, Error> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh().await
    }

    /// Derived id → places index from the last successful refresh.
    pub async fn location_index(&self) -> Option<LocationIndex> {
        let state = self.state.read().await;
        state
            .refreshed_at
            .map(|_| state.snapshot.location_index.clone())
    }

    /// Latest snapshot without triggering a refresh.
    pub async fn peek(&self) -> Arc<Snapshot> {
        self.state.read().await.snapshot.clone()
    }

    pub async fn is_initialized(&self) -> bool {
        self.state.read().await.refreshed_at.is_some()
    }

    pub async fn last_refresh(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.snapshot.refreshed_at
    }

    async fn fresh_snapshot(&self) -> Option<Arc<Snapshot>> {
        let state = self.state.read().await;
        match state.refreshed_at {
            Some(at) if at.elapsed() < self.ttl => Some(state.snapshot.clone()),
            _ => None,
        }
    }

    // Caller must hold `refresh_lock`.
    async fn refresh(&self) -> Result<Arc<Snapshot>, Error> {
        info!("Refreshing artist data from upstream");
        let started = Instant::now();

        let fetched = tokio::join!(
            self.gateway.fetch_artists(),
            self.gateway.fetch_all_locations(),
            self.gateway.fetch_all_dates(),
            self.gateway.fetch_all_relations(),
        );

        let (artists, locations, dates, relations) = match fetched {
            (Ok(a), Ok(l), Ok(d), Ok(r)) => (a, l, d, r),
            (a, l, d, r) => {
                let failures: Vec<String> = [
                    ("artists", a.err()),
                    ("locations", l.err()),
                    ("dates", d.err()),
                    ("relations", r.err()),
                ]
                .into_iter()
                .filter_map(|(name, err)| err.map(|e| format!("{}: {}", name, e)))
                .collect();

                let message = failures.join("; ");
                warn!("Upstream refresh failed: {}", message);
                self.state.write().await.last_failure = Some(message.clone());
                self.attempts.fetch_add(1, Ordering::SeqCst);
                return Err(Error::Refresh(message));
            }
        };

        let mut state = self.state.write().await;
        let generation = state.snapshot.generation + 1;
        let snapshot = Arc::new(Snapshot::new(generation, artists, locations, dates, relations));
        state.snapshot = snapshot.clone();
        state.refreshed_at = Some(Instant::now());
        state.last_failure = None;
        drop(state);
        self.attempts.fetch_add(1, Ordering::SeqCst);

        info!(
            "Artist data refreshed (generation {}): {} artists, {} location sets in {:?}",
            generation,
            snapshot.artists.len(),
            snapshot.locations.len(),
            started.elapsed()
        );

        Ok(snapshot)
    }
}
