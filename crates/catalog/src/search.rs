//! Free-text search, suggestions and per-artist details over a snapshot.

use common::{Artist, ArtistDetails, Error, Suggestion};

use crate::cache::Snapshot;

fn matches(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Search-as-you-type suggestions.
///
/// A blank query yields nothing unless `init` is set, in which case every
/// candidate is returned.
pub fn suggest(snapshot: &Snapshot, query: &str, init: bool) -> Vec<Suggestion> {
    if query.trim().is_empty() && !init {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut out = Vec::new();
    let mut push = |suggestion: &str, from: String| {
        out.push(Suggestion {
            suggestion: suggestion.to_string(),
            from,
        })
    };

    for artist in &snapshot.artists {
        if matches(&artist.name, &needle) {
            push(&artist.name, "artist/band".into());
        }
        for member in &artist.members {
            if matches(member, &needle) {
                push(member, format!("member ({})", artist.name));
            }
        }
        if matches(&artist.first_album, &needle) {
            push(&artist.first_album, format!("first album date ({})", artist.name));
        }
        let created = artist.creation_date.to_string();
        if created.contains(&needle) {
            push(&created, format!("creation date ({})", artist.name));
        }
    }

    for set in &snapshot.locations {
        for place in &set.locations {
            if matches(place, &needle) {
                push(place, "location".into());
            }
        }
    }

    out
}

/// Artists whose name, members, first album or creation year contain `query`.
pub fn search_artists(snapshot: &Snapshot, query: &str) -> Vec<Artist> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return snapshot.artists.clone();
    }

    snapshot
        .artists
        .iter()
        .filter(|a| {
            matches(&a.name, &needle)
                || a.members.iter().any(|m| matches(m, &needle))
                || matches(&a.first_album, &needle)
                || a.creation_date.to_string().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Join the four collections for one artist.
pub fn details(snapshot: &Snapshot, id: u32) -> Result<ArtistDetails, Error> {
    let artist = snapshot
        .artist(id)
        .cloned()
        .ok_or_else(|| Error::NotFound(format!("artist {}", id)))?;

    let locations = snapshot
        .locations
        .iter()
        .find(|l| l.id == id)
        .map(|l| l.locations.clone())
        .unwrap_or_default();
    let dates = snapshot
        .dates
        .iter()
        .find(|d| d.id == id)
        .map(|d| d.dates.clone())
        .unwrap_or_default();
    let relations = snapshot
        .relations
        .iter()
        .find(|r| r.id == id)
        .map(|r| r.dates_locations.clone())
        .unwrap_or_default();

    Ok(ArtistDetails {
        artist,
        locations,
        dates,
        relations,
    })
}
