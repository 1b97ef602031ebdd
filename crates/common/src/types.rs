//! Domain types shared across the tracker.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Upstream entities ─────────────────────────────────────────────────

/// An artist or band as returned by GET /api/artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: u32,
    #[serde(default)]
    pub image: String,
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
    #[serde(default)]
    pub creation_date: i32,
    /// First album release date, `DD-MM-YYYY`.
    #[serde(default)]
    pub first_album: String,
    /// Link to the artist's concert locations.
    #[serde(default)]
    pub locations: String,
    /// Link to the artist's concert dates.
    #[serde(default)]
    pub concert_dates: String,
    /// Link to the artist's date/location relations.
    #[serde(default)]
    pub relations: String,
}

impl Artist {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}

/// Concert places for one artist, as hyphenated `city_name-country_name` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSet {
    pub id: u32,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub dates: String,
}

/// Concert dates for one artist. The first date of a tour leg is prefixed with `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSet {
    pub id: u32,
    #[serde(default)]
    pub dates: Vec<String>,
}

/// Concert dates keyed by hyphenated location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSet {
    pub id: u32,
    #[serde(rename = "datesLocations", default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// Upstream wraps the per-category collections in an `index` array.
#[derive(Debug, Clone, Deserialize)]
pub struct IndexResponse<T> {
    #[serde(default = "Vec::new")]
    pub index: Vec<T>,
}

// ── Views ─────────────────────────────────────────────────────────────

/// Everything known about one artist, taken from a single snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetails {
    pub artist: Artist,
    pub locations: Vec<String>,
    pub dates: Vec<String>,
    pub relations: BTreeMap<String, Vec<String>>,
}

/// A search-as-you-type suggestion and where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub suggestion: String,
    pub from: String,
}
