//! Composite artist filter.
//!
//! A query has four optional clauses (creation year, first album date,
//! member count, concert locations) and a combinator. Under `or` every
//! active clause runs against the whole snapshot and the matches are
//! merged; under `and` the clauses narrow the set one after another.
//! Clause order is fixed: creation date, first album date, number of
//! members, locations of concerts.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use common::{Artist, Error};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::cache::{ArtistCache, Snapshot};
use crate::{location, xtime};

// ── Wire types ────────────────────────────────────────────────────────

// An explicit `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integer clause (creation year, member count).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumericClause {
    #[serde(deserialize_with = "null_as_default")]
    pub from: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub to: i64,
    #[serde(rename = "in", deserialize_with = "null_as_default")]
    pub values: Vec<i64>,
    /// One of `range`, `in` or `or`; blank disables the clause.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Date clause; bounds and values are `DD-MM-YYYY` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateClause {
    #[serde(deserialize_with = "null_as_default")]
    pub from: String,
    #[serde(deserialize_with = "null_as_default")]
    pub to: String,
    #[serde(rename = "in", deserialize_with = "null_as_default")]
    pub values: Vec<String>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
}

/// Free-form places, `City, Country` or `city-country`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationClause {
    #[serde(rename = "in", deserialize_with = "null_as_default")]
    pub places: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterQuery {
    #[serde(deserialize_with = "null_as_default")]
    pub creation_date: NumericClause,
    #[serde(deserialize_with = "null_as_default")]
    pub first_album_date: DateClause,
    #[serde(deserialize_with = "null_as_default")]
    pub number_of_members: NumericClause,
    #[serde(deserialize_with = "null_as_default")]
    pub locations_of_concerts: LocationClause,
    #[serde(deserialize_with = "null_as_default")]
    pub combinator: String,
}

// ── Validated forms ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseKind {
    Inactive,
    Range,
    In,
    Or,
}

impl ClauseKind {
    pub fn parse(clause: &'static str, raw: &str) -> Result<Self, Error> {
        if raw.trim().is_empty() {
            return Ok(ClauseKind::Inactive);
        }
        match raw {
            "range" => Ok(ClauseKind::Range),
            "in" => Ok(ClauseKind::In),
            "or" => Ok(ClauseKind::Or),
            _ => Err(Error::InvalidClause {
                clause,
                value: raw.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Combinator {
    #[default]
    Or,
    And,
}

impl Combinator {
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("and") {
            Combinator::And
        } else {
            Combinator::Or
        }
    }
}

/// Inclusive range and/or membership test.
#[derive(Debug, Clone, PartialEq)]
struct Predicate<T> {
    range: Option<(T, T)>,
    values: Vec<T>,
}

impl<T: PartialOrd> Predicate<T> {
    fn matches(&self, v: &T) -> bool {
        let in_range = self
            .range
            .as_ref()
            .is_some_and(|(from, to)| from <= v && v <= to);
        in_range || self.values.contains(v)
    }
}

fn numeric_predicate(
    clause: &'static str,
    q: &NumericClause,
) -> Result<Option<Predicate<i64>>, Error> {
    let predicate = match ClauseKind::parse(clause, &q.kind)? {
        ClauseKind::Inactive => return Ok(None),
        ClauseKind::Range => Predicate {
            range: Some((q.from, q.to)),
            values: Vec::new(),
        },
        ClauseKind::In => Predicate {
            range: None,
            values: q.values.clone(),
        },
        ClauseKind::Or => Predicate {
            range: Some((q.from, q.to)),
            values: q.values.clone(),
        },
    };
    Ok(Some(predicate))
}

fn date_predicate(
    clause: &'static str,
    q: &DateClause,
) -> Result<Option<Predicate<NaiveDate>>, Error> {
    let bound = |value: &str| {
        xtime::parse(value).map_err(|e| Error::InvalidDate {
            clause,
            value: value.to_string(),
            reason: e.to_string(),
        })
    };
    let range = || -> Result<(NaiveDate, NaiveDate), Error> {
        Ok((bound(q.from.as_str())?, bound(q.to.as_str())?))
    };
    let values = || {
        q.values
            .iter()
            .map(|v| bound(v.as_str()))
            .collect::<Result<Vec<_>, _>>()
    };

    let predicate = match ClauseKind::parse(clause, &q.kind)? {
        ClauseKind::Inactive => return Ok(None),
        ClauseKind::Range => Predicate {
            range: Some(range()?),
            values: Vec::new(),
        },
        ClauseKind::In => Predicate {
            range: None,
            values: values()?,
        },
        ClauseKind::Or => Predicate {
            range: Some(range()?),
            values: values()?,
        },
    };
    Ok(Some(predicate))
}

#[derive(Debug, Clone)]
enum Stage {
    CreationDate(Predicate<i64>),
    FirstAlbumDate(Predicate<NaiveDate>),
    NumberOfMembers(Predicate<i64>),
    Locations(Vec<PlaceQuery>),
}

#[derive(Debug, Clone)]
struct PlaceQuery {
    raw: String,
    hyphenated: String,
}

/// A query checked and compiled before it touches any artist.
#[derive(Debug, Clone)]
pub struct FilterPlan {
    combinator: Combinator,
    stages: Vec<Stage>,
}

impl FilterPlan {
    pub fn compile(query: &FilterQuery) -> Result<Self, Error> {
        let mut stages = Vec::new();

        if let Some(p) = numeric_predicate("creation_date", &query.creation_date)? {
            stages.push(Stage::CreationDate(p));
        }
        if let Some(p) = date_predicate("first_album_date", &query.first_album_date)? {
            stages.push(Stage::FirstAlbumDate(p));
        }
        if let Some(p) = numeric_predicate("number_of_members", &query.number_of_members)? {
            stages.push(Stage::NumberOfMembers(p));
        }

        let places: Vec<PlaceQuery> = query
            .locations_of_concerts
            .places
            .iter()
            .map(|raw| PlaceQuery {
                raw: raw.clone(),
                hyphenated: location::hyphenate(raw),
            })
            .collect();
        if !places.is_empty() {
            stages.push(Stage::Locations(places));
        }

        Ok(Self {
            combinator: Combinator::parse(&query.combinator),
            stages,
        })
    }

    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    pub fn active_clauses(&self) -> usize {
        self.stages.len()
    }
}

impl Stage {
    fn apply<'a>(
        &self,
        artists: &[&'a Artist],
        snapshot: &Snapshot,
    ) -> Result<Vec<&'a Artist>, Error> {
        match self {
            Stage::CreationDate(p) => Ok(artists
                .iter()
                .copied()
                .filter(|a| p.matches(&i64::from(a.creation_date)))
                .collect()),
            Stage::NumberOfMembers(p) => Ok(artists
                .iter()
                .copied()
                .filter(|a| p.matches(&(a.member_count() as i64)))
                .collect()),
            Stage::FirstAlbumDate(p) => {
                let mut matched = Vec::new();
                for &artist in artists {
                    let first_album =
                        xtime::parse(&artist.first_album).map_err(|_| Error::InvalidAlbumDate {
                            artist: artist.name.clone(),
                            value: artist.first_album.clone(),
                        })?;
                    if p.matches(&first_album) {
                        matched.push(artist);
                    }
                }
                Ok(matched)
            }
            Stage::Locations(places) => match_locations(artists, places, snapshot),
        }
    }
}

fn match_locations<'a>(
    artists: &[&'a Artist],
    places: &[PlaceQuery],
    snapshot: &Snapshot,
) -> Result<Vec<&'a Artist>, Error> {
    if !snapshot.is_populated() {
        return Err(Error::IndexUnavailable);
    }

    let mut matched = Vec::new();
    for &artist in artists {
        let Some(concerts) = snapshot.location_index.get(&artist.id) else {
            info!(
                "artist with ID: {} has no concert location data in the location index",
                artist.id
            );
            continue;
        };

        let hit = concerts.iter().any(|hyphenated| {
            let (city, country) = location::parse(hyphenated);
            let readable = format!("{}, {}", city, country);
            places.iter().any(|q| {
                location::contains(&readable, &q.raw)
                    || location::contains(hyphenated, &q.hyphenated)
            })
        });
        if hit {
            matched.push(artist);
        }
    }
    Ok(matched)
}

/// First-seen-order merge keyed by artist id.
#[derive(Default)]
struct Merged<'a> {
    seen: HashSet<u32>,
    artists: Vec<&'a Artist>,
}

impl<'a> Merged<'a> {
    fn extend(&mut self, artists: impl IntoIterator<Item = &'a Artist>) {
        for artist in artists {
            if self.seen.insert(artist.id) {
                self.artists.push(artist);
            }
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────

/// Runs filter queries against the cached artist snapshot.
#[derive(Clone)]
pub struct FilterEngine {
    cache: Arc<ArtistCache>,
}

impl FilterEngine {
    pub fn new(cache: Arc<ArtistCache>) -> Self {
        Self { cache }
    }

    /// Fetch the current snapshot and evaluate `query` against it.
    pub async fn run(&self, query: &FilterQuery) -> Result<Vec<Artist>, Error> {
        let snapshot = self.cache.get().await?;
        Self::evaluate(query, &snapshot)
    }

    /// Evaluate `query` against `snapshot`.
    ///
    /// Any invalid clause or unparseable date fails the whole query.
    pub fn evaluate(query: &FilterQuery, snapshot: &Snapshot) -> Result<Vec<Artist>, Error> {
        let plan = FilterPlan::compile(query)?;
        let all: Vec<&Artist> = snapshot.artists.iter().collect();

        let mut merged = Merged::default();
        match plan.combinator {
            Combinator::Or if plan.stages.is_empty() => merged.extend(all.iter().copied()),
            Combinator::Or => {
                for stage in &plan.stages {
                    merged.extend(stage.apply(&all, snapshot)?);
                }
            }
            Combinator::And => {
                let mut survivors = all;
                for stage in &plan.stages {
                    survivors = stage.apply(&survivors, snapshot)?;
                }
                merged.extend(survivors);
            }
        }

        debug!(
            "Filter matched {} of {} artists ({} clauses, {:?})",
            merged.artists.len(),
            snapshot.artists.len(),
            plan.active_clauses(),
            plan.combinator
        );

        Ok(merged.artists.into_iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::LocationSet;

    fn artist(id: u32, name: &str, created: i32, members: usize, first_album: &str) -> Artist {
        Artist {
            id,
            image: String::new(),
            name: name.into(),
            members: (0..members).map(|i| format!("{} member {}", name, i)).collect(),
            creation_date: created,
            first_album: first_album.into(),
            locations: String::new(),
            concert_dates: String::new(),
            relations: String::new(),
        }
    }

    fn places(id: u32, locations: &[&str]) -> LocationSet {
        LocationSet {
            id,
            locations: locations.iter().map(|s| s.to_string()).collect(),
            dates: String::new(),
        }
    }

    fn snapshot() -> Snapshot {
        let artists = vec![
            artist(1, "Phil Collins", 1994, 1, "05-02-1981"),
            artist(2, "Linkin Park", 1995, 6, "24-10-2000"),
            artist(3, "Eminem", 2000, 1, "12-11-1996"),
            artist(4, "Gorillaz", 2001, 4, "26-03-2001"),
            artist(5, "Pink Floyd", 1965, 6, "05-08-1967"),
            // No entry in the location index.
            artist(6, "Queen", 1970, 7, "14-12-1973"),
        ];
        let locations = vec![
            places(1, &["texas-usa", "london-uk"]),
            places(2, &["seattle-usa", "washington-usa"]),
            places(3, &["detroit-usa"]),
            places(4, &["north_carolina-usa", "dunedin-new_zealand"]),
            places(5, &["tbilisi-georgia"]),
        ];
        Snapshot::new(1, artists, locations, Vec::new(), Vec::new())
    }

    fn ids(artists: &[Artist]) -> Vec<u32> {
        artists.iter().map(|a| a.id).collect()
    }

    fn numeric(kind: &str, from: i64, to: i64, values: &[i64]) -> NumericClause {
        NumericClause {
            from,
            to,
            values: values.to_vec(),
            kind: kind.into(),
        }
    }

    fn dates(kind: &str, from: &str, to: &str, values: &[&str]) -> DateClause {
        DateClause {
            from: from.into(),
            to: to.into(),
            values: values.iter().map(|s| s.to_string()).collect(),
            kind: kind.into(),
        }
    }

    fn locations(values: &[&str]) -> LocationClause {
        LocationClause {
            places: values.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_creation_date_range_is_inclusive() {
        let query = FilterQuery {
            creation_date: numeric("range", 1995, 2000, &[]),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![2, 3]);
    }

    #[test]
    fn test_members_in_matches_exact_counts() {
        let query = FilterQuery {
            number_of_members: numeric("in", 0, 0, &[6]),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![2, 5]);
    }

    #[test]
    fn test_or_type_with_empty_range_matches_in_set() {
        let query = FilterQuery {
            number_of_members: numeric("or", 0, 0, &[6]),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![2, 5]);

        let query = FilterQuery {
            creation_date: numeric("or", 1994, 1994, &[2001]),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![1, 4]);
    }

    #[test]
    fn test_first_album_range_and_in() {
        let query = FilterQuery {
            first_album_date: dates("range", "01-01-1990", "31-12-2000", &[]),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![2, 3]);

        let query = FilterQuery {
            first_album_date: dates("in", "", "", &["12-11-1996", "05-08-1967"]),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![3, 5]);

        let query = FilterQuery {
            first_album_date: dates("or", "01-01-1960", "31-12-1970", &["26-03-2001"]),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![4, 5]);
    }

    #[test]
    fn test_or_date_clause_needs_both_bounds() {
        let query = FilterQuery {
            first_album_date: dates("or", "", "", &["26-03-2001"]),
            ..Default::default()
        };
        let err = FilterEngine::evaluate(&query, &snapshot()).unwrap_err();
        assert!(err.is_client_error());
        assert!(matches!(
            err,
            Error::InvalidDate { clause: "first_album_date", ref value, .. } if value.is_empty()
        ));
    }

    #[test]
    fn test_locations_match_city_country_and_hyphenated_forms() {
        let query = FilterQuery {
            locations_of_concerts: locations(&["Texas, USA"]),
            ..Default::default()
        };
        assert_eq!(ids(&FilterEngine::evaluate(&query, &snapshot()).unwrap()), vec![1]);

        let query = FilterQuery {
            locations_of_concerts: locations(&["Washington, USA"]),
            ..Default::default()
        };
        assert_eq!(ids(&FilterEngine::evaluate(&query, &snapshot()).unwrap()), vec![2]);

        let query = FilterQuery {
            locations_of_concerts: locations(&["north_carolina-usa", "Dunedin"]),
            ..Default::default()
        };
        assert_eq!(ids(&FilterEngine::evaluate(&query, &snapshot()).unwrap()), vec![4]);
    }

    #[test]
    fn test_locations_reject_cross_field_coincidence() {
        let query = FilterQuery {
            locations_of_concerts: locations(&["Georgia, USA"]),
            ..Default::default()
        };
        assert!(FilterEngine::evaluate(&query, &snapshot()).unwrap().is_empty());
    }

    #[test]
    fn test_artist_without_location_data_is_skipped() {
        let query = FilterQuery {
            locations_of_concerts: locations(&["USA", "UK"]),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_location_clause_needs_populated_snapshot() {
        let query = FilterQuery {
            locations_of_concerts: locations(&["Texas, USA"]),
            ..Default::default()
        };
        let err = FilterEngine::evaluate(&query, &Snapshot::default()).unwrap_err();
        assert!(matches!(err, Error::IndexUnavailable));
    }

    #[test]
    fn test_and_narrows_sequentially() {
        let created = numeric("range", 1970, 2000, &[]);
        let solo = numeric("in", 0, 0, &[1]);
        let query = FilterQuery {
            creation_date: created.clone(),
            number_of_members: solo.clone(),
            combinator: "and".into(),
            ..Default::default()
        };
        let both = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&both), vec![1, 3]);

        let only_created = FilterEngine::evaluate(
            &FilterQuery {
                creation_date: created,
                ..Default::default()
            },
            &snapshot(),
        )
        .unwrap();
        let only_solo = FilterEngine::evaluate(
            &FilterQuery {
                number_of_members: solo,
                ..Default::default()
            },
            &snapshot(),
        )
        .unwrap();
        assert!(both.len() <= only_created.len());
        assert!(both.len() <= only_solo.len());
    }

    #[test]
    fn test_and_with_locations() {
        let query = FilterQuery {
            number_of_members: numeric("range", 4, 9999, &[]),
            locations_of_concerts: locations(&["USA"]),
            combinator: " AND ".into(),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![2, 4]);
    }

    #[test]
    fn test_or_merges_in_clause_order_without_duplicates() {
        let query = FilterQuery {
            creation_date: numeric("range", 2000, 2001, &[]),
            number_of_members: numeric("in", 0, 0, &[1]),
            combinator: "or".into(),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![3, 4, 1]);
    }

    #[test]
    fn test_no_active_clause_returns_everything() {
        let all = vec![1, 2, 3, 4, 5, 6];
        let result = FilterEngine::evaluate(&FilterQuery::default(), &snapshot()).unwrap();
        assert_eq!(ids(&result), all);

        let query = FilterQuery {
            combinator: "and".into(),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), all);
    }

    #[test]
    fn test_invalid_type_is_rejected() {
        let query = FilterQuery {
            creation_date: numeric("range", 1990, 2000, &[]),
            number_of_members: numeric("bogus", 0, 0, &[]),
            ..Default::default()
        };
        let err = FilterEngine::evaluate(&query, &snapshot()).unwrap_err();
        assert!(err.is_client_error());
        assert!(matches!(
            err,
            Error::InvalidClause { clause: "number_of_members", ref value } if value == "bogus"
        ));

        // Exact spelling only.
        let query = FilterQuery {
            first_album_date: dates("Range", "01-01-1990", "01-01-2000", &[]),
            ..Default::default()
        };
        assert!(FilterEngine::evaluate(&query, &snapshot()).is_err());
    }

    #[test]
    fn test_malformed_bound_is_rejected() {
        let query = FilterQuery {
            first_album_date: dates("range", "1990", "31-12-2000", &[]),
            ..Default::default()
        };
        let err = FilterEngine::evaluate(&query, &snapshot()).unwrap_err();
        assert!(matches!(err, Error::InvalidDate { ref value, .. } if value == "1990"));
    }

    #[test]
    fn test_malformed_artist_date_names_the_artist() {
        let mut snap = snapshot();
        snap.artists.push(artist(7, "Broken Band", 1999, 3, "1999/11/12"));

        let query = FilterQuery {
            first_album_date: dates("range", "01-01-1990", "31-12-2000", &[]),
            ..Default::default()
        };
        let err = FilterEngine::evaluate(&query, &snap).unwrap_err();
        assert!(err.to_string().contains("Broken Band"));
        assert!(err.to_string().contains("1999/11/12"));

        // Narrowed away before the date clause runs.
        let query = FilterQuery {
            creation_date: numeric("range", 2000, 2001, &[]),
            first_album_date: dates("range", "01-01-1990", "31-12-2001", &[]),
            combinator: "and".into(),
            ..Default::default()
        };
        let result = FilterEngine::evaluate(&query, &snap).unwrap();
        assert_eq!(ids(&result), vec![3, 4]);
    }

    #[test]
    fn test_clause_kind_and_combinator_parsing() {
        assert_eq!(ClauseKind::parse("x", "   ").unwrap(), ClauseKind::Inactive);
        assert_eq!(ClauseKind::parse("x", "range").unwrap(), ClauseKind::Range);
        assert_eq!(ClauseKind::parse("x", "or").unwrap(), ClauseKind::Or);
        assert!(ClauseKind::parse("x", " in ").is_err());
        assert!(ClauseKind::parse("x", "range ").is_err());
        assert!(ClauseKind::parse("x", "IN").is_err());

        assert_eq!(Combinator::parse(" And "), Combinator::And);
        assert_eq!(Combinator::parse(""), Combinator::Or);
        assert_eq!(Combinator::parse("xor"), Combinator::Or);
    }

    #[test]
    fn test_query_deserializes_from_wire_shape() {
        let raw = r#"{
            "creation_date": {"from": 1970, "to": 2000, "type": "range"},
            "number_of_members": {"in": [1], "type": "in"},
            "locations_of_concerts": {"in": ["Texas, USA"]},
            "combinator": "and"
        }"#;
        let query: FilterQuery = serde_json::from_str(raw).expect("query should deserialize");

        assert_eq!(query.creation_date.kind, "range");
        assert_eq!(query.number_of_members.values, vec![1]);
        assert!(query.first_album_date.kind.is_empty());
        assert_eq!(query.locations_of_concerts.places, vec!["Texas, USA".to_string()]);

        let plan = FilterPlan::compile(&query).unwrap();
        assert_eq!(plan.combinator(), Combinator::And);
        assert_eq!(plan.active_clauses(), 3);
    }

    #[test]
    fn test_query_accepts_explicit_nulls() {
        let raw = r#"{
            "creation_date": {"from": null, "to": null, "in": null, "type": null},
            "first_album_date": null,
            "number_of_members": {"in": [6], "type": "in"},
            "locations_of_concerts": {"in": null},
            "combinator": null
        }"#;
        let query: FilterQuery = serde_json::from_str(raw).expect("nulls should read as defaults");

        assert_eq!(query.creation_date, NumericClause::default());
        assert_eq!(query.first_album_date, DateClause::default());
        assert!(query.locations_of_concerts.places.is_empty());

        let result = FilterEngine::evaluate(&query, &snapshot()).unwrap();
        assert_eq!(ids(&result), vec![2, 5]);
    }
}
