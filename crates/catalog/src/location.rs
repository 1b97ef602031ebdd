//! Place name parsing and fuzzy hierarchical matching.
//!
//! Upstream stores concert places as `city_name-country_name`; users type
//! `City, State, Country`. Both are reduced to ordered lowercase components
//! before comparing.

/// Split a hyphenated place (`north_carolina-usa`) into `(city, country)`.
pub fn parse(hyphenated: &str) -> (String, String) {
    let mut parts = hyphenated.split('-');
    let city = parts.next().unwrap_or_default().replace('_', " ");
    let country = parts.next().unwrap_or_default().replace('_', " ");
    (city, country)
}

/// Rewrite a free-form place in the upstream hyphenated form.
///
/// `"Los Angeles, USA"` becomes `"los_angeles-usa"`; an already hyphenated
/// value is only lowercased.
pub fn hyphenate(place: &str) -> String {
    place
        .split(',')
        .map(|part| {
            part.split_whitespace()
                .collect::<Vec<_>>()
                .join("_")
                .to_lowercase()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Ordered lowercase components of a place, split on every run of
/// non-alphanumeric characters.
pub fn components(place: &str) -> Vec<String> {
    place
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Whether one place lies within the other.
///
/// True when the components of the shorter place appear, in order, among
/// the components of the longer one, each matching a component that
/// contains it or is contained by it. `Texas` is within `Texas, USA` and
/// `Washington, USA` is within `Seattle, Washington, USA`, while
/// `Washington, USA` and `Texas, USA` share only the country and do not
/// match.
///
/// Every non-alphanumeric character separates components, `$` included, so
/// `Washington$USA` is within `Seattle, Washington, USA`. A whole-string
/// substring comparison would reject that pair; this matcher accepts it.
pub fn contains(a: &str, b: &str) -> bool {
    let a = components(a);
    let b = components(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }

    ordered_within(&a, &b) || ordered_within(&b, &a)
}

// Greedy earliest match; taking the first fit always leaves the most room
// for the remaining components.
fn ordered_within(needle: &[String], haystack: &[String]) -> bool {
    if needle.len() > haystack.len() {
        return false;
    }

    let mut rest = haystack.iter();
    needle
        .iter()
        .all(|n| rest.any(|h| h.contains(n.as_str()) || n.contains(h.as_str())))
}
