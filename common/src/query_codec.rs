//! Lossless round trip between a `CatalogQuery` and the browse page's URL
//! query string.
//!
//! Parsing is permissive: unknown keys are ignored, unknown enum tokens and
//! non-numeric genre tokens are dropped, missing fields fall back to the
//! defaults. Malformed URL state is never an error.

use crate::catalog_query::{CatalogQuery, SortKey, SortOrder};


/// Serialize in the fixed emission order: `search`, `type`, `exclude_type`,
/// `status`, `exclude_status`, `sort_by`, `order`, `genre_ids`,
/// `exclude_genre_ids`. The result has no leading `?` and is never empty
/// because `sort_by` and `order` are always emitted.
pub fn serialize_query(query: &CatalogQuery) -> String {
    query
        .to_param_pairs()
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, percent_encode(&value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Parse a query string (with or without a leading `?`) back into a
/// `CatalogQuery`. Include params are applied before exclude params, so an
/// id listed in both ends up Excluded.
pub fn parse_query(raw: &str) -> CatalogQuery {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    let pairs: Vec<(&str, String)> = raw
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key, percent_decode(value)),
            None => (pair, String::new()),
        })
        .collect();

    let mut query = CatalogQuery::default();
    // includes first, excludes after: an id listed in both ends up Excluded
    // no matter how the params are ordered in the string
    for (key, value) in &pairs {
        match *key {
            "search" => query.search = value.clone(),
            "type" => {
                for token in split_tokens(value) {
                    if let Ok(t) = token.parse() {
                        query.types.include(t);
                    }
                }
            }
            "status" => {
                for token in split_tokens(value) {
                    if let Ok(s) = token.parse() {
                        query.statuses.include(s);
                    }
                }
            }
            "genre_ids" => {
                for id in numeric_tokens(value) {
                    query.genres.include(id);
                }
            }
            "sort_by" => query.sort_by = value.parse().unwrap_or(SortKey::default()),
            "order" => query.order = value.parse().unwrap_or(SortOrder::default()),
            _ => {}
        }
    }
    for (key, value) in &pairs {
        match *key {
            "exclude_type" => {
                for token in split_tokens(value) {
                    if let Ok(t) = token.parse() {
                        query.types.exclude(t);
                    }
                }
            }
            "exclude_status" => {
                for token in split_tokens(value) {
                    if let Ok(s) = token.parse() {
                        query.statuses.exclude(s);
                    }
                }
            }
            "exclude_genre_ids" => {
                for id in numeric_tokens(value) {
                    query.genres.exclude(id);
                }
            }
            _ => {}
        }
    }
    query
}

fn split_tokens(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Comma list of genre ids; non-numeric tokens and 0 are dropped.
fn numeric_tokens(value: &str) -> impl Iterator<Item = u32> + '_ {
    split_tokens(value).filter_map(|token| token.parse::<u32>().ok()).filter(|id| *id != 0)
}

// Query-string component escaping. Unreserved characters per RFC 3986 pass
// through, a space becomes '+', everything else is %XX-escaped per UTF-8
// byte.
fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' | b',' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn percent_decode(value: &str) -> String {
    let mut bytes = Vec::with_capacity(value.len());
    let raw = value.as_bytes();
    let mut i = 0;
    while i < raw.len() {
        match raw[i] {
            b'+' => {
                bytes.push(b' ');
                i += 1;
            }
            b'%' if raw.len() >= i + 3 => {
                let byte = std::str::from_utf8(&raw[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                if let Some(byte) = byte {
                    bytes.push(byte);
                    i += 3;
                } else {
                    bytes.push(b'%');
                    i += 1;
                }
            }
            byte => {
                bytes.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_query::{ComicStatus, ComicType};

    #[test]
    fn default_query_serializes_to_sort_and_order_only() {
        let mut query = CatalogQuery::with_search("demon");
        query.types.include(ComicType::Manga);
        query.genres.exclude(7);
        query.reset_all();
        assert_eq!(serialize_query(&query), "sort_by=updated_at&order=desc");
    }

    #[test]
    fn round_trip_preserves_sets_and_scalars() {
        let mut query = CatalogQuery::with_search("demon");
        query.genres.include(1);
        query.genres.include(2);
        query.genres.exclude(3);
        query.sort_by = SortKey::Title;
        query.order = SortOrder::Asc;
        let serialized = serialize_query(&query);
        assert_eq!(parse_query(&serialized), query);
    }

    #[test]
    fn round_trip_with_every_dimension_populated() {
        let mut query = CatalogQuery::with_search("tower of god");
        query.types.include(ComicType::Manhwa);
        query.types.exclude(ComicType::Manhua);
        query.statuses.include(ComicStatus::Ongoing);
        query.statuses.exclude(ComicStatus::Cancelled);
        query.genres.include(12);
        query.genres.exclude(5);
        let serialized = serialize_query(&query);
        assert_eq!(parse_query(&serialized), query);
        // stable re-serialization, no data loss
        assert_eq!(serialize_query(&parse_query(&serialized)), serialized);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let query = parse_query("?status=ongoing&exclude_genre_ids=5,9&sort_by=rating");
        assert!(query.statuses.included.contains(&ComicStatus::Ongoing));
        assert!(query.statuses.excluded.is_empty());
        assert!(query.genres.included.is_empty());
        assert_eq!(query.genres.excluded.iter().copied().collect::<Vec<_>>(), vec![5, 9]);
        assert_eq!(query.sort_by, SortKey::Rating);
        assert_eq!(query.order, SortOrder::Desc);
        assert!(query.search.is_empty());
    }

    #[test]
    fn garbage_tokens_are_dropped_silently() {
        let query = parse_query("genre_ids=5,x,0,,9&type=manga,webtoon&sort_by=alphabet&order=up");
        assert_eq!(query.genres.included.iter().copied().collect::<Vec<_>>(), vec![5, 9]);
        assert_eq!(query.types.included.iter().copied().collect::<Vec<_>>(), vec![ComicType::Manga]);
        assert_eq!(query.sort_by, SortKey::UpdatedAt);
        assert_eq!(query.order, SortOrder::Desc);
    }

    #[test]
    fn exclude_wins_when_an_id_appears_in_both_params() {
        let query = parse_query("genre_ids=4&exclude_genre_ids=4");
        assert!(query.genres.included.is_empty());
        assert!(query.genres.excluded.contains(&4));
        // same outcome when the exclude param comes first
        let query = parse_query("exclude_genre_ids=4&genre_ids=4");
        assert!(query.genres.included.is_empty());
        assert!(query.genres.excluded.contains(&4));
    }

    #[test]
    fn search_text_is_escaped_and_restored() {
        let query = CatalogQuery::with_search("a & b = 100% ?");
        let serialized = serialize_query(&query);
        assert!(!serialized.contains(" & "));
        assert_eq!(parse_query(&serialized).search, "a & b = 100% ?");
    }

    #[test]
    fn plus_decodes_to_space() {
        assert_eq!(parse_query("search=solo+leveling").search, "solo leveling");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = parse_query("page=3&utm_source=feed&search=ok");
        assert_eq!(query.search, "ok");
    }
}
