//! Utilities for highlighting query matches in quick-search suggestion titles.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
    pub index: u64,
}

/// Split `title` into spans with every case-insensitive occurrence of
/// `query` marked highlighted. Concatenating the span texts reproduces the
/// title. Matches are found left to right and do not overlap; `index`
/// counts highlighted spans only.
pub fn highlight_matches(title: &str, query: &str) -> Vec<HighlightTextSpan> {
    let query = query.trim();
    if title.is_empty() {
        return vec![];
    }
    if query.is_empty() {
        return vec![HighlightTextSpan { text: title.to_string(), is_highlighted: false, index: 0 }];
    }

    let mut spans = Vec::new();
    let mut highlight_index = 0;
    let mut plain_start = 0;
    let mut i = 0;
    while i < title.len() {
        // `get` returns None off a char boundary, so multi-byte titles are safe
        let candidate = title.get(i..i + query.len());
        match candidate {
            Some(candidate) if candidate.eq_ignore_ascii_case(query) => {
                if plain_start < i {
                    spans.push(HighlightTextSpan {
                        text: title[plain_start..i].to_string(),
                        is_highlighted: false,
                        index: 0,
                    });
                }
                spans.push(HighlightTextSpan {
                    text: candidate.to_string(),
                    is_highlighted: true,
                    index: highlight_index,
                });
                highlight_index += 1;
                i += query.len();
                plain_start = i;
            }
            _ => {
                i += 1;
                while i < title.len() && !title.is_char_boundary(i) {
                    i += 1;
                }
            }
        }
    }
    if plain_start < title.len() {
        spans.push(HighlightTextSpan {
            text: title[plain_start..].to_string(),
            is_highlighted: false,
            index: 0,
        });
    }
    spans
}


#[cfg(test)]
mod tests {
    use super::*;

    fn rejoin(spans: &[HighlightTextSpan]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn concatenated_spans_reproduce_the_title() {
        let title = "The Beginning After The End";
        let spans = highlight_matches(title, "the");
        assert_eq!(rejoin(&spans), title);
        assert_eq!(spans.iter().filter(|s| s.is_highlighted).count(), 2);
    }

    #[test]
    fn matching_is_case_insensitive_and_preserves_original_casing() {
        let spans = highlight_matches("Demon Slayer", "DEMON");
        assert_eq!(spans[0].text, "Demon");
        assert!(spans[0].is_highlighted);
        assert_eq!(spans[1].text, " Slayer");
        assert!(!spans[1].is_highlighted);
    }

    #[test]
    fn highlighted_spans_are_indexed_in_order() {
        let spans = highlight_matches("aba aba", "a");
        let indices: Vec<u64> =
            spans.iter().filter(|s| s.is_highlighted).map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn no_match_yields_one_plain_span() {
        let spans = highlight_matches("One Piece", "naruto");
        assert_eq!(spans.len(), 1);
        assert!(!spans[0].is_highlighted);
    }

    #[test]
    fn empty_query_yields_the_whole_title_unhighlighted() {
        let spans = highlight_matches("Berserk", "  ");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Berserk");
    }

    #[test]
    fn multibyte_titles_do_not_split_characters() {
        let title = "かぐや様は告らせたい";
        let spans = highlight_matches(title, "x");
        assert_eq!(rejoin(&spans), title);
    }
}
