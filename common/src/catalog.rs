//! Catalog data shapes returned by the remote API, plus chapter adjacency.

use serde::{Deserialize, Serialize};


/// One page of catalog results, replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage<T> {
    pub total: u64,
    pub page: u64,
    pub size: u64,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreTag {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AltTitle {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastChapterInfo {
    pub chapter_num: f64,
    pub updated_at: String,
}

/// A series as returned by `/comics` and `/comics/{slug}`.
///
/// `status` and `comic_type` stay plain strings on the read side: rendering
/// is pass-through and an unknown value from the server must not break
/// deserialization of a whole result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub status: String,
    #[serde(rename = "type")]
    pub comic_type: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub alt_titles: Vec<AltTitle>,
    #[serde(default)]
    pub genres: Vec<GenreTag>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub last_chapter: Option<LastChapterInfo>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl CatalogItem {
    pub fn genre_line(&self) -> String {
        self.genres.iter().map(|g| g.name.as_str()).collect::<Vec<_>>().join(", ")
    }

    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) => format!("{:.1}", rating),
            None => "-".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GroupInfo {
    pub id: String,
    pub name: String,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub chapter_num: f64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub group: Option<GroupInfo>,
}

impl Chapter {
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(title) if !title.is_empty() => format!("{} - {}", self.chapter_num, title),
            _ => format!("Chapter {}", self.chapter_num),
        }
    }
}

/// Sort a chapter list ascending by chapter number. Ordering of equal or
/// non-finite numbers is left as-is.
pub fn sort_chapters_by_number(chapters: &mut [Chapter]) {
    chapters.sort_by(|a, b| {
        a.chapter_num.partial_cmp(&b.chapter_num).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Previous/next chapter of `chapter_id` in reading order, regardless of the
/// input ordering. Previous is the numeric lower neighbor, next the higher.
pub fn chapter_neighbors(
    chapters: &[Chapter],
    chapter_id: &str,
) -> (Option<Chapter>, Option<Chapter>) {
    let mut sorted = chapters.to_vec();
    sort_chapters_by_number(&mut sorted);
    let Some(position) = sorted.iter().position(|c| c.id == chapter_id) else {
        return (None, None);
    };
    let previous = if position > 0 { Some(sorted[position - 1].clone()) } else { None };
    let next = sorted.get(position + 1).cloned();
    (previous, next)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(id: &str, num: f64) -> Chapter {
        Chapter {
            id: id.to_string(),
            chapter_num: num,
            title: None,
            created_at: String::new(),
            group: None,
        }
    }

    #[test]
    fn neighbors_at_the_edges_and_in_the_middle() {
        // deliberately unsorted input
        let chapters = vec![chapter("c3", 3.0), chapter("c1", 1.0), chapter("c2", 2.0)];

        let (prev, next) = chapter_neighbors(&chapters, "c1");
        assert!(prev.is_none());
        assert_eq!(next.unwrap().id, "c2");

        let (prev, next) = chapter_neighbors(&chapters, "c2");
        assert_eq!(prev.unwrap().id, "c1");
        assert_eq!(next.unwrap().id, "c3");

        let (prev, next) = chapter_neighbors(&chapters, "c3");
        assert_eq!(prev.unwrap().id, "c2");
        assert!(next.is_none());
    }

    #[test]
    fn fractional_chapter_numbers_sort_between_their_neighbors() {
        let chapters = vec![chapter("a", 10.0), chapter("b", 10.5), chapter("c", 11.0)];
        let (prev, next) = chapter_neighbors(&chapters, "b");
        assert_eq!(prev.unwrap().id, "a");
        assert_eq!(next.unwrap().id, "c");
    }

    #[test]
    fn unknown_chapter_has_no_neighbors() {
        let chapters = vec![chapter("a", 1.0)];
        assert_eq!(chapter_neighbors(&chapters, "zz"), (None, None));
    }

    #[test]
    fn catalog_item_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": "x1", "title": "Solo", "slug": "solo",
            "status": "ongoing", "type": "manhwa"
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.rating_label(), "-");
        assert!(item.genre_line().is_empty());
        assert!(item.chapters.is_empty());
    }
}
