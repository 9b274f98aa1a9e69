//! The complete, serializable description of current search/sort/filter intent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tri_state::{FilterOption, TriStateSelection};


#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComicType {
    Manhwa,
    Manga,
    Manhua,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComicStatus {
    Ongoing,
    Completed,
    Hiatus,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    UpdatedAt,
    CreatedAt,
    Title,
    Rating,
    ViewCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl ComicType {
    pub const ALL: [ComicType; 3] = [ComicType::Manhwa, ComicType::Manga, ComicType::Manhua];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComicType::Manhwa => "manhwa",
            ComicType::Manga => "manga",
            ComicType::Manhua => "manhua",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComicType::Manhwa => "Manhwa",
            ComicType::Manga => "Manga",
            ComicType::Manhua => "Manhua",
        }
    }
}

impl ComicStatus {
    pub const ALL: [ComicStatus; 4] = [
        ComicStatus::Ongoing,
        ComicStatus::Completed,
        ComicStatus::Hiatus,
        ComicStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComicStatus::Ongoing => "ongoing",
            ComicStatus::Completed => "completed",
            ComicStatus::Hiatus => "hiatus",
            ComicStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComicStatus::Ongoing => "Ongoing",
            ComicStatus::Completed => "Completed",
            ComicStatus::Hiatus => "Hiatus",
            ComicStatus::Cancelled => "Cancelled",
        }
    }
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::UpdatedAt,
        SortKey::CreatedAt,
        SortKey::Title,
        SortKey::Rating,
        SortKey::ViewCount,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::UpdatedAt => "updated_at",
            SortKey::CreatedAt => "created_at",
            SortKey::Title => "title",
            SortKey::Rating => "rating",
            SortKey::ViewCount => "view_count",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::UpdatedAt => "Latest Update",
            SortKey::CreatedAt => "Added Date",
            SortKey::Title => "Alphabetical",
            SortKey::Rating => "Rating",
            SortKey::ViewCount => "Popularity",
        }
    }
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> SortOrder {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

macro_rules! impl_display_fromstr {
    ($name:ident, [$($variant:path),+]) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ();

            // unknown wire tokens are an error the caller drops
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(if s == $variant.as_str() { return Ok($variant); })+
                Err(())
            }
        }
    };
}

impl_display_fromstr!(ComicType, [ComicType::Manhwa, ComicType::Manga, ComicType::Manhua]);
impl_display_fromstr!(
    ComicStatus,
    [ComicStatus::Ongoing, ComicStatus::Completed, ComicStatus::Hiatus, ComicStatus::Cancelled]
);
impl_display_fromstr!(
    SortKey,
    [SortKey::UpdatedAt, SortKey::CreatedAt, SortKey::Title, SortKey::Rating, SortKey::ViewCount]
);
impl_display_fromstr!(SortOrder, [SortOrder::Asc, SortOrder::Desc]);


/// Static filter catalog for the Type dimension.
pub fn type_options() -> Vec<FilterOption<ComicType>> {
    ComicType::ALL.iter().map(|t| FilterOption::new(*t, t.label())).collect()
}

/// Static filter catalog for the Status dimension.
pub fn status_options() -> Vec<FilterOption<ComicStatus>> {
    ComicStatus::ALL.iter().map(|s| FilterOption::new(*s, s.label())).collect()
}


/// Aggregate query state the browse page serializes to its URL and sends to
/// the catalog endpoint. Replaced or mutated only within one UI turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CatalogQuery {
    pub search: String,
    pub types: TriStateSelection<ComicType>,
    pub statuses: TriStateSelection<ComicStatus>,
    pub genres: TriStateSelection<u32>,
    pub sort_by: SortKey,
    pub order: SortOrder,
}

fn join_ids<T: ToString>(set: &std::collections::BTreeSet<T>) -> String {
    set.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}

impl CatalogQuery {
    /// Back to the default query: sets and search cleared, sort/order reset.
    pub fn reset_all(&mut self) {
        *self = CatalogQuery::default();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || !self.types.is_empty()
            || !self.statuses.is_empty()
            || !self.genres.is_empty()
    }

    /// The catalog endpoint's parameter list, in emission order. Empty-set
    /// params and an empty search are omitted; `sort_by`/`order` always
    /// present. Values are not yet percent-encoded here.
    pub fn to_param_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(("search", self.search.clone()));
        }
        if !self.types.included.is_empty() {
            params.push(("type", join_ids(&self.types.included)));
        }
        if !self.types.excluded.is_empty() {
            params.push(("exclude_type", join_ids(&self.types.excluded)));
        }
        if !self.statuses.included.is_empty() {
            params.push(("status", join_ids(&self.statuses.included)));
        }
        if !self.statuses.excluded.is_empty() {
            params.push(("exclude_status", join_ids(&self.statuses.excluded)));
        }
        params.push(("sort_by", self.sort_by.as_str().to_string()));
        params.push(("order", self.order.as_str().to_string()));
        if !self.genres.included.is_empty() {
            params.push(("genre_ids", join_ids(&self.genres.included)));
        }
        if !self.genres.excluded.is_empty() {
            params.push(("exclude_genre_ids", join_ids(&self.genres.excluded)));
        }
        params
    }

    /// Preset for the home page "Latest Updates" strip.
    pub fn latest_updates() -> Self {
        CatalogQuery { sort_by: SortKey::UpdatedAt, ..Default::default() }
    }

    /// Preset for the home page "New Series" strip.
    pub fn new_series() -> Self {
        CatalogQuery { sort_by: SortKey::CreatedAt, ..Default::default() }
    }

    /// Preset for the home page "Popular" strip.
    pub fn popular() -> Self {
        CatalogQuery { sort_by: SortKey::ViewCount, ..Default::default() }
    }

    pub fn with_search(text: impl Into<String>) -> Self {
        CatalogQuery { search: text.into(), ..Default::default() }
    }

    pub fn with_included_genre(genre_id: u32) -> Self {
        let mut query = CatalogQuery::default();
        query.genres.include(genre_id);
        query
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_documented_ones() {
        let query = CatalogQuery::default();
        assert_eq!(query.sort_by, SortKey::UpdatedAt);
        assert_eq!(query.order, SortOrder::Desc);
        assert!(query.search.is_empty());
        assert!(!query.has_active_filters());
    }

    #[test]
    fn enum_wire_spellings_round_trip() {
        for t in ComicType::ALL {
            assert_eq!(t.as_str().parse::<ComicType>(), Ok(t));
        }
        for s in ComicStatus::ALL {
            assert_eq!(s.as_str().parse::<ComicStatus>(), Ok(s));
        }
        for k in SortKey::ALL {
            assert_eq!(k.as_str().parse::<SortKey>(), Ok(k));
        }
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Asc));
        assert!("sideways".parse::<SortOrder>().is_err());
        assert!("webtoon".parse::<ComicType>().is_err());
    }

    #[test]
    fn param_pairs_omit_empty_fields_but_keep_sort_and_order() {
        let query = CatalogQuery::default();
        let params = query.to_param_pairs();
        assert_eq!(
            params,
            vec![("sort_by", "updated_at".to_string()), ("order", "desc".to_string())]
        );
    }

    #[test]
    fn param_pairs_comma_join_sets() {
        let mut query = CatalogQuery::default();
        query.genres.include(2);
        query.genres.include(1);
        query.genres.exclude(9);
        query.types.include(ComicType::Manga);
        let params = query.to_param_pairs();
        assert!(params.contains(&("genre_ids", "1,2".to_string())));
        assert!(params.contains(&("exclude_genre_ids", "9".to_string())));
        assert!(params.contains(&("type", "manga".to_string())));
    }

    #[test]
    fn reset_all_restores_the_default_query() {
        let mut query = CatalogQuery::with_search("demon");
        query.genres.include(4);
        query.statuses.exclude(ComicStatus::Hiatus);
        query.sort_by = SortKey::Rating;
        query.order = SortOrder::Asc;
        query.reset_all();
        assert_eq!(query, CatalogQuery::default());
    }
}
