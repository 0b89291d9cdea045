use serde::{Deserialize, Serialize};

use crate::collation::Collation;
use crate::creator::Creator;
use crate::search::{matches_query, normalize};

// ===== FILTER STATE =====

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Manual rank, then phonetic key.
    #[default]
    Default,
    /// Manual rank only.
    Manual,
    /// Most recently updated first.
    Updated,
    /// Phonetic key only.
    Kana,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::Default,
        SortMode::Manual,
        SortMode::Updated,
        SortMode::Kana,
    ];

    /// Value used by the sort control and `gallery.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::Manual => "manual",
            SortMode::Updated => "updated",
            SortMode::Kana => "kana",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortMode::Default => "おすすめ順",
            SortMode::Manual => "手動順",
            SortMode::Updated => "更新が新しい順",
            SortMode::Kana => "五十音順",
        }
    }
}

/// Current filter selection. An empty field means "no filter".
///
/// `query` is stored normalized; `base`, `tag` and `role` are matched exactly
/// against the raw record fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub base: String,
    pub tag: String,
    pub role: String,
    pub sort: SortMode,
}

impl FilterState {
    pub fn with_sort(sort: SortMode) -> Self {
        Self {
            sort,
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = normalize(query);
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}

// ===== FILTER / SORT =====

pub fn matches_filters(creator: &Creator, filter: &FilterState) -> bool {
    matches_query(creator, &filter.query)
        && (filter.base.is_empty() || creator.base == filter.base)
        && (filter.tag.is_empty() || creator.has_tag(&filter.tag))
        && (filter.role.is_empty() || creator.has_role(&filter.role))
}

/// Records passing every filter, in source order. The source is left untouched.
pub fn filter_creators(creators: &[Creator], filter: &FilterState) -> Vec<Creator> {
    creators
        .iter()
        .filter(|creator| matches_filters(creator, filter))
        .cloned()
        .collect()
}

/// Stable sort of an owned list; ties keep their incoming order.
pub fn sort_creators(
    mut creators: Vec<Creator>,
    mode: SortMode,
    collation: &impl Collation,
) -> Vec<Creator> {
    match mode {
        SortMode::Default => creators.sort_by(|a, b| {
            a.rank()
                .cmp(&b.rank())
                .then_with(|| collation.compare(a.phonetic_key(), b.phonetic_key()))
        }),
        SortMode::Manual => creators.sort_by_key(Creator::rank),
        SortMode::Updated => {
            creators.sort_by_key(|creator| std::cmp::Reverse(creator.updated_millis()))
        }
        SortMode::Kana => {
            creators.sort_by(|a, b| collation.compare(a.phonetic_key(), b.phonetic_key()))
        }
    }
    creators
}

/// Filter then sort.
pub fn apply(
    creators: &[Creator],
    filter: &FilterState,
    collation: &impl Collation,
) -> Vec<Creator> {
    sort_creators(filter_creators(creators, filter), filter.sort, collation)
}
