use serde::{Deserialize, Serialize};

use crate::error::GalleryError;
use crate::filter::SortMode;
use crate::loader::DEFAULT_DATA_PATH;

// ===== CONFIG TYPES =====

/// Page configuration, read from `gallery.toml`.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    pub app: AppSection,
    pub data: DataSection,
    pub display: DisplaySection,
    pub labels: LabelsSection,
}

impl GalleryConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, GalleryError> {
        let config: Self =
            toml::from_str(source).map_err(|error| GalleryError::Config(error.to_string()))?;
        if !config.app.is_supported_version() {
            return Err(GalleryError::Config(format!(
                "unsupported config version '{}' (expected {})",
                config.app.version,
                AppSection::CURRENT_VERSION
            )));
        }
        Ok(config)
    }

    /// User-visible failure text with `{path}` replaced by the data path.
    pub fn failure_message(&self) -> String {
        let path = self.data.path.trim_start_matches("./");
        self.labels.load_failed.replace("{path}", path)
    }

    pub fn count_label(&self, count: usize) -> String {
        format!("{} {}", count, self.labels.count_suffix)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        matches!(self.version.as_str(), "1.0.0")
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DataSection {
    /// Relative path of the creators document.
    pub path: String,
    /// Append a `ts=<millis>` query to defeat intermediate caches.
    pub cache_bust: bool,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATA_PATH.to_string(),
            cache_bust: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplaySection {
    pub default_sort: SortMode,
    /// Capped at [`crate::view::MAX_TAG_CHIPS`].
    pub max_tag_chips: usize,
    pub show_role_filter: bool,
    pub show_sort_control: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            default_sort: SortMode::Default,
            max_tag_chips: crate::view::MAX_TAG_CHIPS,
            show_role_filter: false,
            show_sort_control: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LabelsSection {
    pub title: String,
    pub search_placeholder: String,
    pub all_bases: String,
    pub all_tags: String,
    pub all_roles: String,
    pub reset: String,
    pub no_image: String,
    pub noname: String,
    pub thumbnail_alt_suffix: String,
    pub count_suffix: String,
    pub loading: String,
    pub load_failed: String,
}

impl Default for LabelsSection {
    fn default() -> Self {
        Self {
            title: "Creators".to_string(),
            search_placeholder: "名前・拠点・タグで検索".to_string(),
            all_bases: "すべての拠点".to_string(),
            all_tags: "すべてのTags".to_string(),
            all_roles: "すべての肩書き".to_string(),
            reset: "リセット".to_string(),
            no_image: "no image".to_string(),
            noname: "noname".to_string(),
            thumbnail_alt_suffix: "サムネイル".to_string(),
            count_suffix: "件".to_string(),
            loading: "読み込み中…".to_string(),
            load_failed: "読み込みに失敗しました（{path} を確認してね）".to_string(),
        }
    }
}
