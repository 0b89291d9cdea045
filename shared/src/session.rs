use std::sync::Arc;

use crate::collation::Collation;
use crate::config::GalleryConfig;
use crate::creator::Creator;
use crate::error::LoadError;
use crate::filter::{FilterState, SortMode, apply};
use crate::options::FilterOptions;
use crate::search::normalize;
use crate::view::PageView;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadPhase {
    Unloaded,
    Ready,
    /// Terminal. Carries the technical error for diagnostics.
    Failed(LoadError),
}

/// State of one page session: loaded records, their filter options and the
/// current filter selection.
///
/// Records are shared behind an `Arc` and never modified after loading.
#[derive(Debug, Clone)]
pub struct GallerySession {
    phase: LoadPhase,
    records: Arc<Vec<Creator>>,
    options: FilterOptions,
    filter: FilterState,
    default_sort: SortMode,
    reset_generation: u32,
}

impl GallerySession {
    pub fn new(default_sort: SortMode) -> Self {
        Self {
            phase: LoadPhase::Unloaded,
            records: Arc::default(),
            options: FilterOptions::default(),
            filter: FilterState::with_sort(default_sort),
            default_sort,
            reset_generation: 0,
        }
    }

    /// Unloaded → Ready. Ignored once the session has failed.
    pub fn loaded(&mut self, records: Vec<Creator>, options: FilterOptions) {
        if matches!(self.phase, LoadPhase::Failed(_)) {
            return;
        }
        self.records = Arc::new(records);
        self.options = options;
        self.phase = LoadPhase::Ready;
    }

    pub fn failed(&mut self, error: LoadError) {
        self.records = Arc::default();
        self.options = FilterOptions::default();
        self.phase = LoadPhase::Failed(error);
    }

    pub fn set_query(&mut self, raw: &str) {
        self.filter.query = normalize(raw);
    }

    pub fn set_base(&mut self, base: String) {
        self.filter.base = base;
    }

    pub fn set_tag(&mut self, tag: String) {
        self.filter.tag = tag;
    }

    pub fn set_role(&mut self, role: String) {
        self.filter.role = role;
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.filter.sort = sort;
    }

    /// Clears every filter and restores the default sort.
    pub fn reset(&mut self) {
        self.filter = FilterState::with_sort(self.default_sort);
        self.reset_generation = self.reset_generation.wrapping_add(1);
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn records(&self) -> &[Creator] {
        &self.records
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Bumped by every [`reset`](Self::reset); inputs clear their text when it changes.
    pub fn reset_generation(&self) -> u32 {
        self.reset_generation
    }

    /// Visible records in display order. Empty unless ready.
    pub fn visible(&self, collation: &impl Collation) -> Vec<Creator> {
        match self.phase {
            LoadPhase::Ready => apply(&self.records, &self.filter, collation),
            LoadPhase::Unloaded | LoadPhase::Failed(_) => Vec::new(),
        }
    }

    pub fn view(&self, config: &GalleryConfig, collation: &impl Collation) -> PageView {
        match self.phase {
            LoadPhase::Unloaded => PageView::loading(config),
            LoadPhase::Ready => PageView::cards(&self.visible(collation), config),
            LoadPhase::Failed(_) => PageView::failed(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collation::KanaCollation;
    use crate::loader::parse_creators;
    use crate::view::{GridView, Thumbnail};

    const SAMPLE: &str = r#"[
        {"name": "Aiko", "kana": "あいこ", "base": "Tokyo", "tags": ["design"], "order": 2},
        {"name": "Ben", "kana": "べん", "base": "Osaka", "tags": ["dev"], "order": 1}
    ]"#;

    fn ready_session(config: &GalleryConfig) -> GallerySession {
        let records = parse_creators(SAMPLE).unwrap();
        let options = FilterOptions::from_creators(&records, &config.labels, &KanaCollation);
        let mut session = GallerySession::new(config.display.default_sort);
        session.loaded(records, options);
        session
    }

    fn card_names(view: &PageView) -> Vec<String> {
        match &view.grid {
            GridView::Cards(cards) => cards.iter().map(|c| c.name.clone()).collect(),
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn test_unloaded_session_shows_loading() {
        let config = GalleryConfig::default();
        let session = GallerySession::new(SortMode::Default);
        let view = session.view(&config, &KanaCollation);
        assert_eq!(view.grid, GridView::Loading("読み込み中…".to_string()));
        assert_eq!(view.count, "");
    }

    #[test]
    fn test_ready_session_renders_sorted_cards() {
        let config = GalleryConfig::default();
        let session = ready_session(&config);
        let view = session.view(&config, &KanaCollation);
        assert_eq!(card_names(&view), vec!["Ben", "Aiko"]);
        assert_eq!(view.count, "2 件");
    }

    #[test]
    fn test_query_is_normalized_on_input() {
        let config = GalleryConfig::default();
        let mut session = ready_session(&config);
        session.set_query("  OSAKA ");
        assert_eq!(session.filter().query, "osaka");
        assert_eq!(card_names(&session.view(&config, &KanaCollation)), vec!["Ben"]);
    }

    #[test]
    fn test_tag_filter_to_nothing_counts_zero() {
        let config = GalleryConfig::default();
        let mut session = ready_session(&config);
        session.set_tag("nonexistent".to_string());
        let view = session.view(&config, &KanaCollation);
        assert!(card_names(&view).is_empty());
        assert_eq!(view.count, "0 件");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut config = GalleryConfig::default();
        config.display.default_sort = SortMode::Kana;
        let mut session = ready_session(&config);
        session.set_query("ben");
        session.set_base("Osaka".to_string());
        session.set_tag("dev".to_string());
        session.set_role("Director".to_string());
        session.set_sort(SortMode::Updated);
        let generation = session.reset_generation();

        session.reset();

        assert_eq!(session.filter(), &FilterState::with_sort(SortMode::Kana));
        assert_ne!(session.reset_generation(), generation);
        assert_eq!(
            card_names(&session.view(&config, &KanaCollation)),
            vec!["Aiko", "Ben"]
        );
    }

    #[test]
    fn test_load_failure_is_terminal() {
        let config = GalleryConfig::default();
        let mut session = GallerySession::new(SortMode::Default);
        session.failed(LoadError::Status {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            url: "./data/creators.json?ts=1".to_string(),
        });

        let view = session.view(&config, &KanaCollation);
        assert_eq!(view.count, "0 件");
        assert_eq!(view.grid, GridView::Message(config.failure_message()));

        session.loaded(parse_creators(SAMPLE).unwrap(), FilterOptions::default());
        assert!(matches!(session.phase(), LoadPhase::Failed(_)));
        assert!(session.records().is_empty());
    }

    #[test]
    fn test_view_leaves_records_untouched() {
        let config = GalleryConfig::default();
        let mut session = ready_session(&config);
        let before = session.records().to_vec();
        session.set_query("aiko");
        let _ = session.view(&config, &KanaCollation);
        session.set_sort(SortMode::Kana);
        let _ = session.view(&config, &KanaCollation);
        assert_eq!(session.records(), before.as_slice());
    }

    #[test]
    fn test_thumb_scenarios_through_session() {
        let config = GalleryConfig::default();
        let records = parse_creators(
            r#"[{"name": "A", "order": 1}, {"name": "B", "thumb": "x.png", "order": 2}]"#,
        )
        .unwrap();
        let mut session = GallerySession::new(SortMode::Default);
        session.loaded(records, FilterOptions::default());
        let GridView::Cards(cards) = session.view(&config, &KanaCollation).grid else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].thumbnail, Thumbnail::Placeholder("no image".to_string()));
        assert!(matches!(&cards[1].thumbnail, Thumbnail::Image { src, .. } if src == "x.png"));
    }
}
