//! GalleryController - owns the page session and applies user events to it.

use futures::{StreamExt, select};
use shared::{
    Creator, FilterOptions, FilterState, GalleryConfig, GallerySession, LoadError, PageView,
    SortMode,
};
use std::sync::Arc;
use zoon::Signal;

use crate::collation::IntlCollation;
use crate::dataflow::{Actor, Relay, relay};

/// Interaction controller.
///
/// The session lives inside an [`Actor`]; every relay updates exactly one
/// field, and the page view is re-derived from the session on each change.
#[derive(Clone)]
pub struct GalleryController {
    session: Actor<GallerySession>,
    config: Arc<GalleryConfig>,
    collation: IntlCollation,

    // === LOADER EVENTS ===
    pub data_loaded_relay: Relay<Vec<Creator>>,
    pub load_failed_relay: Relay<LoadError>,

    // === USER EVENTS ===
    pub query_changed_relay: Relay<String>,
    pub base_selected_relay: Relay<String>,
    pub tag_selected_relay: Relay<String>,
    pub role_selected_relay: Relay<String>,
    pub sort_selected_relay: Relay<SortMode>,
    pub reset_pressed_relay: Relay<()>,
}

impl GalleryController {
    pub fn new(config: Arc<GalleryConfig>, collation: IntlCollation) -> Self {
        let (data_loaded_relay, mut data_loaded_stream) = relay::<Vec<Creator>>();
        let (load_failed_relay, mut load_failed_stream) = relay::<LoadError>();
        let (query_changed_relay, mut query_changed_stream) = relay::<String>();
        let (base_selected_relay, mut base_selected_stream) = relay::<String>();
        let (tag_selected_relay, mut tag_selected_stream) = relay::<String>();
        let (role_selected_relay, mut role_selected_stream) = relay::<String>();
        let (sort_selected_relay, mut sort_selected_stream) = relay::<SortMode>();
        let (reset_pressed_relay, mut reset_pressed_stream) = relay::<()>();

        let session = Actor::new(GallerySession::new(config.display.default_sort), {
            let config = config.clone();
            let collation = collation.clone();
            async move |state| {
                loop {
                    select! {
                        records = data_loaded_stream.next() => {
                            let Some(records) = records else { break };
                            let options =
                                FilterOptions::from_creators(&records, &config.labels, &collation);
                            zoon::println!(
                                "[APP] ready: {} bases, {} tags, {} roles",
                                options.bases.len() - 1,
                                options.tags.len() - 1,
                                options.roles.len() - 1
                            );
                            state.lock_mut().loaded(records, options);
                        }
                        error = load_failed_stream.next() => {
                            let Some(error) = error else { break };
                            state.lock_mut().failed(error);
                        }
                        query = query_changed_stream.next() => {
                            let Some(query) = query else { break };
                            state.lock_mut().set_query(&query);
                        }
                        base = base_selected_stream.next() => {
                            let Some(base) = base else { break };
                            state.lock_mut().set_base(base);
                        }
                        tag = tag_selected_stream.next() => {
                            let Some(tag) = tag else { break };
                            state.lock_mut().set_tag(tag);
                        }
                        role = role_selected_stream.next() => {
                            let Some(role) = role else { break };
                            state.lock_mut().set_role(role);
                        }
                        sort = sort_selected_stream.next() => {
                            let Some(sort) = sort else { break };
                            state.lock_mut().set_sort(sort);
                        }
                        reset = reset_pressed_stream.next() => {
                            if reset.is_none() { break }
                            state.lock_mut().reset();
                        }
                    }
                }
            }
        });

        Self {
            session,
            config,
            collation,
            data_loaded_relay,
            load_failed_relay,
            query_changed_relay,
            base_selected_relay,
            tag_selected_relay,
            role_selected_relay,
            sort_selected_relay,
            reset_pressed_relay,
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Grid and count, recomputed in full on every session change.
    pub fn page_view_signal(&self) -> impl Signal<Item = PageView> + use<> {
        let config = self.config.clone();
        let collation = self.collation.clone();
        self.session
            .signal_ref(move |session| session.view(&config, &collation))
    }

    pub fn filter_signal(&self) -> impl Signal<Item = FilterState> + use<> {
        self.session.signal_ref(|session| session.filter().clone())
    }

    pub fn options_signal(&self) -> impl Signal<Item = FilterOptions> + use<> {
        self.session.signal_ref(|session| session.options().clone())
    }

    pub fn reset_generation_signal(&self) -> impl Signal<Item = u32> + use<> {
        self.session.signal_ref(GallerySession::reset_generation)
    }
}
