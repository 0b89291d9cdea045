//! GalleryApp - wires configuration, loader and controller together.

use shared::GalleryConfig;
use std::sync::Arc;
use zoon::*;

use crate::collation::IntlCollation;
use crate::controller::GalleryController;
use crate::data_loader::fetch_creators;

/// Embedded at build time; falls back to defaults when it does not parse.
const GALLERY_TOML: &str = include_str!("../../gallery.toml");

pub struct GalleryApp {
    pub controller: GalleryController,

    /// Keeps the one-shot load alive until it resolves.
    _load_task: TaskHandle,
}

impl GalleryApp {
    pub fn new() -> Self {
        let config = Arc::new(load_config(GALLERY_TOML));
        let controller = GalleryController::new(config.clone(), IntlCollation::display_locale());

        let load_task = Task::start_droppable({
            let data_loaded_relay = controller.data_loaded_relay.clone();
            let load_failed_relay = controller.load_failed_relay.clone();
            async move {
                match fetch_creators(&config).await {
                    Ok(creators) => data_loaded_relay.send(creators),
                    Err(error) => {
                        zoon::eprintln!("[LOADER] {}", error);
                        load_failed_relay.send(error);
                    }
                }
            }
        });

        Self {
            controller,
            _load_task: load_task,
        }
    }

    pub fn root(&self) -> impl Element + use<> {
        crate::views::page(&self.controller)
    }
}

fn load_config(source: &str) -> GalleryConfig {
    match GalleryConfig::from_toml_str(source) {
        Ok(config) => {
            zoon::println!(
                "[CONFIG] data: {}, default sort: {}",
                config.data.path,
                config.display.default_sort.as_str()
            );
            config
        }
        Err(error) => {
            zoon::eprintln!("[CONFIG] {}; using defaults", error);
            GalleryConfig::default()
        }
    }
}
