//! Display descriptions of the gallery, independent of any UI toolkit.
//!
//! The frontend commits a [`PageView`] to the DOM as a full re-render.

use crate::config::GalleryConfig;
use crate::creator::Creator;

/// Hard cap on tag chips per card.
pub const MAX_TAG_CHIPS: usize = 6;

const ROLE_SEPARATOR: &str = " / ";

#[derive(Debug, Clone, PartialEq)]
pub enum Thumbnail {
    Image { src: String, alt: String },
    Placeholder(String),
}

/// Everything a card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub href: String,
    pub thumbnail: Thumbnail,
    pub name: String,
    pub base: String,
    /// `None` when the record has no role.
    pub roles: Option<String>,
    /// Empty when the record has no tags.
    pub tags: Vec<String>,
}

impl CardView {
    pub fn from_creator(creator: &Creator, config: &GalleryConfig) -> Self {
        let labels = &config.labels;
        let thumbnail = if creator.thumb.is_empty() {
            Thumbnail::Placeholder(labels.no_image.clone())
        } else {
            Thumbnail::Image {
                src: creator.thumb.clone(),
                alt: format!("{} {}", creator.name, labels.thumbnail_alt_suffix),
            }
        };
        let chip_limit = config.display.max_tag_chips.min(MAX_TAG_CHIPS);

        Self {
            href: creator.link().to_string(),
            thumbnail,
            name: creator.display_name(&labels.noname).to_string(),
            base: creator.base.clone(),
            roles: (!creator.role.is_empty()).then(|| creator.role.join(ROLE_SEPARATOR)),
            tags: creator.tags.iter().take(chip_limit).cloned().collect(),
        }
    }
}

pub fn render_cards(creators: &[Creator], config: &GalleryConfig) -> Vec<CardView> {
    creators
        .iter()
        .map(|creator| CardView::from_creator(creator, config))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Loading(String),
    Cards(Vec<CardView>),
    /// Terminal failure; replaces the whole grid.
    Message(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub grid: GridView,
    pub count: String,
}

impl PageView {
    pub fn loading(config: &GalleryConfig) -> Self {
        Self {
            grid: GridView::Loading(config.labels.loading.clone()),
            count: String::new(),
        }
    }

    pub fn cards(creators: &[Creator], config: &GalleryConfig) -> Self {
        Self {
            grid: GridView::Cards(render_cards(creators, config)),
            count: config.count_label(creators.len()),
        }
    }

    pub fn failed(config: &GalleryConfig) -> Self {
        Self {
            grid: GridView::Message(config.failure_message()),
            count: config.count_label(0),
        }
    }
}
