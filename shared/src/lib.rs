//! Creator gallery core: record model, loading, filtering, sorting and the
//! display description the frontend renders.

pub mod collation;
pub mod config;
pub mod creator;
pub mod error;
pub mod filter;
pub mod loader;
pub mod options;
pub mod search;
pub mod session;
pub mod view;

pub use collation::{Collation, KanaCollation};
pub use config::{AppSection, DataSection, DisplaySection, GalleryConfig, LabelsSection};
pub use creator::{Creator, UNRANKED, parse_timestamp_millis};
pub use error::{GalleryError, LoadError};
pub use filter::{FilterState, SortMode, apply, filter_creators, matches_filters, sort_creators};
pub use loader::{DEFAULT_DATA_PATH, data_url, parse_creators};
pub use options::{FilterOptions, SelectOption, build_options, distinct_values, sort_options};
pub use search::{build_index, matches_query, normalize};
pub use session::{GallerySession, LoadPhase};
pub use view::{CardView, GridView, MAX_TAG_CHIPS, PageView, Thumbnail, render_cards};
