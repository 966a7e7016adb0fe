//! Blog search core: pure state machine, filter/sort engine and view-model helpers.
mod criteria;
mod effect;
mod filter;
mod msg;
mod post;
mod state;
mod update;
mod view_model;

pub use criteria::{Criteria, SortMode, SortModeError};
pub use effect::{Effect, DATASET_RESOURCE};
pub use filter::{filter_and_sort, locale_compare, sort_posts};
pub use msg::Msg;
pub use post::{Dataset, Post};
pub use state::{LoadState, SearchState};
pub use update::update;
pub use view_model::{count_text, DisplayView, WidgetView};
