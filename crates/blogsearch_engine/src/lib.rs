//! Blog search engine: page inspection, dataset loading, result markup and export.
mod decode;
mod export;
mod fetch;
mod loader;
mod page;
mod render;
mod types;

pub use decode::{decode_html, DecodeError, DecodedHtml};
pub use export::{newest_first, DatasetWriter, PersistError};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use loader::{dataset_from_json, dataset_from_slice, parse_embedded_data, DataLoader};
pub use page::{
    inspect_page, CategoryControl, PageError, PageSelectors, PageSnapshot,
    EMBEDDED_DATA_MARKER,
};
pub use render::{escape_html, render_post, render_results, NO_RESULTS_PLACEHOLDER};
pub use types::{FailureKind, FetchError, FetchOutput, LoadError, Location, ResourceKind};
