use crate::{Dataset, SortMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The page finished loading.
    ///
    /// `original_markup` is the display region's content before any render;
    /// `None` when the page has no display region.
    PageLoaded {
        embedded: Option<Dataset>,
        original_markup: Option<String>,
    },
    /// Outcome of the single fallback fetch.
    DatasetFetched(Result<Dataset, String>),
    /// Current value of the search box (fires on every keystroke).
    SearchInput(String),
    /// A category selector was clicked.
    CategoryClicked(String),
    /// The sort selector changed.
    SortChanged(SortMode),
}
