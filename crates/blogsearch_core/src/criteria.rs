use std::fmt;
use std::str::FromStr;

/// Ordering applied to the filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Newest first.
    #[default]
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortMode {
    pub const ALL: [SortMode; 4] = [
        SortMode::DateDesc,
        SortMode::DateAsc,
        SortMode::TitleAsc,
        SortMode::TitleDesc,
    ];

    /// Option value used by the sort selector.
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::DateDesc => "date-desc",
            SortMode::DateAsc => "date-asc",
            SortMode::TitleAsc => "title-asc",
            SortMode::TitleDesc => "title-desc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort mode `{0}`")]
pub struct SortModeError(pub String);

impl FromStr for SortMode {
    type Err = SortModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| SortModeError(value.to_string()))
    }
}

/// Active search term, category filter and sort mode.
///
/// Criteria is "active" when either the search term or the category is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Criteria {
    search_term: String,
    category: String,
    sort_mode: SortMode,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, raw: &str) -> Self {
        self.set_search_input(raw);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn with_sort(mut self, mode: SortMode) -> Self {
        self.sort_mode = mode;
        self
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty() || !self.category.is_empty()
    }

    /// Stores the lower-cased contents of the search box.
    pub fn set_search_input(&mut self, raw: &str) {
        self.search_term = raw.to_lowercase();
    }

    /// Selecting the active category clears it; any other value replaces it.
    pub fn toggle_category(&mut self, category: &str) {
        if self.category == category {
            self.category.clear();
        } else {
            self.category = category.to_string();
        }
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }
}
