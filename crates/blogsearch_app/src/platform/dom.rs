use blogsearch_engine::{CategoryControl, PageSnapshot};
use widget_logging::{widget_debug, widget_trace};

use super::ui::render::DomCommand;

/// In-memory stand-in for the page's DOM collaborators.
///
/// `None` fields are elements the page does not have; commands aimed at them
/// are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessDom {
    results_html: Option<String>,
    result_count: Option<String>,
    /// Inline `display` of the pagination container; `Some(None)` means unset.
    pagination_display: Option<Option<&'static str>>,
    categories: Vec<CategoryControl>,
    search_value: Option<String>,
    sort_options: Option<Vec<String>>,
    sort_value: Option<String>,
}

impl HeadlessDom {
    pub fn from_snapshot(page: &PageSnapshot) -> Self {
        Self {
            results_html: page.original_markup.clone(),
            result_count: page.result_count.clone(),
            pagination_display: page.has_pagination.then_some(None),
            categories: page.category_filters.clone(),
            search_value: page.search_input.clone(),
            sort_value: page
                .sort_options
                .as_ref()
                .and_then(|options| options.first().cloned()),
            sort_options: page.sort_options.clone(),
        }
    }

    pub fn results_html(&self) -> Option<&str> {
        self.results_html.as_deref()
    }

    pub fn result_count(&self) -> Option<&str> {
        self.result_count.as_deref()
    }

    pub fn has_pagination(&self) -> bool {
        self.pagination_display.is_some()
    }

    pub fn pagination_display(&self) -> Option<&'static str> {
        self.pagination_display.flatten()
    }

    pub fn active_categories(&self) -> Vec<&str> {
        self.categories
            .iter()
            .filter(|control| control.active)
            .map(|control| control.category.as_str())
            .collect()
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|control| control.category == category)
    }

    pub fn sort_value(&self) -> Option<&str> {
        self.sort_value.as_deref()
    }

    /// Types `text` into the search box. Returns false when there is no search box.
    pub fn set_search_value(&mut self, text: &str) -> bool {
        match self.search_value.as_mut() {
            Some(value) => {
                *value = text.to_string();
                true
            }
            None => false,
        }
    }

    /// Picks an option of the sort selector. Returns false when the selector
    /// is missing or has no such option.
    pub fn select_sort_option(&mut self, value: &str) -> bool {
        let known = self
            .sort_options
            .as_ref()
            .is_some_and(|options| options.iter().any(|option| option == value));
        if known {
            self.sort_value = Some(value.to_string());
        }
        known
    }

    pub fn apply(&mut self, commands: Vec<DomCommand>) {
        for command in commands {
            widget_trace!("Applying {:?}", command);
            match command {
                DomCommand::SetResultsHtml(html) => match self.results_html.as_mut() {
                    Some(region) => *region = html,
                    None => widget_debug!("No display region; skipping render"),
                },
                DomCommand::SetResultCountText(text) => {
                    if let Some(count) = self.result_count.as_mut() {
                        *count = text;
                    }
                }
                DomCommand::SetPaginationDisplay(display) => {
                    if let Some(current) = self.pagination_display.as_mut() {
                        *current = Some(display);
                    }
                }
                DomCommand::SetActiveCategory(active) => {
                    for control in &mut self.categories {
                        control.active = active.as_deref() == Some(control.category.as_str());
                    }
                }
            }
        }
    }
}
