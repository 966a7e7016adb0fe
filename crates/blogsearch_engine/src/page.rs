use scraper::{ElementRef, Html, Selector};
use widget_logging::widget_debug;

/// Script assignment that carries the embedded dataset.
pub const EMBEDDED_DATA_MARKER: &str = "window.BLOG_DATA";

/// CSS selectors for the DOM collaborators the widget talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelectors {
    pub search_input: String,
    /// Category selectors; each carries its identifier in `data-category`.
    pub category_filter: String,
    pub sort_select: String,
    pub results: String,
    pub result_count: String,
    pub pagination: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            search_input: "#blog-search".to_string(),
            category_filter: ".category-filter".to_string(),
            sort_select: "#blog-sort".to_string(),
            results: "#search-results".to_string(),
            result_count: "#result-count".to_string(),
            pagination: ".pagination".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryControl {
    pub category: String,
    pub label: String,
    pub active: bool,
}

/// What the page offers the widget at load time.
///
/// Every collaborator is optional; a missing one disables only the feature
/// that needs it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSnapshot {
    /// Inner HTML of the display region, captured before any render.
    pub original_markup: Option<String>,
    /// Raw script text following the `window.BLOG_DATA` assignment.
    pub embedded_data: Option<String>,
    /// Current `value` of the search box, if the page has one.
    pub search_input: Option<String>,
    pub category_filters: Vec<CategoryControl>,
    /// Option values of the sort selector, if the page has one.
    pub sort_options: Option<Vec<String>>,
    pub result_count: Option<String>,
    pub has_pagination: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

struct CompiledSelectors {
    search_input: Selector,
    category_filter: Selector,
    sort_select: Selector,
    sort_option: Selector,
    results: Selector,
    result_count: Selector,
    pagination: Selector,
    script: Selector,
}

impl CompiledSelectors {
    fn compile(selectors: &PageSelectors) -> Result<Self, PageError> {
        Ok(Self {
            search_input: compile(&selectors.search_input)?,
            category_filter: compile(&selectors.category_filter)?,
            sort_select: compile(&selectors.sort_select)?,
            sort_option: compile("option")?,
            results: compile(&selectors.results)?,
            result_count: compile(&selectors.result_count)?,
            pagination: compile(&selectors.pagination)?,
            script: compile("script")?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, PageError> {
    Selector::parse(selector).map_err(|err| PageError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Parses a listing page and locates the widget's collaborators in it.
pub fn inspect_page(html: &str, selectors: &PageSelectors) -> Result<PageSnapshot, PageError> {
    let sel = CompiledSelectors::compile(selectors)?;
    let doc = Html::parse_document(html);

    let original_markup = doc.select(&sel.results).next().map(|el| el.inner_html());
    if original_markup.is_none() {
        widget_debug!("Display region {} not found", selectors.results);
    }

    let search_input = doc
        .select(&sel.search_input)
        .next()
        .map(|el| el.value().attr("value").unwrap_or_default().to_string());

    let category_filters = doc
        .select(&sel.category_filter)
        .filter_map(category_control)
        .collect();

    let sort_options = doc.select(&sel.sort_select).next().map(|select| {
        select
            .select(&sel.sort_option)
            .map(|option| match option.value().attr("value") {
                Some(value) => value.to_string(),
                None => text_of(option),
            })
            .collect()
    });

    let result_count = doc.select(&sel.result_count).next().map(text_of);
    let has_pagination = doc.select(&sel.pagination).next().is_some();

    let embedded_data = doc
        .select(&sel.script)
        .filter(|script| script.value().attr("src").is_none())
        .find_map(|script| embedded_assignment(&script.text().collect::<String>()));

    Ok(PageSnapshot {
        original_markup,
        embedded_data,
        search_input,
        category_filters,
        sort_options,
        result_count,
        has_pagination,
    })
}

fn category_control(el: ElementRef<'_>) -> Option<CategoryControl> {
    let Some(category) = el.value().attr("data-category") else {
        widget_debug!("Skipping category selector without data-category");
        return None;
    };
    Some(CategoryControl {
        category: category.to_string(),
        label: text_of(el),
        active: el.value().classes().any(|class| class == "active"),
    })
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Returns the right-hand side of the first `window.BLOG_DATA = ...` within a
/// script body. Reads and comparisons of the marker are skipped.
fn embedded_assignment(script: &str) -> Option<String> {
    script
        .match_indices(EMBEDDED_DATA_MARKER)
        .find_map(|(index, marker)| {
            let rest = script[index + marker.len()..].trim_start();
            let value = rest.strip_prefix('=')?;
            if value.starts_with('=') {
                return None;
            }
            Some(value.trim().to_string())
        })
}
