use crate::{LoadState, Post};

/// What the display region should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayView {
    /// No dataset yet (or never); the page is left untouched.
    Inert,
    /// No criteria active: restore the server-rendered markup.
    Pristine { original_markup: Option<String> },
    /// Criteria active: show the result view in order.
    Filtered { results: Vec<Post> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView {
    pub load: LoadState,
    pub display: DisplayView,
    pub count_text: String,
    /// Whether the server-rendered pagination control stays shown.
    pub pagination_visible: bool,
    /// Category whose selector carries the active state, if any.
    pub active_category: Option<String>,
}

/// Text for the result count indicator.
pub fn count_text(active: bool, shown: usize, total: usize) -> String {
    if !active {
        String::new()
    } else if shown == total {
        format!("Showing all {total} posts")
    } else {
        format!("Showing {shown} of {total} posts")
    }
}
