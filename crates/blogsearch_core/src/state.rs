use crate::view_model::{count_text, DisplayView, WidgetView};
use crate::{filter_and_sort, Criteria, Dataset, Post};

/// Progress of the one-shot dataset load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Uninitialized,
    /// Waiting on the fallback fetch.
    Loading,
    Ready,
    /// No dataset could be obtained; criteria events are ignored for good.
    Unavailable,
}

/// Everything the widget knows for the lifetime of one page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    load: LoadState,
    posts: Vec<Post>,
    criteria: Criteria,
    original_markup: Option<String>,
    markup_captured: bool,
    results: Vec<Post>,
    dirty: bool,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> LoadState {
        self.load
    }

    pub fn is_ready(&self) -> bool {
        self.load == LoadState::Ready
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Result view for the current criteria; empty while criteria is inactive.
    pub fn results(&self) -> &[Post] {
        &self.results
    }

    pub fn original_markup(&self) -> Option<&str> {
        self.original_markup.as_deref()
    }

    pub fn view(&self) -> WidgetView {
        let active = self.criteria.is_active();
        let ready = self.is_ready();

        let display = match (ready, active) {
            (false, _) => DisplayView::Inert,
            (true, false) => DisplayView::Pristine {
                original_markup: self.original_markup.clone(),
            },
            (true, true) => DisplayView::Filtered {
                results: self.results.clone(),
            },
        };

        let category = self.criteria.category();
        WidgetView {
            load: self.load,
            display,
            count_text: if ready {
                count_text(active, self.results.len(), self.posts.len())
            } else {
                String::new()
            },
            pagination_visible: !(ready && active),
            active_category: (!category.is_empty()).then(|| category.to_string()),
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Stores the pristine markup. Only the first call has any effect.
    pub(crate) fn capture_original_markup(&mut self, markup: Option<String>) {
        if self.markup_captured {
            return;
        }
        self.original_markup = markup;
        self.markup_captured = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    pub(crate) fn install_dataset(&mut self, dataset: Dataset) {
        self.posts = dataset.blogs;
        self.load = LoadState::Ready;
        self.recompute();
    }

    pub(crate) fn mark_unavailable(&mut self) {
        self.load = LoadState::Unavailable;
        self.posts.clear();
        self.results.clear();
    }

    pub(crate) fn criteria_mut(&mut self) -> &mut Criteria {
        &mut self.criteria
    }

    /// Re-derives the result view from the immutable dataset and flags a render.
    pub(crate) fn recompute(&mut self) {
        if self.criteria.is_active() {
            self.results = filter_and_sort(&self.posts, &self.criteria);
        } else {
            self.results.clear();
        }
        self.dirty = true;
    }
}
