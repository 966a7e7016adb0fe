use crate::{Effect, LoadState, Msg, SearchState, DATASET_RESOURCE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SearchState, msg: Msg) -> (SearchState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded {
            embedded,
            original_markup,
        } => {
            // One load per page lifetime.
            if state.load_state() != LoadState::Uninitialized {
                return (state, Vec::new());
            }
            state.capture_original_markup(original_markup);
            match embedded {
                Some(dataset) => {
                    state.install_dataset(dataset);
                    Vec::new()
                }
                None => {
                    state.begin_loading();
                    vec![Effect::FetchDataset {
                        resource: DATASET_RESOURCE.to_string(),
                    }]
                }
            }
        }
        Msg::DatasetFetched(result) => {
            if state.load_state() != LoadState::Loading {
                return (state, Vec::new());
            }
            match result {
                Ok(dataset) => {
                    state.install_dataset(dataset);
                    Vec::new()
                }
                Err(reason) => {
                    state.mark_unavailable();
                    vec![Effect::ReportLoadFailure { reason }]
                }
            }
        }
        Msg::SearchInput(text) if state.is_ready() => {
            state.criteria_mut().set_search_input(&text);
            state.recompute();
            Vec::new()
        }
        Msg::CategoryClicked(category) if state.is_ready() => {
            state.criteria_mut().toggle_category(&category);
            state.recompute();
            Vec::new()
        }
        Msg::SortChanged(mode) if state.is_ready() => {
            state.criteria_mut().set_sort_mode(mode);
            state.recompute();
            Vec::new()
        }
        Msg::SearchInput(_) | Msg::CategoryClicked(_) | Msg::SortChanged(_) => Vec::new(),
    };

    (state, effects)
}
