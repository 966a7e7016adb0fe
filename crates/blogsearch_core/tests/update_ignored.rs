use blogsearch_core::{update, Dataset, LoadState, Msg, SearchState, SortMode};

#[test]
fn fetch_result_without_pending_load_is_ignored() {
    let state = SearchState::new();
    let (next, effects) = update(state.clone(), Msg::DatasetFetched(Ok(Dataset::default())));
    assert_eq!(state, next);
    assert!(effects.is_empty());

    let (next, effects) = update(state.clone(), Msg::DatasetFetched(Err("offline".to_string())));
    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn criteria_events_before_load_are_ignored() {
    let state = SearchState::new();
    let (state, _) = update(state, Msg::SearchInput("rust".to_string()));
    let (state, _) = update(state, Msg::CategoryClicked("tech".to_string()));
    let (mut state, effects) = update(state, Msg::SortChanged(SortMode::TitleAsc));

    assert!(effects.is_empty());
    assert_eq!(state.load_state(), LoadState::Uninitialized);
    assert!(!state.criteria().is_active());
    assert!(!state.consume_dirty());
}
