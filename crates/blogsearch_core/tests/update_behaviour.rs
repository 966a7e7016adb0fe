use std::sync::Once;

use blogsearch_core::{
    update, Dataset, DisplayView, Effect, LoadState, Msg, Post, SearchState, SortMode,
    DATASET_RESOURCE,
};
use pretty_assertions::assert_eq;

const ORIGINAL: &str = "<article class=\"blog-item\">page 1</article>";

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(widget_logging::initialize_for_tests);
}

fn post(title: &str, excerpt: &str, category: &str, timestamp: i64) -> Post {
    Post {
        id: None,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        category: category.to_string(),
        url: format!("blog/{}.html", title.to_lowercase()),
        publish_date: "January 1, 2024".to_string(),
        timestamp,
    }
}

fn alpha_beta() -> Dataset {
    Dataset::new(vec![
        post("Alpha", "", "tech", 200),
        post("Beta", "alpha inside", "life", 100),
    ])
}

fn ready_state(dataset: Dataset) -> SearchState {
    let (mut state, effects) = update(
        SearchState::new(),
        Msg::PageLoaded {
            embedded: Some(dataset),
            original_markup: Some(ORIGINAL.to_string()),
        },
    );
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    state
}

fn titles(view: &DisplayView) -> Vec<String> {
    match view {
        DisplayView::Filtered { results } => results.iter().map(|p| p.title.clone()).collect(),
        other => panic!("expected filtered view, got {other:?}"),
    }
}

#[test]
fn embedded_dataset_goes_straight_to_ready_and_pristine() {
    init_logging();
    let state = ready_state(alpha_beta());
    let view = state.view();

    assert_eq!(view.load, LoadState::Ready);
    assert_eq!(
        view.display,
        DisplayView::Pristine {
            original_markup: Some(ORIGINAL.to_string())
        }
    );
    assert_eq!(view.count_text, "");
    assert!(view.pagination_visible);
    assert_eq!(state.posts().len(), 2);
}

#[test]
fn missing_embedded_data_requests_a_single_fetch() {
    init_logging();
    let (state, effects) = update(
        SearchState::new(),
        Msg::PageLoaded {
            embedded: None,
            original_markup: Some(ORIGINAL.to_string()),
        },
    );
    assert_eq!(state.load_state(), LoadState::Loading);
    assert_eq!(
        effects,
        vec![Effect::FetchDataset {
            resource: DATASET_RESOURCE.to_string()
        }]
    );
    assert_eq!(state.view().display, DisplayView::Inert);

    let (state, effects) = update(state, Msg::DatasetFetched(Ok(alpha_beta())));
    assert!(effects.is_empty());
    assert_eq!(state.load_state(), LoadState::Ready);
    assert_eq!(state.original_markup(), Some(ORIGINAL));
}

#[test]
fn failed_fetch_leaves_widget_inert() {
    init_logging();
    let (state, _) = update(
        SearchState::new(),
        Msg::PageLoaded {
            embedded: None,
            original_markup: Some(ORIGINAL.to_string()),
        },
    );
    let (state, effects) = update(
        state,
        Msg::DatasetFetched(Err("missing field `blogs`".to_string())),
    );
    assert_eq!(
        effects,
        vec![Effect::ReportLoadFailure {
            reason: "missing field `blogs`".to_string()
        }]
    );
    assert_eq!(state.load_state(), LoadState::Unavailable);

    let (mut state, effects) = update(state, Msg::SearchInput("alpha".to_string()));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    let view = state.view();
    assert_eq!(view.display, DisplayView::Inert);
    assert_eq!(view.count_text, "");
}

#[test]
fn second_page_load_is_ignored_and_markup_is_not_overwritten() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            embedded: None,
            original_markup: Some("<p>rendered</p>".to_string()),
        },
    );
    assert!(effects.is_empty());
    assert_eq!(state.original_markup(), Some(ORIGINAL));
    assert_eq!(state.posts().len(), 2);
}

#[test]
fn late_fetch_result_after_embedded_load_is_ignored() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (state, effects) = update(state, Msg::DatasetFetched(Ok(Dataset::default())));
    assert!(effects.is_empty());
    assert_eq!(state.posts().len(), 2);
}

#[test]
fn search_alpha_matches_title_and_excerpt_newest_first() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (mut state, _) = update(state, Msg::SearchInput("ALPHA".to_string()));

    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(titles(&view.display), vec!["Alpha", "Beta"]);
    assert_eq!(view.count_text, "Showing all 2 posts");
    assert!(!view.pagination_visible);
}

#[test]
fn sort_change_reorders_filtered_results() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (state, _) = update(state, Msg::SearchInput("alpha".to_string()));
    let (state, _) = update(state, Msg::SortChanged(SortMode::DateAsc));
    assert_eq!(titles(&state.view().display), vec!["Beta", "Alpha"]);

    let (state, _) = update(state, Msg::SortChanged(SortMode::TitleDesc));
    assert_eq!(titles(&state.view().display), vec!["Beta", "Alpha"]);
}

#[test]
fn category_click_filters_and_marks_active() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (state, _) = update(state, Msg::CategoryClicked("tech".to_string()));
    let view = state.view();

    assert_eq!(titles(&view.display), vec!["Alpha"]);
    assert_eq!(view.active_category.as_deref(), Some("tech"));
    assert_eq!(view.count_text, "Showing 1 of 2 posts");
}

#[test]
fn category_toggle_returns_to_pristine() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (state, _) = update(state, Msg::CategoryClicked("tech".to_string()));
    let (mut state, _) = update(state, Msg::CategoryClicked("tech".to_string()));

    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(
        view.display,
        DisplayView::Pristine {
            original_markup: Some(ORIGINAL.to_string())
        }
    );
    assert_eq!(view.active_category, None);
    assert_eq!(view.count_text, "");
    assert!(view.pagination_visible);
}

#[test]
fn category_toggle_keeps_filtered_while_search_is_set() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (state, _) = update(state, Msg::SearchInput("beta".to_string()));
    let (state, _) = update(state, Msg::CategoryClicked("life".to_string()));
    let (state, _) = update(state, Msg::CategoryClicked("life".to_string()));

    let view = state.view();
    assert_eq!(titles(&view.display), vec!["Beta"]);
    assert_eq!(view.active_category, None);
}

#[test]
fn switching_category_replaces_previous_one() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (state, _) = update(state, Msg::CategoryClicked("tech".to_string()));
    let (state, _) = update(state, Msg::CategoryClicked("life".to_string()));

    let view = state.view();
    assert_eq!(titles(&view.display), vec!["Beta"]);
    assert_eq!(view.active_category.as_deref(), Some("life"));
}

#[test]
fn no_match_yields_empty_results_and_zero_count() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (state, _) = update(state, Msg::SearchInput("zzz".to_string()));

    let view = state.view();
    assert_eq!(view.display, DisplayView::Filtered { results: vec![] });
    assert_eq!(view.count_text, "Showing 0 of 2 posts");
}

#[test]
fn clearing_search_restores_original_regardless_of_sort() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (state, _) = update(state, Msg::SearchInput("alpha".to_string()));
    let (state, _) = update(state, Msg::SortChanged(SortMode::TitleAsc));
    let (state, _) = update(state, Msg::SearchInput(String::new()));

    assert!(state.results().is_empty());
    assert_eq!(
        state.view().display,
        DisplayView::Pristine {
            original_markup: Some(ORIGINAL.to_string())
        }
    );
    assert_eq!(state.criteria().sort_mode(), SortMode::TitleAsc);
}

#[test]
fn sort_change_while_pristine_still_renders_pristine() {
    init_logging();
    let state = ready_state(alpha_beta());
    let (mut state, _) = update(state, Msg::SortChanged(SortMode::TitleAsc));

    assert!(state.consume_dirty());
    assert!(matches!(state.view().display, DisplayView::Pristine { .. }));
}
