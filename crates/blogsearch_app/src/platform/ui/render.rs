use blogsearch_core::{DisplayView, WidgetView};
use blogsearch_engine::render_results;

use super::constants::{PAGINATION_HIDDEN, PAGINATION_SHOWN};

/// Mutations the widget applies to its DOM collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    SetResultsHtml(String),
    SetResultCountText(String),
    SetPaginationDisplay(&'static str),
    /// Mark exactly this category selector active; `None` clears them all.
    SetActiveCategory(Option<String>),
}

pub fn render(view: &WidgetView) -> Vec<DomCommand> {
    let mut cmds = Vec::with_capacity(4);

    let results_html = match &view.display {
        DisplayView::Inert => return cmds,
        DisplayView::Pristine { original_markup } => original_markup.clone(),
        DisplayView::Filtered { results } => Some(render_results(results)),
    };

    cmds.push(DomCommand::SetPaginationDisplay(if view.pagination_visible {
        PAGINATION_SHOWN
    } else {
        PAGINATION_HIDDEN
    }));
    if let Some(html) = results_html {
        cmds.push(DomCommand::SetResultsHtml(html));
    }
    cmds.push(DomCommand::SetResultCountText(view.count_text.clone()));
    cmds.push(DomCommand::SetActiveCategory(view.active_category.clone()));
    cmds
}
