use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::bail;
use blogsearch_core::{update, Msg, SearchState, SortMode, WidgetView};
use blogsearch_engine::{
    DataLoader, DatasetWriter, FetchSettings, Location, PageSelectors, PageSnapshot,
    ReqwestFetcher,
};
use widget_logging::{widget_debug, widget_info, widget_warn};

use super::dom::HeadlessDom;
use super::effects::EffectRunner;
use super::page::load_page;
use super::ui;
use crate::cli::{Command, ExportArgs, QueryArgs};

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query(args) => run_query(args).await,
        Command::Export(args) => run_export(args).await,
    }
}

async fn run_query(args: QueryArgs) -> anyhow::Result<()> {
    let selectors = PageSelectors::from(args.selectors);
    let location = Location::parse(&args.page);
    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));

    let page = load_page(fetcher.as_ref(), &location, &selectors).await?;
    let loader = DataLoader::new(fetcher, page.location)
        .with_data_override(args.data.as_deref().map(Location::parse));
    let mut host = WidgetHost::start(page.snapshot, loader).await;

    if let Some(text) = args.search.as_deref() {
        host.type_search(text).await;
    }
    for category in &args.categories {
        host.click_category(category).await;
    }
    if let Some(value) = args.sort.as_deref() {
        host.select_sort(value).await;
    }

    widget_debug!("Final load state {:?}", host.view().load);
    print!("{}", report(host.dom()));
    Ok(())
}

async fn run_export(args: ExportArgs) -> anyhow::Result<()> {
    let selectors = PageSelectors::from(args.selectors);
    let location = Location::parse(&args.page);
    let fetcher = Arc::new(ReqwestFetcher::new(FetchSettings::default()));

    let page = load_page(fetcher.as_ref(), &location, &selectors).await?;
    let loader = DataLoader::new(fetcher, page.location);
    let Some(dataset) = loader.embedded(&page.snapshot) else {
        bail!("page {location} has no embedded blog data");
    };

    let path = DatasetWriter::new(args.out).write(&dataset)?;
    println!("{}", path.display());
    Ok(())
}

fn report(dom: &HeadlessDom) -> String {
    let count = match dom.result_count() {
        Some(text) if !text.is_empty() => text.to_string(),
        Some(_) => "(empty)".to_string(),
        None => "(no count indicator)".to_string(),
    };
    let pagination = if dom.has_pagination() {
        dom.pagination_display().unwrap_or("(unset)").to_string()
    } else {
        "(no pagination)".to_string()
    };
    let active = dom.active_categories();
    let active = if active.is_empty() {
        "(none)".to_string()
    } else {
        active.join(", ")
    };
    let sort = dom.sort_value().unwrap_or("(no sort selector)");
    format!(
        "count: {count}\npagination: {pagination}\nactive category: {active}\nsort: {sort}\n\n{}\n",
        dom.results_html().unwrap_or("(no display region)")
    )
}

/// Drives one widget instance for the lifetime of a page.
///
/// Plays the browser's part: forwards control events as messages, runs the
/// resulting effects and applies render commands to the headless DOM.
pub struct WidgetHost {
    state: SearchState,
    dom: HeadlessDom,
    effects: EffectRunner,
}

impl WidgetHost {
    /// Captures the display region and performs the one-shot dataset load.
    pub async fn start(page: PageSnapshot, loader: DataLoader) -> Self {
        widget_info!("BlogSearch initializing...");
        let dom = HeadlessDom::from_snapshot(&page);
        let effects = EffectRunner::new(loader);
        let embedded = effects.loader().embedded(&page);

        let mut host = Self {
            state: SearchState::new(),
            dom,
            effects,
        };
        host.dispatch(Msg::PageLoaded {
            embedded,
            original_markup: page.original_markup,
        })
        .await;

        if host.state.is_ready() {
            widget_info!("BlogSearch initialization complete");
        }
        host
    }

    pub fn dom(&self) -> &HeadlessDom {
        &self.dom
    }

    pub fn view(&self) -> WidgetView {
        self.state.view()
    }

    pub async fn type_search(&mut self, text: &str) {
        if !self.dom.set_search_value(text) {
            widget_warn!("Page has no search box; ignoring search input");
            return;
        }
        self.dispatch(Msg::SearchInput(text.to_string())).await;
    }

    pub async fn click_category(&mut self, category: &str) {
        if !self.dom.has_category(category) {
            widget_warn!("Page has no selector for category `{}`; ignoring click", category);
            return;
        }
        self.dispatch(Msg::CategoryClicked(category.to_string()))
            .await;
    }

    pub async fn select_sort(&mut self, value: &str) {
        if !self.dom.select_sort_option(value) {
            widget_warn!("Sort selector missing or has no option `{}`", value);
            return;
        }
        match value.parse::<SortMode>() {
            Ok(mode) => self.dispatch(Msg::SortChanged(mode)).await,
            Err(err) => widget_warn!("Ignoring sort change: {}", err),
        }
    }

    async fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            let was_dirty = state.consume_dirty();
            self.state = state;

            if was_dirty {
                let commands = ui::render::render(&self.state.view());
                widget_debug!("Applying {} DOM commands", commands.len());
                self.dom.apply(commands);
            }
            for effect in effects {
                if let Some(reply) = self.effects.run(effect).await {
                    inbox.push_back(reply);
                }
            }
        }
    }
}
