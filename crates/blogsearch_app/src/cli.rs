use std::path::PathBuf;

use blogsearch_engine::PageSelectors;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

/// Command-line arguments for the headless blog search host.
#[derive(Debug, Parser)]
#[command(
    name = "blogsearch",
    version,
    about = "Search, filter and sort a generated blog listing page"
)]
pub struct CliArgs {
    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, global = true, default_value = "info", value_parser = parse_level_arg)]
    pub log_level: LevelFilter,

    /// Also write logs to this file.
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a listing page, apply search/category/sort events and print the result.
    Query(QueryArgs),
    /// Write the page's embedded dataset to `blogs.json`.
    Export(ExportArgs),
}

#[derive(Debug, Args, Clone)]
pub struct QueryArgs {
    /// Listing page: a file path or an http(s) URL.
    #[arg(value_name = "PAGE")]
    pub page: String,

    /// Text typed into the search box.
    #[arg(long)]
    pub search: Option<String>,

    /// Category selector to click; repeat to click several in order.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Sort selector value (date-desc, date-asc, title-asc, title-desc).
    #[arg(long)]
    pub sort: Option<String>,

    /// Dataset location used when the page has no embedded data.
    #[arg(long, value_name = "PATH_OR_URL")]
    pub data: Option<String>,

    #[command(flatten)]
    pub selectors: SelectorArgs,
}

#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    /// Listing page: a file path or an http(s) URL.
    #[arg(value_name = "PAGE")]
    pub page: String,

    /// Directory receiving `blogs.json`.
    #[arg(long, value_name = "DIR")]
    pub out: PathBuf,

    #[command(flatten)]
    pub selectors: SelectorArgs,
}

/// Overrides for the DOM collaborator selectors.
#[derive(Debug, Args, Clone)]
pub struct SelectorArgs {
    #[arg(long = "search-selector", default_value = "#blog-search")]
    pub search_input: String,
    #[arg(long = "category-selector", default_value = ".category-filter")]
    pub category_filter: String,
    #[arg(long = "sort-selector", default_value = "#blog-sort")]
    pub sort_select: String,
    #[arg(long = "results-selector", default_value = "#search-results")]
    pub results: String,
    #[arg(long = "count-selector", default_value = "#result-count")]
    pub result_count: String,
    #[arg(long = "pagination-selector", default_value = ".pagination")]
    pub pagination: String,
}

impl From<SelectorArgs> for PageSelectors {
    fn from(args: SelectorArgs) -> Self {
        PageSelectors {
            search_input: args.search_input,
            category_filter: args.category_filter,
            sort_select: args.sort_select,
            results: args.results,
            result_count: args.result_count,
            pagination: args.pagination,
        }
    }
}

fn parse_level_arg(value: &str) -> Result<LevelFilter, String> {
    widget_logging::parse_level(value).ok_or_else(|| format!("unknown log level `{value}`"))
}
