#![deny(missing_docs)]
//! Logging for the blog search widget.
//!
//! The widget reports what it does the way the browser widget writes to the
//! console: which data source won at startup, how many posts were loaded, and
//! why a load left it inert. Criteria events and render passes log at debug.
//! Every crate goes through the `widget_*` macros so the binary's `simplelog`
//! setup sees one consistent stream.
//!
//! ```
//! use widget_logging::{widget_error, widget_info};
//!
//! widget_info!("Using embedded blog data, loaded {} blogs", 12);
//! widget_error!("Failed to load blog data: {}", "blogs.json: 404 Not Found");
//! ```

use log::LevelFilter;

/// Fine-grained detail, such as individual DOM commands.
#[macro_export]
macro_rules! widget_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Startup milestones: page loaded, data source chosen, dataset size.
#[macro_export]
macro_rules! widget_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Criteria events, recomputes and render passes.
#[macro_export]
macro_rules! widget_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Input the widget drops: unknown sort values, missing controls, bad embedded data.
#[macro_export]
macro_rules! widget_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Load failures that leave the widget inert.
#[macro_export]
macro_rules! widget_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Parses a level name such as `"debug"` or `"OFF"` into a [`LevelFilter`].
///
/// Returns `None` for names the `log` crate does not recognise.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse::<LevelFilter>().ok()
}

/// Routes widget logs to the terminal while tests run.
///
/// Later calls after a logger is installed do nothing.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
