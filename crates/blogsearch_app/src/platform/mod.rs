mod app;
mod dom;
mod effects;
pub mod logging;
mod page;
mod ui;

pub use app::run;
