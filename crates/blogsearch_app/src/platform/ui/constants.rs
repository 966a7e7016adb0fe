/// Pagination `display` while the server-rendered pages are shown.
pub const PAGINATION_SHOWN: &str = "flex";
/// Pagination `display` while filtered results are shown.
pub const PAGINATION_HIDDEN: &str = "none";
