use anyhow::Context;
use blogsearch_engine::{
    decode_html, inspect_page, Fetcher, Location, PageSelectors, PageSnapshot, ResourceKind,
};
use widget_logging::widget_info;

/// An inspected page and where it was actually served from.
pub struct LoadedPage {
    pub snapshot: PageSnapshot,
    /// Final location after redirects; relative resources resolve against it.
    pub location: Location,
}

/// Retrieves, decodes and inspects a listing page.
pub async fn load_page(
    fetcher: &dyn Fetcher,
    location: &Location,
    selectors: &PageSelectors,
) -> anyhow::Result<LoadedPage> {
    let output = fetcher
        .fetch(location, ResourceKind::Page)
        .await
        .with_context(|| format!("loading page {location}"))?;
    let decoded = decode_html(&output.bytes, output.content_type.as_deref())
        .with_context(|| format!("decoding page {location}"))?;
    widget_info!(
        "Loaded page {} ({} bytes, {})",
        output.final_location,
        output.bytes.len(),
        decoded.encoding_label
    );

    let snapshot = inspect_page(&decoded.html, selectors)?;
    widget_info!(
        "Page offers {} category selectors, embedded data: {}",
        snapshot.category_filters.len(),
        snapshot.embedded_data.is_some()
    );
    Ok(LoadedPage {
        snapshot,
        location: output.final_location,
    })
}
