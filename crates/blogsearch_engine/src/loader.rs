use std::sync::Arc;

use blogsearch_core::Dataset;
use serde_json::Value;
use widget_logging::{widget_info, widget_warn};

use crate::{Fetcher, LoadError, Location, PageSnapshot, ResourceKind};

/// Obtains the dataset from the page itself or from one fallback fetch.
pub struct DataLoader {
    fetcher: Arc<dyn Fetcher>,
    page: Location,
    data_override: Option<Location>,
}

impl DataLoader {
    /// `page` is the location relative resources are resolved against: the
    /// page's final location once redirects are followed.
    pub fn new(fetcher: Arc<dyn Fetcher>, page: Location) -> Self {
        Self {
            fetcher,
            page,
            data_override: None,
        }
    }

    /// Fetch the dataset from `location` instead of the resource next to the page.
    pub fn with_data_override(mut self, location: Option<Location>) -> Self {
        self.data_override = location;
        self
    }

    /// Dataset embedded in the page, if present and well formed.
    ///
    /// A malformed embedded value counts as absent so the fetch fallback runs.
    pub fn embedded(&self, page: &PageSnapshot) -> Option<Dataset> {
        let raw = page.embedded_data.as_deref()?;
        match parse_embedded_data(raw) {
            Ok(dataset) => {
                widget_info!("Using embedded blog data, loaded {} blogs", dataset.len());
                Some(dataset)
            }
            Err(err) => {
                widget_warn!("Ignoring embedded blog data: {}", err);
                None
            }
        }
    }

    /// Performs the single fallback fetch of `resource`.
    pub async fn fetch(&self, resource: &str) -> Result<Dataset, LoadError> {
        let target = match &self.data_override {
            Some(location) => location.clone(),
            None => self.page.join(resource).map_err(|source| LoadError::Fetch {
                location: resource.to_string(),
                source,
            })?,
        };
        widget_info!("Embedded data not available, fetching {}", target);

        let output = self
            .fetcher
            .fetch(&target, ResourceKind::Dataset)
            .await
            .map_err(|source| LoadError::Fetch {
                location: target.to_string(),
                source,
            })?;
        let dataset = dataset_from_slice(&output.bytes)?;
        widget_info!("Fetched blog data, loaded {} blogs", dataset.len());
        Ok(dataset)
    }
}

/// Parses the script text following `window.BLOG_DATA =`.
///
/// Only the first JSON value is read, so the trailing `;` and any further
/// statements are ignored.
pub fn parse_embedded_data(raw: &str) -> Result<Dataset, LoadError> {
    let mut values = serde_json::Deserializer::from_str(raw).into_iter::<Value>();
    match values.next() {
        Some(value) => dataset_from_json(value?),
        None => Err(LoadError::MissingBlogs),
    }
}

pub fn dataset_from_slice(bytes: &[u8]) -> Result<Dataset, LoadError> {
    let value: Value = serde_json::from_slice(bytes)?;
    dataset_from_json(value)
}

/// Validates the `{ "blogs": [...] }` shape and deserializes it.
pub fn dataset_from_json(value: Value) -> Result<Dataset, LoadError> {
    if value.get("blogs").is_none_or(Value::is_null) {
        return Err(LoadError::MissingBlogs);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{dataset_from_json, parse_embedded_data};
    use crate::LoadError;

    #[test]
    fn embedded_value_ignores_trailing_statement() {
        let raw = r#"{"blogs": [{"title": "A", "category": "tech", "url": "a.html",
            "publishDate": "May 1, 2024", "timestamp": 1714521600}]};"#;
        let dataset = parse_embedded_data(raw).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.blogs[0].excerpt, "");
        assert_eq!(dataset.blogs[0].publish_date, "May 1, 2024");
    }

    #[test]
    fn missing_or_null_blogs_is_rejected() {
        assert!(matches!(
            dataset_from_json(json!({"posts": []})),
            Err(LoadError::MissingBlogs)
        ));
        assert!(matches!(
            dataset_from_json(json!({"blogs": null})),
            Err(LoadError::MissingBlogs)
        ));
        assert!(matches!(
            parse_embedded_data("   "),
            Err(LoadError::MissingBlogs)
        ));
    }

    #[test]
    fn wrong_post_shape_is_a_parse_error() {
        let err = dataset_from_json(json!({"blogs": [{"title": 3}]})).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}
