/// Relative path of the dataset fetched when the page carries no embedded copy.
pub const DATASET_RESOURCE: &str = "blogs.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the dataset once; answer with `Msg::DatasetFetched`.
    FetchDataset { resource: String },
    /// The dataset could not be obtained; the widget stays inert.
    ReportLoadFailure { reason: String },
}
