use blogsearch_core::{Effect, Msg};
use blogsearch_engine::DataLoader;
use widget_logging::{widget_debug, widget_error};

/// Executes effects emitted by `update` and turns their outcome back into messages.
pub struct EffectRunner {
    loader: DataLoader,
}

impl EffectRunner {
    pub fn new(loader: DataLoader) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &DataLoader {
        &self.loader
    }

    pub async fn run(&self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::FetchDataset { resource } => {
                widget_debug!("FetchDataset resource={}", resource);
                let result = self
                    .loader
                    .fetch(&resource)
                    .await
                    .map_err(|err| err.to_string());
                Some(Msg::DatasetFetched(result))
            }
            Effect::ReportLoadFailure { reason } => {
                widget_error!("Failed to load blog data: {}", reason);
                None
            }
        }
    }
}
