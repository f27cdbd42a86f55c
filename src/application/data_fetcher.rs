// Data fetcher - Reads a range from the source and parses it into points
use crate::application::temperature_source::{FetchError, TemperatureSource};
use crate::domain::temperature::{TemperaturePoint, TimeRange};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

pub struct DataFetcher {
    source: Arc<dyn TemperatureSource>,
    state: watch::Sender<LoadingState>,
    generation: AtomicU64,
}

impl DataFetcher {
    pub fn new(source: Arc<dyn TemperatureSource>) -> Self {
        let (state, _) = watch::channel(LoadingState::Idle);
        Self {
            source,
            state,
            generation: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> LoadingState {
        *self.state.borrow()
    }

    #[cfg(test)]
    pub fn subscribe(&self) -> watch::Receiver<LoadingState> {
        self.state.subscribe()
    }

    /// Fetch and parse every reading in `range`.
    ///
    /// Failures never leave this function: they are logged and show up only as
    /// `LoadingState::Failed`. Returns `None` on failure, and also when a newer
    /// fetch was started while this one was in flight.
    pub async fn fetch(&self, range: TimeRange) -> Option<Vec<TemperaturePoint>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_replace(LoadingState::Loading);

        let result = self.try_fetch(&range).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(generation, "Discarding response superseded by a newer fetch");
            return None;
        }

        match result {
            Ok(points) => {
                tracing::info!(
                    "Fetched {} readings for {} .. {}",
                    points.len(),
                    range.start,
                    range.end
                );
                self.state.send_replace(LoadingState::Loaded);
                Some(points)
            }
            Err(e) => {
                tracing::error!("Error fetching temperatures: {}", e);
                self.state.send_replace(LoadingState::Failed);
                None
            }
        }
    }

    async fn try_fetch(&self, range: &TimeRange) -> Result<Vec<TemperaturePoint>, FetchError> {
        let readings = self.source.read_range(range).await?;
        readings
            .into_iter()
            .map(|raw| TemperaturePoint::try_from(raw).map_err(FetchError::from))
            .collect()
    }
}
