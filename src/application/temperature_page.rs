// Temperature page - Range pickers and fetch action wired to the graph view
use crate::application::graph_view::GraphView;
use crate::application::range_selector::RangeSelector;
use crate::application::viewport_monitor::{LayoutSubscription, ViewportMonitor};
use crate::domain::temperature::TimeRange;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_stream::StreamExt;
use tokio_stream::wrappers::WatchStream;

#[derive(Clone)]
pub struct TemperaturePage {
    selector: Arc<Mutex<RangeSelector>>,
    view: GraphView,
}

impl TemperaturePage {
    pub fn new(selector: RangeSelector, view: GraphView) -> Self {
        Self {
            selector: Arc::new(Mutex::new(selector)),
            view,
        }
    }

    fn selector(&self) -> MutexGuard<'_, RangeSelector> {
        self.selector.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn range(&self) -> TimeRange {
        self.selector().range()
    }

    pub fn set_start(&self, start: DateTime<Utc>) -> TimeRange {
        let mut selector = self.selector();
        selector.set_start(start);
        selector.range()
    }

    pub fn set_end(&self, end: DateTime<Utc>) -> TimeRange {
        let mut selector = self.selector();
        selector.set_end(end);
        selector.range()
    }

    pub fn view(&self) -> &GraphView {
        &self.view
    }

    /// The "fetch" action: load whatever range is currently selected.
    pub async fn fetch_graph(&self) {
        let range = self.range();
        self.view.load(range).await;
    }

    /// Mount the page. Layout listeners start immediately; the first fetch runs
    /// as soon as a viewport measurement tells us what kind of device this is.
    pub fn activate(&self, monitor: &ViewportMonitor) -> LayoutSubscription {
        let layout = self.view.activate(monitor);

        let page = self.clone();
        let mut measurements = WatchStream::new(monitor.subscribe());
        let initial_load = tokio::spawn(async move {
            while let Some(measurement) = measurements.next().await {
                if measurement.is_some() {
                    tracing::info!("Device detected, loading initial range");
                    page.fetch_graph().await;
                    break;
                }
            }
        });

        layout.join(LayoutSubscription::new(vec![initial_load]))
    }
}
