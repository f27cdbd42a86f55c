// Graph view - Composes fetching, mapping and layout into a rendered chart
use crate::application::chart_builder::ChartConfigurationBuilder;
use crate::application::data_fetcher::{DataFetcher, LoadingState};
use crate::application::series_mapper::map_series;
use crate::application::viewport_monitor::{LayoutSubscription, ViewportMonitor};
use crate::domain::chart::{ChartConfiguration, ChartSeries};
use crate::domain::device::{Layout, ViewportMeasurement};
use crate::domain::temperature::TimeRange;
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;

/// What the outer surface draws: a spinner while loading, a chart once data arrived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedGraph {
    pub loading: bool,
    pub state: LoadingState,
    pub chart: Option<ChartConfiguration>,
}

#[derive(Clone)]
pub struct GraphView {
    inner: Arc<Inner>,
}

struct Inner {
    fetcher: DataFetcher,
    builder: ChartConfigurationBuilder,
    settle_delay: Duration,
    state: Mutex<ViewState>,
}

struct ViewState {
    layout: Layout,
    series: Option<Arc<Vec<ChartSeries>>>,
    chart: Option<ChartConfiguration>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            layout: Layout::initial(),
            series: None,
            chart: None,
        }
    }
}

impl ViewState {
    fn rebuild(&mut self, builder: &ChartConfigurationBuilder) {
        if let Some(series) = &self.series {
            self.chart = Some(builder.build(series.clone(), &self.layout));
        }
    }
}

impl GraphView {
    pub fn new(
        fetcher: DataFetcher,
        builder: ChartConfigurationBuilder,
        settle_delay: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                fetcher,
                builder,
                settle_delay,
                state: Mutex::new(ViewState::default()),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.inner
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Fetch `range` and replace the cached series. A failed fetch keeps
    /// whatever chart was already there.
    pub async fn load(&self, range: TimeRange) {
        let Some(points) = self.inner.fetcher.fetch(range).await else {
            return;
        };

        let series = Arc::new(map_series(&points));
        let mut state = self.state();
        state.series = Some(series);
        state.rebuild(&self.inner.builder);
    }

    /// Re-derive options for a new layout from the cached series.
    pub fn apply_layout(&self, layout: Layout) {
        let mut state = self.state();
        if state.layout == layout {
            return;
        }

        tracing::debug!(
            height = layout.chart_height,
            touch = layout.profile.is_touch_capable,
            landscape = layout.profile.is_landscape,
            "Layout changed"
        );
        state.layout = layout;
        state.rebuild(&self.inner.builder);
    }

    pub fn render(&self) -> RenderedGraph {
        let loading_state = self.inner.fetcher.state();
        RenderedGraph {
            loading: loading_state == LoadingState::Loading,
            state: loading_state,
            chart: self.state().chart.clone(),
        }
    }

    #[cfg(test)]
    pub fn subscribe_loading(&self) -> watch::Receiver<LoadingState> {
        self.inner.fetcher.subscribe()
    }

    /// Listen for viewport changes: measure now, on every change, and once more
    /// after the settling delay.
    pub fn activate(&self, monitor: &ViewportMonitor) -> LayoutSubscription {
        let mut measurements = monitor.subscribe();
        let view = self.clone();
        let settle_delay = self.inner.settle_delay;

        let task = tokio::spawn(async move {
            view.remeasure(&mut measurements);

            let settle = tokio::time::sleep(settle_delay);
            tokio::pin!(settle);
            let mut settled = false;

            loop {
                tokio::select! {
                    () = &mut settle, if !settled => {
                        settled = true;
                        view.remeasure(&mut measurements);
                    }
                    changed = measurements.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        view.remeasure(&mut measurements);
                    }
                }
            }
        });

        LayoutSubscription::new(vec![task])
    }

    fn remeasure(&self, measurements: &mut watch::Receiver<Option<ViewportMeasurement>>) {
        let current = *measurements.borrow_and_update();
        if let Some(measurement) = current {
            self.apply_layout(Layout::measure(&measurement));
        }
    }
}
