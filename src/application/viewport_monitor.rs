// Viewport monitor - Latest environment measurement plus change notification
use crate::domain::device::ViewportMeasurement;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Source of resize and orientation events. Subscribers always see the latest
/// measurement, never a backlog.
#[derive(Clone)]
pub struct ViewportMonitor {
    latest: Arc<watch::Sender<Option<ViewportMeasurement>>>,
}

impl ViewportMonitor {
    pub fn new() -> Self {
        let (latest, _) = watch::channel(None);
        Self {
            latest: Arc::new(latest),
        }
    }

    /// Record a resize or orientation change.
    pub fn report(&self, measurement: ViewportMeasurement) {
        self.latest.send_replace(Some(measurement));
    }

    pub fn current(&self) -> Option<ViewportMeasurement> {
        *self.latest.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ViewportMeasurement>> {
        self.latest.subscribe()
    }
}

impl Default for ViewportMonitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Listener registration for a view. Dropping it stops the listeners and any
/// pending timers.
#[must_use = "listeners stop as soon as the subscription is dropped"]
pub struct LayoutSubscription {
    tasks: Vec<JoinHandle<()>>,
}

impl LayoutSubscription {
    pub(crate) fn new(tasks: Vec<JoinHandle<()>>) -> Self {
        Self { tasks }
    }

    pub(crate) fn join(mut self, mut other: LayoutSubscription) -> Self {
        self.tasks.append(&mut other.tasks);
        self
    }

    pub fn dispose(self) {}
}

impl Drop for LayoutSubscription {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::{PointerCapabilities, Viewport};

    fn measurement(width: f64, height: f64) -> ViewportMeasurement {
        ViewportMeasurement {
            viewport: Viewport { width, height },
            container_top: 0.0,
            pointer: PointerCapabilities::default(),
        }
    }

    #[tokio::test]
    async fn test_subscribers_see_latest_measurement() {
        let monitor = ViewportMonitor::new();
        let mut rx = monitor.subscribe();
        assert_eq!(*rx.borrow_and_update(), None);

        monitor.report(measurement(800.0, 600.0));
        monitor.report(measurement(600.0, 800.0));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), Some(measurement(600.0, 800.0)));
        assert_eq!(monitor.current(), Some(measurement(600.0, 800.0)));
    }

    #[tokio::test]
    async fn test_dispose_aborts_every_task() {
        let (first_tx, first_rx) = tokio::sync::oneshot::channel::<()>();
        let (second_tx, second_rx) = tokio::sync::oneshot::channel::<()>();
        let listen = |tx: tokio::sync::oneshot::Sender<()>| {
            tokio::spawn(async move {
                let _held = tx;
                std::future::pending::<()>().await;
            })
        };

        let subscription = LayoutSubscription::new(vec![listen(first_tx)])
            .join(LayoutSubscription::new(vec![listen(second_tx)]));
        subscription.dispose();

        // an aborted task drops its sender
        assert!(first_rx.await.is_err());
        assert!(second_rx.await.is_err());
    }
}
