// Application state for HTTP handlers
use crate::application::temperature_page::TemperaturePage;
use crate::application::viewport_monitor::ViewportMonitor;

#[derive(Clone)]
pub struct AppState {
    pub page: TemperaturePage,
    pub viewport: ViewportMonitor,
}
