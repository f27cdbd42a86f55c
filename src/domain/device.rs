// Device classification and responsive chart sizing
use serde::{Deserialize, Serialize};

const TOUCH_BOTTOM_PADDING: f64 = 20.0;
const DESKTOP_BOTTOM_PADDING: f64 = 60.0;
const DESKTOP_MAX_HEIGHT: f64 = 550.0;
const INITIAL_CHART_HEIGHT: f64 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Pointer capabilities reported by the environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerCapabilities {
    #[serde(default)]
    pub touch_events: bool,
    #[serde(default)]
    pub max_touch_points: u32,
}

impl PointerCapabilities {
    /// Heuristic stand-in for "mobile": any touch support counts.
    pub fn is_touch_capable(&self) -> bool {
        self.touch_events || self.max_touch_points > 0
    }
}

/// Everything the environment reports on mount, resize and orientation change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportMeasurement {
    pub viewport: Viewport,
    /// Offset of the chart container from the top of the viewport.
    #[serde(default)]
    pub container_top: f64,
    #[serde(default)]
    pub pointer: PointerCapabilities,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProfile {
    pub is_touch_capable: bool,
    pub is_portrait: bool,
    pub is_landscape: bool,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl DeviceProfile {
    pub fn detect(viewport: Viewport, pointer: PointerCapabilities) -> Self {
        Self {
            is_touch_capable: pointer.is_touch_capable(),
            is_portrait: viewport.height > viewport.width,
            is_landscape: viewport.width > viewport.height,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
        }
    }

    /// Touch device held sideways: the layout sheds title and legend space.
    pub fn is_compact(&self) -> bool {
        self.is_touch_capable && self.is_landscape
    }

    /// Lower and upper bound for the chart height given the space actually available.
    pub fn height_bounds(&self, available: f64) -> (f64, f64) {
        if self.is_touch_capable {
            (if self.is_portrait { 300.0 } else { 250.0 }, available)
        } else {
            (
                if self.is_portrait { 300.0 } else { 350.0 },
                DESKTOP_MAX_HEIGHT,
            )
        }
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub profile: DeviceProfile,
    pub chart_height: f64,
}

impl Layout {
    /// Layout used until the first viewport measurement arrives: a
    /// non-touch device with a 400px chart.
    pub fn initial() -> Self {
        Self {
            profile: DeviceProfile {
                is_touch_capable: false,
                is_portrait: false,
                is_landscape: false,
                viewport_width: 0.0,
                viewport_height: 0.0,
            },
            chart_height: INITIAL_CHART_HEIGHT,
        }
    }

    pub fn measure(measurement: &ViewportMeasurement) -> Self {
        let profile = DeviceProfile::detect(measurement.viewport, measurement.pointer);
        let chart_height = chart_height(&profile, measurement.container_top);
        Self {
            profile,
            chart_height,
        }
    }
}

/// Pixel height for the chart container.
///
/// The minimum wins over the maximum, so a cramped touch viewport still gets its
/// minimum height even when `available` is smaller.
pub fn chart_height(profile: &DeviceProfile, container_top: f64) -> f64 {
    let padding = if profile.is_touch_capable {
        TOUCH_BOTTOM_PADDING
    } else {
        DESKTOP_BOTTOM_PADDING
    };
    let available = profile.viewport_height - container_top - padding;
    let (min, max) = profile.height_bounds(available);
    min.max(available.min(max))
}
