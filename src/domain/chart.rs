// Chart domain models, shaped after the ApexCharts option tree
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const SERIES_NAME: &str = "Temperature";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Milliseconds since the Unix epoch.
    pub x: i64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub name: String,
    pub data: Vec<SeriesPoint>,
}

/// Colours and labels the chart is drawn with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub title: String,
    pub color: String,
    pub title_color: String,
    pub axis_label_color: String,
    pub legend_label_color: String,
    pub grid_border_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: "Temperature Over Time".to_string(),
            color: "#cc2828ff".to_string(),
            title_color: "#1f2937".to_string(),
            axis_label_color: "#6b7280".to_string(),
            legend_label_color: "#374151".to_string(),
            grid_border_color: "rgba(0, 0, 0, 0.05)".to_string(),
        }
    }
}

/// Declarative number formatter: fixed decimals followed by a unit suffix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueFormat {
    pub decimals: usize,
    pub suffix: String,
}

impl ValueFormat {
    pub fn celsius() -> Self {
        Self {
            decimals: 1,
            suffix: "°C".to_string(),
        }
    }

    #[cfg(test)]
    pub fn apply(&self, value: f64) -> String {
        format!("{:.*}{}", self.decimals, value, self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub chart: ChartSection,
    pub colors: Vec<String>,
    pub fill: Fill,
    pub data_labels: Toggle,
    pub title: Title,
    pub xaxis: XAxis,
    pub yaxis: YAxis,
    pub tooltip: Tooltip,
    pub markers: Markers,
    pub legend: Legend,
    pub grid: Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSection {
    pub toolbar: Visibility,
    pub zoom: Zoom,
    pub animations: Toggle,
    pub offset_y: f64,
    pub sparkline: Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Visibility {
    pub show: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Zoom {
    #[serde(rename = "type")]
    pub kind: String,
    pub enabled: bool,
    pub auto_scale_yaxis: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fill {
    #[serde(rename = "type")]
    pub kind: String,
    pub gradient: Gradient,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub shade_intensity: f64,
    pub opacity_from: f64,
    pub opacity_to: f64,
    pub stops: [u32; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    pub align: String,
    pub style: TextStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub font_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelStyle {
    pub colors: String,
    #[serde(rename = "fontSize")]
    pub font_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XAxis {
    #[serde(rename = "type")]
    pub kind: String,
    pub labels: AxisLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YAxis {
    pub labels: AxisLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabels {
    pub style: LabelStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<ValueFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub x: TooltipX,
    pub y: TooltipY,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipX {
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipY {
    pub formatter: ValueFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Markers {
    pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub show: bool,
    pub position: String,
    pub font_size: String,
    pub font_weight: u32,
    pub labels: LegendLabels,
    pub offset_y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub colors: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub border_color: String,
    pub xaxis: GridAxis,
    pub padding: GridPadding,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridAxis {
    pub lines: Visibility,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPadding {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    /// Height of the container reserved for the chart.
    pub container_height: f64,
    /// Height handed to the renderer, container minus chrome.
    pub height: f64,
    pub width: String,
}

/// Everything the renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfiguration {
    pub dimensions: Dimensions,
    pub options: ChartOptions,
    pub series: Arc<Vec<ChartSeries>>,
}
