// Chart configuration builder - Device-aware ApexCharts options
use crate::domain::chart::{
    AxisLabels, ChartConfiguration, ChartOptions, ChartSection, ChartSeries, Dimensions, Fill,
    Gradient, Grid, GridAxis, GridPadding, LabelStyle, Legend, LegendLabels, Markers, TextStyle,
    Theme, Title, Toggle, Tooltip, TooltipX, TooltipY, ValueFormat, Visibility, XAxis, YAxis, Zoom,
};
use crate::domain::device::{DeviceProfile, Layout};
use std::sync::Arc;

/// Vertical space inside the chart container taken by non-chart decoration.
pub const CHART_CHROME: f64 = 48.0;

#[derive(Debug, Clone)]
pub struct ChartConfigurationBuilder {
    theme: Theme,
}

impl ChartConfigurationBuilder {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Assemble a full configuration around an already-mapped series.
    pub fn build(&self, series: Arc<Vec<ChartSeries>>, layout: &Layout) -> ChartConfiguration {
        ChartConfiguration {
            dimensions: Dimensions {
                container_height: layout.chart_height,
                height: layout.chart_height - CHART_CHROME,
                width: "100%".to_string(),
            },
            options: self.options(&layout.profile),
            series,
        }
    }

    /// Options depend on the device profile and theme only, never on the data.
    pub fn options(&self, profile: &DeviceProfile) -> ChartOptions {
        let touch = profile.is_touch_capable;
        let compact = profile.is_compact();
        let theme = &self.theme;

        let axis_style = || LabelStyle {
            colors: theme.axis_label_color.clone(),
            font_size: "12px".to_string(),
        };

        ChartOptions {
            chart: ChartSection {
                toolbar: Visibility { show: !touch },
                zoom: Zoom {
                    kind: "x".to_string(),
                    enabled: !touch,
                    auto_scale_yaxis: true,
                },
                animations: Toggle { enabled: false },
                offset_y: if compact { -10.0 } else { 0.0 },
                sparkline: Toggle { enabled: false },
            },
            colors: vec![theme.color.clone()],
            fill: Fill {
                kind: "gradient".to_string(),
                gradient: Gradient {
                    shade_intensity: 1.0,
                    opacity_from: 0.7,
                    opacity_to: 0.1,
                    stops: [0, 100],
                },
            },
            data_labels: Toggle { enabled: false },
            title: Title {
                // blank rather than absent so the layout keeps the slot
                text: if compact {
                    String::new()
                } else {
                    theme.title.clone()
                },
                align: "center".to_string(),
                style: TextStyle {
                    font_size: "18px".to_string(),
                    font_weight: Some("bold".to_string()),
                    color: theme.title_color.clone(),
                },
            },
            xaxis: XAxis {
                kind: "datetime".to_string(),
                labels: AxisLabels {
                    style: axis_style(),
                    formatter: None,
                },
            },
            yaxis: YAxis {
                labels: AxisLabels {
                    style: axis_style(),
                    formatter: Some(ValueFormat::celsius()),
                },
            },
            tooltip: Tooltip {
                x: TooltipX {
                    format: "dd MMM yyyy HH:mm".to_string(),
                },
                y: TooltipY {
                    formatter: ValueFormat::celsius(),
                },
            },
            markers: Markers { size: 0 },
            legend: Legend {
                show: true,
                position: "top".to_string(),
                font_size: if compact { "12px" } else { "14px" }.to_string(),
                font_weight: 500,
                labels: LegendLabels {
                    colors: theme.legend_label_color.clone(),
                },
                offset_y: if compact { -5.0 } else { 0.0 },
                height: compact.then_some(20.0),
            },
            grid: Grid {
                border_color: theme.grid_border_color.clone(),
                xaxis: GridAxis {
                    lines: Visibility { show: true },
                },
                padding: GridPadding {
                    top: if compact { -10.0 } else { 0.0 },
                    bottom: if compact { 0.0 } else { 10.0 },
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::device::{PointerCapabilities, Viewport};

    fn profile(width: f64, height: f64, touch: bool) -> DeviceProfile {
        DeviceProfile::detect(
            Viewport { width, height },
            PointerCapabilities {
                touch_events: touch,
                max_touch_points: 0,
            },
        )
    }

    fn builder() -> ChartConfigurationBuilder {
        ChartConfigurationBuilder::new(Theme::default())
    }

    #[test]
    fn test_desktop_options() {
        let options = builder().options(&profile(1920.0, 1080.0, false));

        assert_eq!(options.title.text, "Temperature Over Time");
        assert!(options.chart.toolbar.show);
        assert!(options.chart.zoom.enabled);
        assert!(options.chart.zoom.auto_scale_yaxis);
        assert!(!options.chart.animations.enabled);
        assert_eq!(options.legend.position, "top");
        assert_eq!(options.legend.font_size, "14px");
        assert_eq!(options.legend.height, None);
    }

    #[test]
    fn test_touch_portrait_keeps_title_but_drops_zoom() {
        let options = builder().options(&profile(390.0, 844.0, true));

        assert_eq!(options.title.text, "Temperature Over Time");
        assert!(!options.chart.toolbar.show);
        assert!(!options.chart.zoom.enabled);
        assert_eq!(options.legend.font_size, "14px");
    }

    #[test]
    fn test_touch_landscape_is_compact() {
        let options = builder().options(&profile(844.0, 390.0, true));

        assert_eq!(options.title.text, "");
        assert_eq!(options.title.align, "center");
        assert_eq!(options.legend.font_size, "12px");
        assert_eq!(options.legend.offset_y, -5.0);
        assert_eq!(options.legend.height, Some(20.0));
        assert_eq!(options.chart.offset_y, -10.0);
        assert_eq!(options.grid.padding.top, -10.0);
        assert!(!options.chart.animations.enabled);
    }

    #[test]
    fn test_formatters_and_fill() {
        let options = builder().options(&profile(1280.0, 800.0, false));

        let y = options.yaxis.labels.formatter.as_ref().unwrap();
        assert_eq!(y.apply(21.449), "21.4°C");
        assert_eq!(options.tooltip.y.formatter.apply(-0.26), "-0.3°C");
        assert_eq!(options.xaxis.kind, "datetime");
        assert_eq!(options.colors, vec!["#cc2828ff".to_string()]);
        assert_eq!(options.fill.gradient.opacity_from, 0.7);
        assert_eq!(options.fill.gradient.opacity_to, 0.1);
    }

    #[test]
    fn test_options_serialize_in_apex_shape() {
        let json = serde_json::to_value(builder().options(&profile(844.0, 390.0, true))).unwrap();

        assert_eq!(json["chart"]["zoom"]["type"], "x");
        assert_eq!(json["chart"]["zoom"]["autoScaleYaxis"], true);
        assert_eq!(json["chart"]["animations"]["enabled"], false);
        assert_eq!(json["dataLabels"]["enabled"], false);
        assert_eq!(json["fill"]["type"], "gradient");
        assert_eq!(json["fill"]["gradient"]["opacityFrom"], 0.7);
        assert_eq!(json["yaxis"]["labels"]["formatter"]["suffix"], "°C");
        assert_eq!(json["legend"]["fontSize"], "12px");
        assert_eq!(json["grid"]["borderColor"], "rgba(0, 0, 0, 0.05)");
    }

    #[test]
    fn test_build_subtracts_chrome_and_shares_series() {
        let layout = Layout {
            profile: profile(1920.0, 1080.0, false),
            chart_height: 550.0,
        };
        let series = Arc::new(Vec::new());

        let config = builder().build(series.clone(), &layout);

        assert_eq!(config.dimensions.container_height, 550.0);
        assert_eq!(config.dimensions.height, 502.0);
        assert!(Arc::ptr_eq(&config.series, &series));
    }
}
