// Series mapper - Domain points to renderer series
use crate::domain::chart::{ChartSeries, SERIES_NAME, SeriesPoint};
use crate::domain::temperature::TemperaturePoint;

/// Map points into the single "Temperature" series, keeping input order.
pub fn map_series(points: &[TemperaturePoint]) -> Vec<ChartSeries> {
    let data = points
        .iter()
        .map(|p| SeriesPoint {
            x: p.timestamp.timestamp_millis(),
            y: p.temperature,
        })
        .collect();

    vec![ChartSeries {
        name: SERIES_NAME.to_string(),
        data,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_single_named_series_in_input_order() {
        let later = Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap();
        let earlier = Utc.with_ymd_and_hms(2024, 3, 5, 6, 0, 0).unwrap();
        let points = vec![
            TemperaturePoint::new(later, 23.1),
            TemperaturePoint::new(earlier, 18.7),
        ];

        let series = map_series(&points);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].name, "Temperature");
        assert_eq!(
            series[0].data,
            vec![
                SeriesPoint {
                    x: later.timestamp_millis(),
                    y: 23.1
                },
                SeriesPoint {
                    x: earlier.timestamp_millis(),
                    y: 18.7
                },
            ]
        );
    }

    #[test]
    fn test_empty_input_gives_empty_series() {
        let series = map_series(&[]);
        assert_eq!(series.len(), 1);
        assert!(series[0].data.is_empty());
    }

    #[test]
    fn test_serializes_as_apex_series() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        let json = serde_json::to_value(map_series(&[TemperaturePoint::new(at, 21.4)])).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "name": "Temperature", "data": [{ "x": 1709632800000i64, "y": 21.4 }] }])
        );
    }
}
