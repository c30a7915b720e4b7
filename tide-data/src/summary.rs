use crate::DataPoint;
use chrono::NaiveDateTime;
use serde::Serialize;

/// An extreme value and when it happened. `time` is `None` (and `value`
/// NaN) for an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extreme {
    pub value: f64,
    pub time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Average {
    pub value: f64,
}

/// Max, min and mean of a series.
///
/// Every value is NaN for an empty series; check [`Summary::is_empty`]
/// before formatting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub max: Extreme,
    pub min: Extreme,
    pub avg: Average,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.max.time.is_none()
    }
}

/// Mean, max and min of one day of hourly values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyStage {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Summarize index-aligned values and timestamps in one pass.
///
/// The first occurrence of the max and min wins ties. Extra entries in the
/// longer slice are ignored.
pub fn summarize(values: &[f64], times: &[NaiveDateTime]) -> Summary {
    let empty = Extreme {
        value: f64::NAN,
        time: None,
    };
    let mut max = empty;
    let mut min = empty;
    let mut sum = 0.0;
    let mut count = 0usize;
    for (&value, &time) in values.iter().zip(times) {
        if max.time.is_none() || value > max.value {
            max = Extreme {
                value,
                time: Some(time),
            };
        }
        if min.time.is_none() || value < min.value {
            min = Extreme {
                value,
                time: Some(time),
            };
        }
        sum += value;
        count += 1;
    }
    let avg = if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    };
    Summary {
        max,
        min,
        avg: Average { value: avg },
    }
}

pub fn summarize_points(points: &[DataPoint]) -> Summary {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let times: Vec<NaiveDateTime> = points.iter().map(|p| p.time).collect();
    summarize(&values, &times)
}

/// Summarize only the points with `start <= time <= end`.
pub fn summarize_window(points: &[DataPoint], start: NaiveDateTime, end: NaiveDateTime) -> Summary {
    let window: Vec<DataPoint> = points
        .iter()
        .filter(|p| start <= p.time && p.time <= end)
        .copied()
        .collect();
    summarize_points(&window)
}

pub fn daily_stage(stage: &[f64]) -> DailyStage {
    if stage.is_empty() {
        return DailyStage {
            mean: f64::NAN,
            max: f64::NAN,
            min: f64::NAN,
        };
    }
    DailyStage {
        mean: stage.iter().sum::<f64>() / stage.len() as f64,
        max: stage.iter().copied().fold(f64::MIN, f64::max),
        min: stage.iter().copied().fold(f64::MAX, f64::min),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{hour, hourly};

    #[test]
    fn test_summarize() {
        let points = hourly(&[1.0, 4.0, -2.0, 4.0, -2.0, 3.0]);
        let summary = summarize_points(&points);
        assert_eq!(summary.max.value, 4.0);
        assert_eq!(summary.max.time, Some(hour(1)));
        assert_eq!(summary.min.value, -2.0);
        assert_eq!(summary.min.time, Some(hour(2)));
        assert!((summary.avg.value - 8.0 / 6.0).abs() < 1e-12);
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[], &[]);
        assert!(summary.is_empty());
        assert!(summary.max.value.is_nan());
        assert!(summary.min.value.is_nan());
        assert!(summary.avg.value.is_nan());
        assert_eq!(summary.min.time, None);
    }

    #[test]
    fn test_summarize_window() {
        let points = hourly(&[9.0, 1.0, 2.0, 3.0, -9.0]);
        let summary = summarize_window(&points, hour(1), hour(3));
        assert_eq!(summary.max.value, 3.0);
        assert_eq!(summary.min.value, 1.0);
        assert_eq!(summary.avg.value, 2.0);

        let outside = summarize_window(&points, hour(10), hour(20));
        assert!(outside.is_empty());
    }

    #[test]
    fn test_daily_stage() {
        let stage = daily_stage(&[1.0, 2.0, 3.0, -2.0]);
        assert_eq!(stage.mean, 1.0);
        assert_eq!(stage.max, 3.0);
        assert_eq!(stage.min, -2.0);
        assert!(daily_stage(&[]).mean.is_nan());
    }
}
