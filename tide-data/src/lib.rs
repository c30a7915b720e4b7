//! Time-series analytics for predicted and observed water levels.
//!
//! Everything here is a pure function of its inputs. Degenerate inputs
//! (too short, empty, mismatched lengths) produce well-defined empty, zero
//! or NaN results instead of errors so a partial year still renders.

pub mod comparison;
pub mod extrema;
pub mod metrics;
pub mod summary;
pub mod turning_points;

use chrono::NaiveDateTime;
use serde::Serialize;
use tide_harmonic::{hourly::HourlyGrid, observation::Observation};

/// A single (time, value) sample, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    pub time: NaiveDateTime,
    pub value: f64,
}

impl DataPoint {
    pub fn new(time: NaiveDateTime, value: f64) -> Self {
        DataPoint { time, value }
    }

    /// Flatten an hourly grid into points, in day then hour order.
    pub fn from_grid(grid: &HourlyGrid) -> Vec<DataPoint> {
        grid.iter_hours()
            .map(|(time, value)| DataPoint { time, value })
            .collect()
    }

    pub fn from_observations(observations: &[Observation]) -> Vec<DataPoint> {
        observations.iter().map(DataPoint::from).collect()
    }
}

impl From<&Observation> for DataPoint {
    fn from(value: &Observation) -> Self {
        DataPoint {
            time: value.timestamp,
            value: value.value,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::DataPoint;
    use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

    pub fn hour(n: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2013, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + TimeDelta::hours(n)
    }

    /// Hourly points starting at 2013-01-01 00:00.
    pub fn hourly(values: &[f64]) -> Vec<DataPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(hour(i as i64), *v))
            .collect()
    }
}
