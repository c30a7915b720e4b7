//! Pairing observed levels with the hourly prediction grid.

use crate::metrics::rmse;
use chrono::NaiveDateTime;
use log::debug;
use serde::{Serialize, Serializer};
use tide_harmonic::{hourly::HourlyGrid, observation::Observation};
use tide_utils::dates::format_timestamp;

/// An observation and the prediction for the same hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    #[serde(serialize_with = "serialize_time")]
    pub time: NaiveDateTime,
    pub observed: f64,
    pub predicted: f64,
}

fn serialize_time<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(time))
}

/// Keep the observations that fall exactly on an hour of the grid's year,
/// each paired with its predicted value. Observation order is preserved.
pub fn align(observations: &[Observation], grid: &HourlyGrid) -> Vec<ComparisonRow> {
    let rows: Vec<ComparisonRow> = observations
        .iter()
        .filter_map(|obs| {
            grid.value_at(obs.timestamp).map(|predicted| ComparisonRow {
                time: obs.timestamp,
                observed: obs.value,
                predicted,
            })
        })
        .collect();
    debug!(
        "comparison: {} of {} observations land on the {} grid",
        rows.len(),
        observations.len(),
        grid.year
    );
    rows
}

pub fn observed_values(rows: &[ComparisonRow]) -> Vec<f64> {
    rows.iter().map(|r| r.observed).collect()
}

pub fn predicted_values(rows: &[ComparisonRow]) -> Vec<f64> {
    rows.iter().map(|r| r.predicted).collect()
}

pub fn times(rows: &[ComparisonRow]) -> Vec<NaiveDateTime> {
    rows.iter().map(|r| r.time).collect()
}

/// RMSE between the observed and predicted columns.
pub fn comparison_rmse(rows: &[ComparisonRow]) -> f64 {
    rmse(&observed_values(rows), &predicted_values(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tide_harmonic::params::{Constituent, HarmonicParameters};
    use tide_harmonic::predictor::TidePredictor;

    const OBSERVATIONS: &str = "initTime,value
2012-12-31 23:00:00,0.1
2013-01-01 00:00:00,0.5
2013-01-01 00:30:00,0.6
2013-01-01 01:00:00,0.7
";

    fn grid() -> HourlyGrid {
        let params =
            HarmonicParameters::new(2010, 80.0, vec![Constituent::new("M2", 12.42, 40.0, -3.0)])
                .unwrap();
        HourlyGrid::generate(&TidePredictor::new(params), 2013)
    }

    #[test]
    fn test_align_keeps_grid_hours_in_year() {
        let grid = grid();
        let observations = Observation::load_observations(OBSERVATIONS).unwrap();
        let rows = align(&observations, &grid);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].observed, 0.5);
        assert_eq!(rows[0].predicted, grid.days[0][0]);
        assert_eq!(rows[1].predicted, grid.days[0][1]);
    }

    #[test]
    fn test_comparison_rmse_matches_metric() {
        let grid = grid();
        let observations = Observation::load_observations(OBSERVATIONS).unwrap();
        let rows = align(&observations, &grid);
        let expected = rmse(&[0.5, 0.7], &[grid.days[0][0], grid.days[0][1]]);
        assert_eq!(comparison_rmse(&rows), expected);
        assert_eq!(comparison_rmse(&[]), 0.0);
        assert_eq!(times(&rows)[1], observations[3].timestamp);
    }
}
