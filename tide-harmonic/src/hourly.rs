use crate::predictor::TidePredictor;
use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike};
use log::info;
use serde::Serialize;
use tide_utils::dates::{days_in_year, start_of_year};

pub const HOURS_PER_DAY: usize = 24;

/// Hourly predictions for one calendar year, indexed by day of year and hour
/// of day. Values are in meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyGrid {
    pub year: i32,
    pub days: Vec<[f64; HOURS_PER_DAY]>,
}

impl HourlyGrid {
    /// Predict every hour of every day of `year` (365 or 366 days).
    pub fn generate(predictor: &TidePredictor, year: i32) -> HourlyGrid {
        let days = match start_of_year(year) {
            Some(start) => (0..days_in_year(year))
                .map(|day| {
                    let midnight = start + TimeDelta::days(i64::from(day));
                    let mut stage = [0.0; HOURS_PER_DAY];
                    for (hour, slot) in stage.iter_mut().enumerate() {
                        *slot = predictor.predict(midnight + TimeDelta::hours(hour as i64));
                    }
                    stage
                })
                .collect(),
            None => Vec::new(),
        };
        info!("Generated {} days of hourly predictions for {}", days.len(), year);
        HourlyGrid { year, days }
    }

    pub fn days_in_year(&self) -> usize {
        self.days.len()
    }

    /// Total number of hourly values.
    pub fn len(&self) -> usize {
        self.days.len() * HOURS_PER_DAY
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Value at zero-based `day` of year and `hour` of day.
    pub fn get(&self, day: usize, hour: usize) -> Option<f64> {
        if hour >= HOURS_PER_DAY {
            return None;
        }
        self.days.get(day).map(|stage| stage[hour])
    }

    /// Value at an instant falling exactly on the hour within this grid's year.
    pub fn value_at(&self, instant: NaiveDateTime) -> Option<f64> {
        if instant.year() != self.year || instant.minute() != 0 || instant.second() != 0 {
            return None;
        }
        if instant.nanosecond() != 0 {
            return None;
        }
        self.get(instant.ordinal0() as usize, instant.hour() as usize)
    }

    /// `(instant, value)` pairs in day then hour order.
    pub fn iter_hours(&self) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        let start = start_of_year(self.year);
        self.days.iter().enumerate().flat_map(move |(day, stage)| {
            stage.iter().enumerate().filter_map(move |(hour, value)| {
                start.map(|s| {
                    let offset = TimeDelta::hours((day * HOURS_PER_DAY + hour) as i64);
                    (s + offset, *value)
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::HourlyGrid;
    use crate::params::{Constituent, HarmonicParameters};
    use crate::predictor::TidePredictor;
    use chrono::NaiveDate;

    fn predictor() -> TidePredictor {
        let params = HarmonicParameters::new(
            2020,
            50.0,
            vec![
                Constituent::new("M2", 12.42, 30.0, 4.0),
                Constituent::new("K1", 23.93, 12.0, -6.0),
            ],
        )
        .unwrap();
        TidePredictor::new(params)
    }

    #[test]
    fn test_leap_year_size() {
        let grid = HourlyGrid::generate(&predictor(), 2024);
        assert_eq!(grid.days_in_year(), 366);
        assert_eq!(grid.len(), 8784);
        assert_eq!(grid.iter_hours().count(), 8784);
    }

    #[test]
    fn test_common_year_size() {
        let grid = HourlyGrid::generate(&predictor(), 2023);
        assert_eq!(grid.days_in_year(), 365);
        assert_eq!(grid.len(), 8760);
    }

    #[test]
    fn test_cells_match_predictor() {
        let predictor = predictor();
        let grid = HourlyGrid::generate(&predictor, 2022);
        let instant = NaiveDate::from_ymd_opt(2022, 3, 1)
            .unwrap()
            .and_hms_opt(5, 0, 0)
            .unwrap();
        // March 1st is day 59 in a common year
        assert_eq!(grid.get(59, 5), Some(predictor.predict(instant)));
        assert_eq!(grid.value_at(instant), Some(predictor.predict(instant)));
        assert_eq!(grid.get(59, 24), None);
        assert_eq!(grid.get(365, 0), None);
    }

    #[test]
    fn test_value_at_off_grid() {
        let grid = HourlyGrid::generate(&predictor(), 2022);
        let half_hour = NaiveDate::from_ymd_opt(2022, 3, 1)
            .unwrap()
            .and_hms_opt(5, 30, 0)
            .unwrap();
        let other_year = NaiveDate::from_ymd_opt(2021, 3, 1)
            .unwrap()
            .and_hms_opt(5, 0, 0)
            .unwrap();
        assert_eq!(grid.value_at(half_hour), None);
        assert_eq!(grid.value_at(other_year), None);
    }

    #[test]
    fn test_iter_hours_order() {
        let grid = HourlyGrid::generate(&predictor(), 2021);
        let hours: Vec<_> = grid.iter_hours().take(26).collect();
        let first = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(hours[0].0, first);
        assert_eq!(hours[25].0, first + chrono::TimeDelta::hours(25));
        assert_eq!(hours[25].1, grid.days[1][1]);
    }
}
