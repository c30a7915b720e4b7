use crate::params::HarmonicParameters;
use chrono::{Datelike, NaiveDateTime, TimeDelta};
use tide_utils::dates::{hours_between, hours_in_year, start_of_year};

/// Predicts astronomical tide heights from one parameter set.
#[derive(Debug, Clone)]
pub struct TidePredictor {
    params: HarmonicParameters,
}

impl TidePredictor {
    pub fn new(params: HarmonicParameters) -> Self {
        TidePredictor { params }
    }

    pub fn params(&self) -> &HarmonicParameters {
        &self.params
    }

    /// Predicted water level in meters at `instant`.
    ///
    /// Years before the base year are not extrapolated: they are evaluated
    /// with no base-year shift, so callers should reject them first.
    pub fn predict(&self, instant: NaiveDateTime) -> f64 {
        let t = hours_since_epoch(instant) + shift_hours(self.params.base_year(), instant.year());
        self.level_cm(t) / 100.0
    }

    /// Harmonic sum in centimeters at `t` hours past the base-year epoch.
    pub fn level_cm(&self, t: f64) -> f64 {
        self.params.mean_level()
            + self
                .params
                .constituents()
                .iter()
                .map(|c| c.evaluate(t))
                .sum::<f64>()
    }
}

/// Total hours in the whole years `[base_year, target_year)`; zero when
/// `target_year` is not after `base_year`.
pub fn shift_hours(base_year: i32, target_year: i32) -> f64 {
    (base_year..target_year)
        .map(|year| f64::from(hours_in_year(year)))
        .sum()
}

/// Hours from one hour before midnight on January 1st of the instant's own
/// year. The one-hour offset matches the epoch the constants were fitted on.
pub fn hours_since_epoch(instant: NaiveDateTime) -> f64 {
    match start_of_year(instant.year()) {
        Some(start) => hours_between(start - TimeDelta::hours(1), instant),
        None => 0.0,
    }
}
