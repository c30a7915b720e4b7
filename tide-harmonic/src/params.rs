use crate::error::{ParseError, Result};
use crate::parser::{BASE_YEAR_MARKER, COS_MARKER, COUNT_MARKER, MEAN_MARKER, SIN_MARKER};
use serde::Serialize;
use std::fmt::Write;

/// One harmonic term of the tide: a named period with cosine and sine
/// amplitude components, both in centimeters.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Constituent {
    pub name: String,
    /// Period in hours
    pub period: f64,
    /// Cj (cm)
    pub cos_coefficient: f64,
    /// Sj (cm)
    pub sin_coefficient: f64,
}

impl Constituent {
    pub fn new(name: &str, period: f64, cos_coefficient: f64, sin_coefficient: f64) -> Self {
        Constituent {
            name: name.to_string(),
            period,
            cos_coefficient,
            sin_coefficient,
        }
    }

    /// Amplitude in centimeters: `sqrt(Cj² + Sj²)`.
    pub fn amplitude(&self) -> f64 {
        self.cos_coefficient.hypot(self.sin_coefficient)
    }

    /// Phase angle in radians: `atan2(Sj, Cj)`.
    pub fn phase(&self) -> f64 {
        self.sin_coefficient.atan2(self.cos_coefficient)
    }

    /// Contribution of this term, in centimeters, at `t` hours past the epoch.
    pub fn evaluate(&self, t: f64) -> f64 {
        let angle = 2.0 * std::f64::consts::PI * t / self.period;
        self.cos_coefficient * angle.cos() + self.sin_coefficient * angle.sin()
    }
}

/// A station's harmonic constants, fitted against `base_year`.
///
/// Built once (by the parser or [`HarmonicParameters::new`]) and never
/// mutated afterwards; every constituent period is strictly positive and
/// every coefficient is finite.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct HarmonicParameters {
    base_year: i32,
    /// Mean water level (cm)
    mean_level: f64,
    constituents: Vec<Constituent>,
}

impl HarmonicParameters {
    /// Validate and assemble a parameter set.
    pub fn new(base_year: i32, mean_level: f64, constituents: Vec<Constituent>) -> Result<Self> {
        if base_year <= 0 {
            return Err(ParseError::InvalidBaseYear(base_year.to_string()));
        }
        if !mean_level.is_finite() {
            return Err(ParseError::InvalidMeanLevel(mean_level.to_string()));
        }
        if constituents.is_empty() {
            return Err(ParseError::InvalidCount("0".to_string()));
        }
        if let Some(bad) = constituents
            .iter()
            .find(|c| !(c.period.is_finite() && c.period > 0.0))
        {
            return Err(ParseError::NonPositivePeriod {
                name: bad.name.clone(),
                period: bad.period,
            });
        }
        if let Some(bad) = constituents
            .iter()
            .find(|c| !(c.cos_coefficient.is_finite() && c.sin_coefficient.is_finite()))
        {
            return Err(ParseError::NonFiniteCoefficient {
                name: bad.name.clone(),
                cos_coefficient: bad.cos_coefficient,
                sin_coefficient: bad.sin_coefficient,
            });
        }
        Ok(HarmonicParameters {
            base_year,
            mean_level,
            constituents,
        })
    }

    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    /// Mean water level in centimeters.
    pub fn mean_level(&self) -> f64 {
        self.mean_level
    }

    /// Constituents in file order.
    pub fn constituents(&self) -> &[Constituent] {
        &self.constituents
    }

    pub fn len(&self) -> usize {
        self.constituents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constituents.is_empty()
    }

    /// Predictions are only defined for years at or after the base year.
    pub fn supports_year(&self, year: i32) -> bool {
        year >= self.base_year
    }

    /// Serialize into the line-oriented parameter text format.
    ///
    /// Floats are written in shortest round-trip form, so parsing the output
    /// reproduces this parameter set exactly. Constituent names must not
    /// contain whitespace.
    pub fn to_param_text(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(s, "* Results of Harmonic Analysis");
        let _ = writeln!(s, "* {BASE_YEAR_MARKER}");
        let _ = writeln!(s, "{}", self.base_year);
        let _ = writeln!(s, "* {COUNT_MARKER} {MEAN_MARKER}");
        let _ = writeln!(s, "{} {}", self.constituents.len(), self.mean_level);
        let _ = writeln!(
            s,
            "* 分潮 週期(HOURS) 振幅(CM) 相位角(rad) {COS_MARKER} {SIN_MARKER}"
        );
        for c in &self.constituents {
            let _ = writeln!(
                s,
                "{} {} {} {} {} {}",
                c.name,
                c.period,
                c.amplitude(),
                c.phase(),
                c.cos_coefficient,
                c.sin_coefficient
            );
        }
        s
    }

    /// Human-readable listing with fixed-width columns, including the
    /// derived amplitude and phase of every constituent.
    pub fn describe(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(s, "* Results of Harmonic Analysis");
        let _ = writeln!(s, "* ParamYear");
        let _ = writeln!(s, "{:8}", self.base_year);
        let _ = writeln!(s, "*");
        let _ = writeln!(s, "*M     AVERAGE WATER LEVEL IN CM");
        let _ = writeln!(
            s,
            "* 分潮    週期(HOURS)   振幅(CM)  相位角(rad)    Cj(CM) Sj(CM)"
        );
        let _ = writeln!(s, "{:8}{:12.4}", self.constituents.len(), self.mean_level);
        for c in &self.constituents {
            let _ = writeln!(
                s,
                "{:>8}{:12.4}{:12.4}{:12.4}{:12.4}{:12.4}",
                c.name,
                c.period,
                c.amplitude(),
                c.phase(),
                c.cos_coefficient,
                c.sin_coefficient
            );
        }
        s
    }
}
