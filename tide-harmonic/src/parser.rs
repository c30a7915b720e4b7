//! Reader for the harmonic parameter text layout.
//!
//! The layout is line oriented. Three header lines may appear in any order,
//! each followed immediately by its data:
//!
//! ```text
//! * Observed Year
//! 2010
//! * 分潮數 平均潮位(CM)
//! 3 112.3750
//! * 分潮 週期(HOURS) 振幅(CM) 相位角(rad) Cj(CM) Sj(CM)
//! M2 12.4206 40.7 -0.52 35.1 -20.5
//! ...
//! ```
//!
//! Constituent rows need at least six whitespace separated fields:
//! name, period (hours), two ignored fields, Cj and Sj.

use crate::error::{ParseError, Result};
use crate::params::{Constituent, HarmonicParameters};
use log::debug;
use std::str::FromStr;

/// Marker on the line preceding the base year.
pub const BASE_YEAR_MARKER: &str = "Observed Year";
/// Constituent count column marker.
pub const COUNT_MARKER: &str = "分潮數";
/// Mean level column marker.
pub const MEAN_MARKER: &str = "平均潮位(CM)";
/// Cosine coefficient column marker.
pub const COS_MARKER: &str = "Cj(CM)";
/// Sine coefficient column marker.
pub const SIN_MARKER: &str = "Sj(CM)";

/// Minimum number of fields in a constituent row.
pub const CONSTITUENT_ROW_LENGTH: usize = 6;

/// Parse harmonic parameters from text.
///
/// Fails without a partial result when a header is missing, the base year or
/// count is not numeric, or fewer than the declared number of constituent
/// rows are well formed.
pub fn parse_parameters(text: &str) -> Result<HarmonicParameters> {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let base_year = parse_base_year(&lines)?;
    let (count, mean_level) = parse_count_and_mean(&lines)?;
    debug!(
        "parser: base year {}, {} constituents, mean level {} cm",
        base_year, count, mean_level
    );

    let table_start = lines
        .iter()
        .position(|line| line.contains(COS_MARKER) && line.contains(SIN_MARKER))
        .ok_or(ParseError::MissingConstituentHeader {
            cos_marker: COS_MARKER,
            sin_marker: SIN_MARKER,
        })?
        + 1;

    let constituents: Vec<Constituent> = lines
        .iter()
        .skip(table_start)
        .take(count)
        .filter_map(|line| {
            let row = parse_constituent_row(line);
            if row.is_none() {
                debug!("parser: malformed constituent row {:?}", line);
            }
            row
        })
        .collect();

    if constituents.len() != count {
        return Err(ParseError::CountMismatch {
            expected: count,
            found: constituents.len(),
        });
    }

    HarmonicParameters::new(base_year, mean_level, constituents)
}

fn line_after<'a>(lines: &[&'a str], predicate: impl Fn(&str) -> bool) -> Option<Option<&'a str>> {
    lines
        .iter()
        .position(|&line| predicate(line))
        .map(|i| lines.get(i + 1).copied())
}

fn parse_base_year(lines: &[&str]) -> Result<i32> {
    let missing = ParseError::MissingBaseYear {
        marker: BASE_YEAR_MARKER,
    };
    let value = line_after(lines, |line| line.contains(BASE_YEAR_MARKER))
        .flatten()
        .ok_or(missing)?;
    match value.parse::<i32>() {
        Ok(year) if year > 0 => Ok(year),
        _ => Err(ParseError::InvalidBaseYear(value.to_string())),
    }
}

fn parse_count_and_mean(lines: &[&str]) -> Result<(usize, f64)> {
    let value = line_after(lines, |line| {
        line.contains(COUNT_MARKER) && line.contains(MEAN_MARKER)
    })
    .ok_or(ParseError::MissingCountHeader {
        count_marker: COUNT_MARKER,
        mean_marker: MEAN_MARKER,
    })?
    .unwrap_or("");
    let mut tokens = value.split_whitespace();

    let count_token = tokens.next().unwrap_or("");
    let count = match count_token.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => return Err(ParseError::InvalidCount(count_token.to_string())),
    };

    let mean_token = tokens.next().unwrap_or("");
    let mean_level = mean_token
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidMeanLevel(mean_token.to_string()))?;

    Ok((count, mean_level))
}

fn parse_constituent_row(line: &str) -> Option<Constituent> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < CONSTITUENT_ROW_LENGTH {
        return None;
    }
    // fields 2 and 3 hold amplitude and phase, which are derived from Cj/Sj
    let period = fields[1].parse::<f64>().ok()?;
    let cos_coefficient = fields[4].parse::<f64>().ok()?;
    let sin_coefficient = fields[5].parse::<f64>().ok()?;
    Some(Constituent::new(
        fields[0],
        period,
        cos_coefficient,
        sin_coefficient,
    ))
}

impl FromStr for HarmonicParameters {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        parse_parameters(s)
    }
}
