//! High/low water detection and flood/ebb ranges.

use crate::DataPoint;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TurningKind {
    High,
    Low,
}

/// A local high or low water.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TurningPoint {
    pub time: NaiveDateTime,
    pub value: f64,
    pub kind: TurningKind,
}

/// Largest low-to-high (flood) and high-to-low (ebb) change, in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TidalRange {
    pub max_flood: f64,
    pub max_ebb: f64,
}

/// Detect alternating high and low turning points in time-ordered points.
///
/// An interior point is a high when it rises above its predecessor and is
/// not below its successor, and a low in the mirrored case. Only the trailing
/// comparison admits equality, so a plateau yields at most one detection.
/// A candidate of the same kind as the previous detection is dropped.
pub fn detect_turning_points(points: &[DataPoint]) -> Vec<TurningPoint> {
    let mut turning_points: Vec<TurningPoint> = Vec::new();
    for window in points.windows(3) {
        let (prev, current, next) = (window[0].value, window[1], window[2].value);
        let kind = if current.value > prev && current.value >= next {
            TurningKind::High
        } else if current.value < prev && current.value <= next {
            TurningKind::Low
        } else {
            continue;
        };
        if turning_points.last().map_or(true, |last| last.kind != kind) {
            turning_points.push(TurningPoint {
                time: current.time,
                value: current.value,
                kind,
            });
        }
    }
    turning_points
}

/// Maximum flood and ebb range over consecutive turning points.
pub fn tidal_ranges(turning_points: &[TurningPoint]) -> TidalRange {
    let mut range = TidalRange::default();
    for pair in turning_points.windows(2) {
        let change = (pair[1].value - pair[0].value).abs();
        match (pair[0].kind, pair[1].kind) {
            (TurningKind::Low, TurningKind::High) => range.max_flood = range.max_flood.max(change),
            (TurningKind::High, TurningKind::Low) => range.max_ebb = range.max_ebb.max(change),
            _ => {}
        }
    }
    range
}
