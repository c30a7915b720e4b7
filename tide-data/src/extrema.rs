use crate::DataPoint;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Daily higher-high (HHW) and lower-low (LLW) water, one entry per day
/// that has data, ordered by day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyExtrema {
    pub highs: Vec<DataPoint>,
    pub lows: Vec<DataPoint>,
}

/// Highest and lowest point of each calendar day.
///
/// When the extreme value occurs more than once in a day the first
/// occurrence wins. Days without points are absent from the output.
pub fn daily_extrema(points: &[DataPoint]) -> DailyExtrema {
    let mut days: BTreeMap<NaiveDate, (DataPoint, DataPoint)> = BTreeMap::new();
    for point in points {
        days.entry(point.time.date())
            .and_modify(|(high, low)| {
                if point.value > high.value {
                    *high = *point;
                }
                if point.value < low.value {
                    *low = *point;
                }
            })
            .or_insert((*point, *point));
    }
    let (highs, lows): (Vec<DataPoint>, Vec<DataPoint>) = days.into_values().unzip();
    DailyExtrema { highs, lows }
}
