//! Plain-text annual stage report.
//!
//! One page per month: a title block, a table with one row per day holding
//! the 24 hourly levels and the day's mean/max/min, and a footer naming the
//! harmonic parameters used.

use chrono::{Datelike, NaiveDate};
use std::fmt::Write;
use tide_data::summary::daily_stage;
use tide_harmonic::{hourly::HourlyGrid, params::HarmonicParameters};

const DELM_PLUS: &str = "----+------+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+-----+";
const DELM_MINUS: &str = "-----------------------------------------------------------------------------------------------------------------------------------------------------------------------+";
const TITLE_INDENT: usize = 75;
const CODE_INDENT: usize = 117;

pub struct AnnualReport<'a> {
    pub grid: &'a HourlyGrid,
    pub params: &'a HarmonicParameters,
    pub station_name: &'a str,
    pub station_code: &'a str,
    pub generated: NaiveDate,
}

impl AnnualReport<'_> {
    /// All twelve monthly pages.
    pub fn render(&self) -> String {
        (1..=12).map(|month| self.render_month(month)).collect()
    }

    pub fn render_month(&self, month: u32) -> String {
        let year = self.grid.year;
        let (first, days) = match month_bounds(year, month) {
            Some(bounds) => bounds,
            None => return String::new(),
        };
        let first_day = first.ordinal0() as usize;

        let mut s = String::new();
        let indent = " ".repeat(TITLE_INDENT);
        let _ = writeln!(s, "{indent}====================");
        let _ = writeln!(s, "{indent}{}天文潮預報水位", self.station_name);
        let _ = writeln!(s, "{indent}====================");
        let _ = writeln!(
            s,
            "YEAR:  {:04} MONTH:   {:02}{}STA. CODE : {} UNIT:    M",
            year,
            month,
            " ".repeat(CODE_INDENT),
            self.station_code
        );
        let _ = writeln!(s, "{DELM_MINUS}");
        s.push_str("MMDD ");
        for hour in 0..24 {
            let _ = write!(s, "{hour:6}");
        }
        s.push_str("  MEAN  MAX.  MIN.\n");
        let _ = writeln!(s, "{DELM_MINUS}");

        for day in 0..days {
            let _ = write!(s, "{:02}{:02} ", month, day + 1);
            if let Some(stage) = self.grid.days.get(first_day + day as usize) {
                for value in stage {
                    let _ = write!(s, "{value:6.2}");
                }
                let stats = daily_stage(stage);
                let _ = write!(s, "{:6.2}{:6.2}{:6.2}", stats.mean, stats.max, stats.min);
            }
            s.push('\n');
            if day == 9 || day == 19 {
                let _ = writeln!(s, "{DELM_PLUS}");
            }
        }
        let _ = writeln!(s, "{DELM_MINUS}");

        let _ = writeln!(
            s,
            "TIDE PARAMETERS BY HARMONIC ANALYSYS BASE ON CWB DATA AT {} YEAR. NO. OF PARAMETERS : {}",
            self.params.base_year(),
            self.params.len()
        );
        let _ = writeln!(
            s,
            "GENERATED AT: {} BY KSWRB",
            self.generated.format("%Y/%m/%d")
        );
        s.push('\n');
        s
    }
}

/// First day of the month and its length in days.
fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, u32)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, (next - first).num_days() as u32))
}

#[cfg(test)]
mod tests {
    use super::{month_bounds, AnnualReport};
    use chrono::NaiveDate;
    use tide_harmonic::hourly::HourlyGrid;
    use tide_harmonic::params::{Constituent, HarmonicParameters};
    use tide_harmonic::predictor::TidePredictor;

    fn report_for(year: i32) -> String {
        let params =
            HarmonicParameters::new(2010, 112.0, vec![Constituent::new("M2", 12.42, 40.0, 5.0)])
                .unwrap();
        let grid = HourlyGrid::generate(&TidePredictor::new(params.clone()), year);
        AnnualReport {
            grid: &grid,
            params: &params,
            station_name: "高雄站",
            station_code: "1486",
            generated: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
        }
        .render()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(month_bounds(2024, 2).unwrap().1, 29);
        assert_eq!(month_bounds(2023, 2).unwrap().1, 28);
        assert_eq!(month_bounds(2023, 12).unwrap().1, 31);
        assert!(month_bounds(2023, 13).is_none());
    }

    #[test]
    fn test_report_has_every_day() {
        let report = report_for(2024);
        assert!(report.contains("YEAR:  2024 MONTH:   01"));
        assert!(report.contains("YEAR:  2024 MONTH:   12"));
        assert!(report.contains("\n0229 "));
        assert!(report.contains("\n1231 "));
        assert!(report.contains("高雄站天文潮預報水位"));
        assert!(report.contains("STA. CODE : 1486 UNIT:    M"));
        assert!(report.contains(
            "TIDE PARAMETERS BY HARMONIC ANALYSYS BASE ON CWB DATA AT 2010 YEAR. NO. OF PARAMETERS : 1"
        ));
        assert!(report.contains("GENERATED AT: 2024/01/02 BY KSWRB"));
    }

    #[test]
    fn test_day_row_width() {
        let report = report_for(2023);
        assert!(!report.contains("\n0229 "));
        let row = report
            .lines()
            .find(|line| line.starts_with("0101 "))
            .unwrap();
        // MMDD plus space, then 24 hourly and 3 summary columns of width 6
        assert_eq!(row.len(), 5 + 27 * 6);
    }
}
