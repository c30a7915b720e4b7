//! High/low water analysis of a predicted year.

use crate::load_predictor;
use log::info;
use serde::Serialize;
use tide_data::extrema::{daily_extrema, DailyExtrema};
use tide_data::summary::{summarize_points, Summary};
use tide_data::turning_points::{detect_turning_points, tidal_ranges, TidalRange, TurningPoint};
use tide_data::DataPoint;
use tide_harmonic::hourly::HourlyGrid;

/// Everything derived from one year of hourly predictions.
#[derive(Debug, Serialize)]
pub struct TideAnalysis {
    pub year: i32,
    pub base_year: i32,
    pub summary: Summary,
    pub ranges: TidalRange,
    pub daily: DailyExtrema,
    pub turning_points: Vec<TurningPoint>,
}

impl TideAnalysis {
    pub fn from_grid(grid: &HourlyGrid, base_year: i32) -> TideAnalysis {
        let points = DataPoint::from_grid(grid);
        let turning_points = detect_turning_points(&points);
        TideAnalysis {
            year: grid.year,
            base_year,
            summary: summarize_points(&points),
            ranges: tidal_ranges(&turning_points),
            daily: daily_extrema(&points),
            turning_points,
        }
    }
}

/// Write the analysis of `year` as JSON to `output`, or stdout.
pub fn run_tides(param_file: &str, year: i32, output: Option<&str>) -> anyhow::Result<()> {
    let predictor = load_predictor(param_file, year)?;
    let grid = HourlyGrid::generate(&predictor, year);
    let analysis = TideAnalysis::from_grid(&grid, predictor.params().base_year());
    info!(
        "{} turning points, max flood {:.2} m, max ebb {:.2} m",
        analysis.turning_points.len(),
        analysis.ranges.max_flood,
        analysis.ranges.max_ebb
    );

    let json = serde_json::to_string_pretty(&analysis)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            info!("Tide analysis written to {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
