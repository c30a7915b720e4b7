//! Annual hourly prediction report.

use crate::load_predictor;
use crate::report::AnnualReport;
use chrono::Local;
use log::info;
use std::path::Path;
use tide_data::DataPoint;
use tide_harmonic::hourly::HourlyGrid;
use tide_utils::dates::format_timestamp;

/// Predict every hour of `year` and write `<output_dir>/<year>_AnnualReport.txt`.
pub fn run_predict(
    param_file: &str,
    year: i32,
    output_dir: &str,
    station_name: &str,
    station_code: &str,
    grid_csv: Option<&str>,
) -> anyhow::Result<()> {
    let predictor = load_predictor(param_file, year)?;
    info!("Generating tide predictions for {}", year);
    let grid = HourlyGrid::generate(&predictor, year);

    let report = AnnualReport {
        grid: &grid,
        params: predictor.params(),
        station_name,
        station_code,
        generated: Local::now().date_naive(),
    }
    .render();

    std::fs::create_dir_all(output_dir)?;
    let report_path = Path::new(output_dir).join(format!("{}_AnnualReport.txt", year));
    std::fs::write(&report_path, report)?;
    info!("Annual report written to {}", report_path.display());

    if let Some(path) = grid_csv {
        write_grid_csv(&grid, path)?;
        info!("Hourly grid written to {}", path);
    }
    Ok(())
}

/// Write the grid as `time,value` rows.
fn write_grid_csv(grid: &HourlyGrid, path: &str) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["time", "value"])?;
    for point in DataPoint::from_grid(grid) {
        wtr.write_record([format_timestamp(&point.time), format!("{:.4}", point.value)])?;
    }
    wtr.flush()?;
    Ok(())
}
