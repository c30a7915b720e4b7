//! Observed vs predicted comparison.

use crate::load_predictor;
use log::{info, warn};
use std::path::Path;
use tide_data::comparison::{
    align, comparison_rmse, observed_values, predicted_values, times, ComparisonRow,
};
use tide_data::summary::{summarize, Extreme, Summary};
use tide_data::turning_points::{detect_turning_points, tidal_ranges};
use tide_data::DataPoint;
use tide_harmonic::hourly::HourlyGrid;
use tide_harmonic::observation::Observation;
use tide_utils::dates::format_timestamp;

/// Compare `year`'s hourly predictions against the observations in
/// `obs_file` and write `comparison_<params>_vs_<obs>_<year>.csv`.
///
/// Only observations inside `year` that fall exactly on the hour are
/// compared. `limit` bounds the leading window that is summarized in the
/// log (0 = all rows).
pub fn run_compare(
    param_file: &str,
    year: i32,
    obs_file: &str,
    output_dir: &str,
    limit: usize,
) -> anyhow::Result<()> {
    let predictor = load_predictor(param_file, year)?;
    let grid = HourlyGrid::generate(&predictor, year);

    let obs_data = std::fs::read_to_string(obs_file)
        .map_err(|e| anyhow::anyhow!("Failed to read observation file {}: {}", obs_file, e))?;
    let observations = Observation::load_observations(&obs_data)?;
    info!("Read {} observations from {}", observations.len(), obs_file);

    let rows = align(&observations, &grid);
    if rows.is_empty() {
        warn!("No observations in {} match the predicted year {}", obs_file, year);
        return Ok(());
    }
    info!("RMSE over {} hours of {}: {:.4} m", rows.len(), year, comparison_rmse(&rows));

    std::fs::create_dir_all(output_dir)?;
    let output = Path::new(output_dir).join(comparison_file_name(param_file, obs_file, year));
    write_comparison_csv(&rows, &output)?;
    info!("Comparison CSV written to {}", output.display());

    let window = if limit > 0 && rows.len() > limit {
        &rows[..limit]
    } else {
        &rows[..]
    };
    log_window(window);
    Ok(())
}

fn comparison_file_name(param_file: &str, obs_file: &str, year: i32) -> String {
    let stem = |path: &str| {
        Path::new(path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    format!("comparison_{}_vs_{}_{}.csv", stem(param_file), stem(obs_file), year)
}

fn write_comparison_csv(rows: &[ComparisonRow], path: &Path) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn log_window(window: &[ComparisonRow]) {
    let observed = observed_values(window);
    let predicted = predicted_values(window);
    let window_times = times(window);
    info!("RMSE over the first {} hours: {:.4} m", window.len(), comparison_rmse(window));
    log_summary("observed", &summarize(&observed, &window_times));
    log_summary("predicted", &summarize(&predicted, &window_times));

    let observed_points: Vec<DataPoint> = window
        .iter()
        .map(|r| DataPoint::new(r.time, r.observed))
        .collect();
    let range = tidal_ranges(&detect_turning_points(&observed_points));
    info!(
        "Observed max flood range {:.2} m, max ebb range {:.2} m",
        range.max_flood, range.max_ebb
    );
}

fn log_summary(label: &str, summary: &Summary) {
    if summary.is_empty() {
        return;
    }
    info!(
        "{}: max {}, min {}, avg {:.2} m",
        label,
        describe_extreme(&summary.max),
        describe_extreme(&summary.min),
        summary.avg.value
    );
}

fn describe_extreme(extreme: &Extreme) -> String {
    match extreme.time {
        Some(time) => format!("{:.2} m at {}", extreme.value, format_timestamp(&time)),
        None => "n/a".to_string(),
    }
}
