//! Command implementations for the tide CLI.
//!
//! Provides subcommands for inspecting harmonic parameters, producing the
//! annual hourly prediction report, comparing predictions with observed
//! water levels, and dumping high/low water analysis.

use clap::Subcommand;
use tide_harmonic::params::HarmonicParameters;
use tide_harmonic::predictor::TidePredictor;

pub mod compare;
pub mod params;
pub mod predict;
pub mod report;
pub mod tides;

#[derive(Subcommand)]
pub enum Command {
    /// Print the harmonic parameters with derived amplitude and phase
    Params {
        /// Harmonic parameter file
        param_file: String,

        /// Also write the parameters back out in parameter file layout
        #[arg(long)]
        export: Option<String>,
    },

    /// Generate the annual hourly prediction report
    Predict {
        /// Harmonic parameter file
        param_file: String,

        /// Calendar year to predict
        year: i32,

        /// Directory for the report
        #[arg(short = 'o', long, default_value = ".")]
        output_dir: String,

        /// Station name shown in the report title
        #[arg(long, default_value = "高雄站")]
        station_name: String,

        /// Station code shown in the report header
        #[arg(long, default_value = "1486")]
        station_code: String,

        /// Also write the hourly grid as `time,value` CSV to this path
        #[arg(long)]
        grid_csv: Option<String>,
    },

    /// Compare predictions with observed water levels
    Compare {
        /// Harmonic parameter file
        param_file: String,

        /// Calendar year to predict
        year: i32,

        /// Observation CSV with `initTime` and `value` columns
        #[arg(long)]
        obs_file: String,

        /// Directory for the comparison CSV
        #[arg(short = 'o', long, default_value = ".")]
        output_dir: String,

        /// Rows in the summarized window (0 = all)
        #[arg(long, default_value_t = 720)]
        limit: usize,
    },

    /// Detect high/low waters, daily extremes and tidal ranges as JSON
    Tides {
        /// Harmonic parameter file
        param_file: String,

        /// Calendar year to predict
        year: i32,

        /// Output JSON path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Params { param_file, export } => params::run_params(&param_file, export.as_deref()),
        Command::Predict {
            param_file,
            year,
            output_dir,
            station_name,
            station_code,
            grid_csv,
        } => predict::run_predict(
            &param_file,
            year,
            &output_dir,
            &station_name,
            &station_code,
            grid_csv.as_deref(),
        ),
        Command::Compare {
            param_file,
            year,
            obs_file,
            output_dir,
            limit,
        } => compare::run_compare(&param_file, year, &obs_file, &output_dir, limit),
        Command::Tides {
            param_file,
            year,
            output,
        } => tides::run_tides(&param_file, year, output.as_deref()),
    }
}

/// Read and parse a harmonic parameter file.
pub(crate) fn load_parameters(param_file: &str) -> anyhow::Result<HarmonicParameters> {
    let text = std::fs::read_to_string(param_file)
        .map_err(|e| anyhow::anyhow!("Failed to read parameter file {}: {}", param_file, e))?;
    let params: HarmonicParameters = text
        .parse()
        .map_err(|e| anyhow::anyhow!("Failed to parse parameter file {}: {}", param_file, e))?;
    log::info!(
        "Loaded {} constituents (base year {}) from {}",
        params.len(),
        params.base_year(),
        param_file
    );
    Ok(params)
}

/// Load a predictor for `year`, rejecting years before the base year.
pub(crate) fn load_predictor(param_file: &str, year: i32) -> anyhow::Result<TidePredictor> {
    let params = load_parameters(param_file)?;
    if !params.supports_year(year) {
        anyhow::bail!(
            "Cannot predict {}: parameters in {} were fitted for {}",
            year,
            param_file,
            params.base_year()
        );
    }
    Ok(TidePredictor::new(params))
}
