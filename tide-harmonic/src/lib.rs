//! Harmonic tide prediction.
//!
//! Parses a station's harmonic constants, predicts hourly astronomical tide
//! heights for any calendar year at or after the constants' base year, and
//! loads observed water levels for comparison.
//!
//! ```rust
//! use tide_harmonic::{hourly::HourlyGrid, predictor::TidePredictor};
//!
//! let text = "Observed Year\n2020\n分潮數 平均潮位(CM)\n1 50.0\n分潮 週期 振幅 相位 Cj(CM) Sj(CM)\nM2 12.42 30 0 30 0\n";
//! let predictor = TidePredictor::new(text.parse().unwrap());
//! let grid = HourlyGrid::generate(&predictor, 2024);
//! assert_eq!(grid.len(), 8784);
//! ```

pub mod error;
pub mod hourly;
pub mod observation;
pub mod params;
pub mod parser;
pub mod predictor;
