use crate::error::FormatError;
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use log::{debug, info};
use serde::Serialize;
use tide_utils::dates::parse_timestamp;

/// Header name of the timestamp column.
pub const TIME_COLUMN: &str = "initTime";

/// Header name of the water level column.
pub const VALUE_COLUMN: &str = "value";

/// A single observed water level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl Observation {
    /// Load observations from comma separated text with an `initTime,value` header.
    ///
    /// Rows are kept in file order. Rows that are too short, or whose
    /// timestamp or value does not parse, are skipped. Only a missing
    /// header column is an error.
    ///
    /// # Example CSV
    /// ```text
    /// "stationId","initTime","value"
    /// "1486","2013-01-01 00:00:00","0.52"
    /// ```
    pub fn load_observations(csv_data: &str) -> Result<Vec<Observation>, FormatError> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let headers = rdr.headers()?.clone();
        let time_index =
            column_index(&headers, TIME_COLUMN).ok_or(FormatError::MissingColumn(TIME_COLUMN))?;
        let value_index =
            column_index(&headers, VALUE_COLUMN).ok_or(FormatError::MissingColumn(VALUE_COLUMN))?;

        let mut observations = Vec::new();
        let mut skipped = 0u32;
        for result in rdr.records() {
            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    debug!("observation: unreadable row: {}", e);
                    skipped += 1;
                    continue;
                }
            };
            match Observation::from_record(&record, time_index, value_index) {
                Some(observation) => observations.push(observation),
                None => {
                    debug!("observation: skipping row {:?}", record);
                    skipped += 1;
                }
            }
        }
        info!(
            "Loaded {} observations, skipped {} malformed rows",
            observations.len(),
            skipped
        );
        Ok(observations)
    }

    fn from_record(
        record: &StringRecord,
        time_index: usize,
        value_index: usize,
    ) -> Option<Observation> {
        let timestamp = parse_timestamp(&clean_field(record.get(time_index)?)).ok()?;
        let value = clean_field(record.get(value_index)?)
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())?;
        Some(Observation { timestamp, value })
    }
}

fn clean_field(field: &str) -> String {
    field.replace('"', "").trim().to_string()
}

fn column_index(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| clean_field(h) == name)
}
