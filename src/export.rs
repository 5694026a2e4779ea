use serde::Serialize;
use thiserror::Error;

use crate::entities::{EnvironmentalReading, HealthReport, WaterTest};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv writer flush failed: {0}")]
    Flush(#[from] std::io::Error),
    #[error("exported data was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Header row plus one row per report, columns in entity field order.
pub fn health_reports_csv(reports: &[HealthReport]) -> Result<String, ExportError> {
    to_csv(reports)
}

pub fn water_tests_csv(tests: &[WaterTest]) -> Result<String, ExportError> {
    to_csv(tests)
}

pub fn environmental_readings_csv(
    readings: &[EnvironmentalReading],
) -> Result<String, ExportError> {
    to_csv(readings)
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}
