use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use crate::error::DashboardError;
use crate::models::RawRecord;

/// Columns the merged file must carry. Anything else in the header is ignored.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Country Name",
    "Year",
    "GDP_Value",
    "co2",
    "co2_per_capita",
];

/// Read every row of the merged CO₂/GDP file, in file order.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RawRecord>, DashboardError> {
    let path = path.as_ref();
    let csv_error = |source: csv::Error| DashboardError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(|source| DashboardError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);

    // Check the header before touching any data row
    let headers = reader.headers().map_err(csv_error)?.clone();
    if let Some(column) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(DashboardError::MissingColumn {
            path: path.to_path_buf(),
            column: *column,
        });
    }

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: RawRecord = result.map_err(csv_error)?;
        records.push(record);
    }

    Ok(records)
}
