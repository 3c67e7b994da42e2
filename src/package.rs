use crate::dispatch::read_package;
use crate::error::{PackageError, WorkoutError};
use crate::workout::Workout;
use log::debug;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One raw sensor package: a workout code and its positional values
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    pub fn parse(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.code, &self.data)
    }
}

/// Packages used when nothing else is supplied
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load packages from a `.json` or `.csv` file, chosen by extension
pub fn load_packages<P: AsRef<Path>>(path: P) -> Result<Vec<Package>, PackageError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let packages = match ext.as_deref() {
        Some("json") => from_json(BufReader::new(File::open(path)?))?,
        Some("csv") => from_csv(BufReader::new(File::open(path)?))?,
        _ => return Err(PackageError::UnsupportedInput(path.display().to_string())),
    };

    debug!("loaded {} packages from {}", packages.len(), path.display());
    Ok(packages)
}

/// Reads an array of `{"code": ..., "data": [...]}` objects
pub fn from_json<R: Read>(reader: R) -> Result<Vec<Package>, PackageError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads headerless rows of `CODE,v1,v2,...`; rows may differ in length
pub fn from_csv<R: Read>(reader: R) -> Result<Vec<Package>, PackageError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut packages = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let row = idx + 1;

        let mut fields = record.iter();
        let code = match fields.next() {
            Some(code) if !code.is_empty() => code,
            _ => return Err(PackageError::EmptyRow(row)),
        };

        let data = fields
            .map(|value| {
                value.parse::<f64>().map_err(|_| PackageError::InvalidNumber {
                    row,
                    value: value.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        packages.push(Package::new(code, data));
    }

    Ok(packages)
}
