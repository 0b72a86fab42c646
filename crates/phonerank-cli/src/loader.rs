//! Phone dataset loading
//!
//! Datasets are CSV files with a header row, or JSON arrays of records when
//! the file extension is `.json`. CSV columns are matched by name; columns
//! the scorer does not use are ignored, and blank or non-numeric cells load
//! as missing values.

use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use anyhow::Context;
use phonerank_scoring::record::{PhoneRecord, RecordSet};
use serde::Deserialize;
use tracing::info;

/// One CSV row, before conversion into a [`PhoneRecord`].
#[derive(Debug, Deserialize)]
struct CsvPhoneRow {
    name: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    cpu_speed: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    cpu_cores: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    spec_score: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rear_primary: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    front_primary: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    refresh_rate: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    ppi: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    battery: Option<f64>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    price: Option<f64>,
}

impl From<CsvPhoneRow> for PhoneRecord {
    fn from(row: CsvPhoneRow) -> Self {
        Self {
            name: row.name,
            cpu_speed: row.cpu_speed,
            cpu_cores: row.cpu_cores,
            spec_score: row.spec_score,
            rear_primary: row.rear_primary,
            front_primary: row.front_primary,
            refresh_rate: row.refresh_rate,
            ppi: row.ppi,
            battery: row.battery,
            price: row.price,
        }
    }
}

/// Read a phone dataset, choosing the format from the file extension
///
/// # Arguments
///
/// * `path` - Path to a `.json` file or a CSV file
///
/// # Returns
///
/// Records in file order
///
/// # Errors
///
/// Returns error if the file cannot be opened or parsed
pub fn read_records_file<P>(path: P) -> anyhow::Result<RecordSet>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file = File::open(path)
        .with_context(|| format!("Failed to open phone dataset file: {}", path.display()))?;
    let reader = io::BufReader::new(file);
    let records = if is_json {
        serde_json::from_reader::<_, RecordSet>(reader)
            .with_context(|| format!("Failed to parse phone dataset JSON: {}", path.display()))?
    } else {
        read_csv(reader)
            .with_context(|| format!("Failed to parse phone dataset CSV: {}", path.display()))?
    };

    info!(
        path = %path.display(),
        records = records.len(),
        "loaded phone dataset"
    );
    Ok(records)
}

/// Parse CSV phone rows from `reader`.
pub fn read_csv<R>(reader: R) -> anyhow::Result<RecordSet>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    reader
        .deserialize::<CsvPhoneRow>()
        .enumerate()
        .map(|(row, result)| {
            result
                .map(PhoneRecord::from)
                .with_context(|| format!("Invalid CSV row {}", row + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use phonerank_scoring::record::RawAttribute;

    use super::*;

    #[test]
    fn test_read_csv_full_rows() {
        let data = "\
name,cpu_speed,cpu_cores,spec_score,rear_primary,front_primary,refresh_rate,ppi,battery,price
Alpha,3.2,8,89,200,32,144,460,4600,74999
Beta,2.4,8,78,64,16,120,395,5000,18999
";
        let records = read_csv(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        let alpha = &records.as_slice()[0];
        assert_eq!(alpha.name, "Alpha");
        assert_eq!(alpha.get(RawAttribute::CpuSpeed), Some(3.2));
        assert_eq!(alpha.get(RawAttribute::Price), Some(74999.0));
        assert_eq!(alpha.missing_attributes().count(), 0);
    }

    #[test]
    fn test_read_csv_extra_columns_and_reordering() {
        let data = "\
brand,price,name,battery,ppi,refresh_rate,front_primary,rear_primary,spec_score,cpu_cores,cpu_speed,os
Acme,9999,Gamma,6000,270,90,8,50,71,6,2.2,android
";
        let records = read_csv(data.as_bytes()).unwrap();
        let gamma = &records.as_slice()[0];
        assert_eq!(gamma.name, "Gamma");
        assert_eq!(gamma.get(RawAttribute::Battery), Some(6000.0));
        assert_eq!(gamma.get(RawAttribute::CpuSpeed), Some(2.2));
    }

    #[test]
    fn test_read_csv_blank_and_invalid_cells_are_missing() {
        let data = "\
name,cpu_speed,cpu_cores,spec_score,rear_primary,front_primary,refresh_rate,ppi,battery,price
Delta,,8,n/a,50,8,90,270,6000,9999
";
        let records = read_csv(data.as_bytes()).unwrap();
        let delta = &records.as_slice()[0];
        assert_eq!(
            delta.missing_attributes().collect::<Vec<_>>(),
            [RawAttribute::CpuSpeed, RawAttribute::SpecScore]
        );
    }

    #[test]
    fn test_read_csv_absent_column_is_missing() {
        let data = "name,price\nEpsilon,12000\n";
        let records = read_csv(data.as_bytes()).unwrap();
        let epsilon = &records.as_slice()[0];
        assert_eq!(epsilon.get(RawAttribute::Price), Some(12000.0));
        assert_eq!(epsilon.missing_attributes().count(), 8);
    }

    #[test]
    fn test_read_csv_requires_name() {
        let data = "price\n12000\n";
        let err = read_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_read_json_records() {
        let data = r#"[
            {"name": "Zeta", "cpu_speed": 2.0, "price": 15000.0},
            {"name": "Eta"}
        ]"#;
        let records: RecordSet = serde_json::from_str(data).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records.as_slice()[0].get(RawAttribute::CpuSpeed), Some(2.0));
        assert_eq!(records.as_slice()[1].missing_attributes().count(), 9);
    }
}
