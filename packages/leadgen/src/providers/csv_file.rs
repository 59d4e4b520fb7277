//! CSV file source: district stubs exported by the discover stage or
//! prepared by hand.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::error::{SourceError, SourceResult};
use crate::traits::DistrictSource;
use crate::types::DistrictRecord;

/// One input row. Accepts either a `district_name` or `name` header; blank
/// enrollment reads as 0.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    district_name: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    enrollment: Option<String>,
}

pub struct CsvProvider {
    path: PathBuf,
}

impl CsvProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl DistrictSource for CsvProvider {
    async fn discover(&self) -> SourceResult<Vec<DistrictRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)
            .map_err(|e| SourceError::Input(Box::new(e)))?;

        let mut districts = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(|e| SourceError::Input(Box::new(e)))?;

            let Some(name) = non_empty(row.district_name).or_else(|| non_empty(row.name)) else {
                continue;
            };

            let mut record = DistrictRecord::new(name).with_source_tag(self.name());
            record.domain = non_empty(row.domain);
            record.website = non_empty(row.website);
            record.city = non_empty(row.city);
            record.enrollment = row
                .enrollment
                .and_then(|e| e.trim().replace(',', "").parse().ok())
                .unwrap_or(0);
            record.derive_domain_from_website();

            districts.push(record);
        }

        info!(path = %self.path.display(), count = districts.len(), "Loaded districts from CSV");
        Ok(districts)
    }

    fn name(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(tag: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "leadgen-csv-test-{}-{}.csv",
            tag,
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[tokio::test]
    async fn test_reads_district_name_header() {
        let path = write_temp(
            "full",
            "district_name,domain,enrollment,city\n\
             Leander ISD,leanderisd.org,42000,Leander\n\
             ,skipped.org,1,Nowhere\n",
        );

        let districts = CsvProvider::new(&path).discover().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].name, "Leander ISD");
        assert_eq!(districts[0].domain.as_deref(), Some("leanderisd.org"));
        assert_eq!(districts[0].enrollment, 42_000);
    }

    #[tokio::test]
    async fn test_accepts_name_header_and_blank_enrollment() {
        let path = write_temp("minimal", "name,enrollment\nFrisco ISD,\n");

        let districts = CsvProvider::new(&path).discover().await.unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].name, "Frisco ISD");
        assert_eq!(districts[0].enrollment, 0);
    }
}
