use crate::error::{AllocationError, Result};
use crate::types::Dataset;
use super::{types::DatasetMetadata, validator::DataValidator};
use std::collections::BTreeSet;
use std::path::Path;

pub struct JsonConnector;

impl JsonConnector {
    /// Load a JSON dataset file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AllocationError::DataLoading(format!(
                "Data file does not exist: {}",
                path.display()
            )));
        }

        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Deserialize a dataset from JSON text
    pub fn parse(raw: &str) -> Result<Dataset> {
        let dataset: Dataset = serde_json::from_str(raw)?;
        Ok(dataset)
    }

    /// Load and validate a JSON dataset file
    pub fn load_and_validate<P: AsRef<Path>>(path: P) -> Result<Dataset> {
        let dataset = Self::load(&path)?;

        DataValidator::validate_shares(&dataset)?;
        DataValidator::validate_targets(&dataset)?;

        // Suspicious but usable targets only produce warnings
        for warning in DataValidator::check_coverage(&dataset) {
            log::warn!("{}", warning);
        }

        Ok(dataset)
    }

    /// Create metadata for a loaded dataset
    pub fn create_metadata<P: AsRef<Path>>(path: P, dataset: &Dataset) -> DatasetMetadata {
        let domains: BTreeSet<String> = dataset
            .targets()
            .iter()
            .map(|t| t.name.clone())
            .chain(
                dataset
                    .shares()
                    .iter()
                    .flat_map(|s| s.allocations.keys().cloned()),
            )
            .collect();

        DatasetMetadata {
            file_path: path.as_ref().display().to_string(),
            num_shares: dataset.share_count(),
            num_targets: dataset.targets().len(),
            domains: domains.into_iter().collect(),
            converted_shares: dataset
                .shares()
                .iter()
                .filter(|s| s.curr_ratio != 1.0)
                .count(),
            owned_value: dataset
                .shares()
                .iter()
                .map(|s| s.value_of(s.owned))
                .sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "targets": [
            { "name": "geo", "allocation": { "europe": 60, "us": 40 } }
        ],
        "shares": [
            { "code": "CW8", "owned": 3, "price": 400.5, "curr_ratio": 1,
              "allocations": { "geo": { "europe": 20, "us": 80 } } },
            { "code": "VOO", "price": 410.0, "curr_ratio": 0.92,
              "allocations": { "geo": { "us": 100 } } },
            { "code": "MEUD", "price": 220.0 }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let dataset = JsonConnector::parse(SAMPLE).unwrap();

        assert_eq!(dataset.share_count(), 3);
        assert_eq!(dataset.targets().len(), 1);
        assert_eq!(dataset.targets()[0].allocation["europe"], 60.0);
        assert_eq!(dataset.shares()[0].owned, 3);
        assert_eq!(dataset.shares()[1].allocations["geo"]["us"], 100.0);
    }

    #[test]
    fn test_parse_defaults_missing_fields() {
        let dataset = JsonConnector::parse(SAMPLE).unwrap();
        let meud = &dataset.shares()[2];

        assert_eq!(meud.owned, 0);
        assert_eq!(meud.curr_ratio, 1.0);
        assert!(meud.allocations.is_empty());
    }

    #[test]
    fn test_parse_malformed_json() {
        let result = JsonConnector::parse(r#"{ "shares": [ { "code": "X", "#);
        assert!(matches!(result, Err(AllocationError::Serde(_))));
    }

    #[test]
    fn test_parse_schema_mismatch() {
        let result = JsonConnector::parse(r#"{ "shares": [ { "code": "X", "price": "cheap" } ] }"#);
        assert!(matches!(result, Err(AllocationError::Serde(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = JsonConnector::load("does/not/exist.json");
        assert!(matches!(result, Err(AllocationError::DataLoading(_))));
    }

    #[test]
    fn test_create_metadata() {
        let dataset = JsonConnector::parse(SAMPLE).unwrap();
        let metadata = JsonConnector::create_metadata("sample.json", &dataset);

        assert_eq!(metadata.file_path, "sample.json");
        assert_eq!(metadata.num_shares, 3);
        assert_eq!(metadata.num_targets, 1);
        assert_eq!(metadata.domains, vec!["geo".to_string()]);
        assert_eq!(metadata.converted_shares, 1);
        assert!((metadata.owned_value - 3.0 * 400.5).abs() < 1e-9);
    }
}
