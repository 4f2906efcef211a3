use portfolio_allocation::data::JsonConnector;
use portfolio_allocation::AllocationError;
use std::path::PathBuf;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("portfolio-allocation-data-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_fixture() {
    let dataset = JsonConnector::load_and_validate("tests/data/portfolio.json").unwrap();

    assert_eq!(dataset.share_count(), 4);
    assert_eq!(dataset.targets().len(), 2);

    let codes: Vec<&str> = dataset.shares().iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["CW8", "MEUD", "VWO", "AGGH"]);

    let vwo = &dataset.shares()[2];
    assert_eq!(vwo.owned, 10);
    assert_eq!(vwo.curr_ratio, 0.92);
    assert_eq!(vwo.allocations["geography"]["emerging"], 100.0);
}

#[test]
fn test_fixture_metadata() {
    let dataset = JsonConnector::load("tests/data/portfolio.json").unwrap();
    let metadata = JsonConnector::create_metadata("tests/data/portfolio.json", &dataset);

    assert_eq!(metadata.num_shares, 4);
    assert_eq!(metadata.domains, vec!["asset".to_string(), "geography".to_string()]);
    assert_eq!(metadata.converted_shares, 1);
}

#[test]
fn test_missing_file_is_fatal() {
    let result = JsonConnector::load_and_validate("tests/data/absent.json");
    assert!(matches!(result, Err(AllocationError::DataLoading(_))));
}

#[test]
fn test_malformed_json_is_fatal() {
    let path = write_temp("malformed.json", "{ \"targets\": [ ");
    let result = JsonConnector::load_and_validate(&path);

    assert!(matches!(result, Err(AllocationError::Serde(_))));
}

#[test]
fn test_negative_owned_is_rejected() {
    let path = write_temp(
        "negative.json",
        r#"{ "targets": [], "shares": [ { "code": "X", "owned": -3, "price": 1.0 } ] }"#,
    );
    let result = JsonConnector::load_and_validate(&path);

    assert!(matches!(result, Err(AllocationError::Validation(_))));
}

#[test]
fn test_unbalanced_targets_only_warn() {
    let path = write_temp(
        "unbalanced.json",
        r#"{
            "targets": [ { "name": "geo", "allocation": { "eu": 30, "us": 30 } } ],
            "shares": [ { "code": "X", "price": 1.0, "allocations": { "geo": { "eu": 100 } } } ]
        }"#,
    );

    let dataset = JsonConnector::load_and_validate(&path).unwrap();
    assert_eq!(dataset.share_count(), 1);
}
