use serde::{Deserialize, Serialize};

/// Summary of a loaded dataset file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub file_path: String,
    pub num_shares: usize,
    pub num_targets: usize,
    pub domains: Vec<String>,
    pub converted_shares: usize, // shares priced in another currency
    pub owned_value: f64,        // value of the owned floor, converted
}
