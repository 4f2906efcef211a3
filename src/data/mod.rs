pub mod connectors;

pub use connectors::{DataValidator, DatasetMetadata, JsonConnector};
