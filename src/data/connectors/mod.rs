mod json;
mod types;
mod validator;

pub use json::JsonConnector;
pub use types::DatasetMetadata;
pub use validator::DataValidator;
