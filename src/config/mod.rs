pub mod traits;
pub mod search;
pub mod manager;

pub use manager::{ConfigManager, DEFAULT_CONFIG_FILE, ENV_PREFIX};
pub use search::SearchConfig;
pub use traits::ConfigSection;
