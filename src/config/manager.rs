use super::{search::SearchConfig, traits::ConfigSection};
use crate::error::AllocationError;
use ::config::{Config, Environment, File};
use std::path::{Path, PathBuf};

/// Prefix of environment variables overriding the configuration,
/// e.g. `PORTFOLIO_ALLOCATION_GENERATIONS=500`
pub const ENV_PREFIX: &str = "PORTFOLIO_ALLOCATION";

/// Config file looked up in the home directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = ".portfolio-allocation.toml";

/// Layers built-in defaults, a config file and environment variables
pub struct ConfigManager {
    config: SearchConfig,
    source: Option<PathBuf>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
            source: None,
        }
    }

    /// Load the configuration.
    ///
    /// An explicit `config_file` must exist. Without one, the default file in
    /// the home directory is used when present.
    pub fn load(config_file: Option<&Path>) -> Result<Self, AllocationError> {
        Self::load_with(config_file, default_config_path(), ENV_PREFIX)
    }

    pub fn load_with(
        config_file: Option<&Path>,
        fallback: Option<PathBuf>,
        env_prefix: &str,
    ) -> Result<Self, AllocationError> {
        let mut builder = Config::builder().add_source(Config::try_from(&SearchConfig::default())?);

        let source = match config_file {
            Some(path) => {
                builder = builder.add_source(File::from(path).required(true));
                Some(path.to_path_buf())
            }
            None => match fallback {
                Some(path) if path.exists() => {
                    builder = builder.add_source(File::from(path.as_path()).required(false));
                    Some(path)
                }
                _ => None,
            },
        };

        let config: SearchConfig = builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;

        if let Some(path) = &source {
            log::info!("Using config file: {}", path.display());
        }
        log::debug!("Loaded {} config: {:?}", SearchConfig::section_name(), config);

        Ok(Self { config, source })
    }

    pub fn get(&self) -> &SearchConfig {
        &self.config
    }

    /// Config file the settings were read from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Apply changes, e.g. command-line overrides, and validate the result
    pub fn update<F>(&mut self, f: F) -> Result<(), AllocationError>
    where
        F: FnOnce(&mut SearchConfig),
    {
        let mut config = self.config.clone();
        f(&mut config);
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Serialize the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, AllocationError> {
        toml::to_string_pretty(&self.config)
            .map_err(|e| AllocationError::Configuration(format!("Failed to serialize: {}", e)))
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(DEFAULT_CONFIG_FILE))
}
