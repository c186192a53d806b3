use serde::Deserialize;

use crate::generator::FixtureGenerator;
use crate::sampling::RetryPolicy;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    #[serde(default)]
    pub generator: GeneratorSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub include_unicode: bool,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    // Fixes the RNG so the random cases repeat between runs.
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub cross_check: bool,
}

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_attempts() -> u32 {
    RetryPolicy::DEFAULT_MAX_ATTEMPTS
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            include_unicode: false,
            max_attempts: default_max_attempts(),
            seed: None,
        }
    }
}

impl GeneratorSettings {
    pub fn generator(&self) -> FixtureGenerator {
        FixtureGenerator::new(RetryPolicy::new(self.max_attempts))
    }
}

/// Reads `configuration.yaml` from the working directory (if present), then
/// lets `APP_`-prefixed environment variables override it,
/// e.g. `APP_GENERATOR__INCLUDE_UNICODE=true`.
pub fn get_config() -> Result<Configuration, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;

    let configs = config::Config::builder()
        .add_source(
            config::File::from(base_path.join("configuration.yaml"))
                .format(config::FileFormat::Yaml)
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    configs.try_deserialize::<Configuration>()
}
