use crate::domain::chart::Theme;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub source: SourceSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub endpoint_url: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LayoutSettings {
    pub settle_delay_ms: u64,
}

impl LayoutSettings {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("source.endpoint_url must not be empty")]
    MissingEndpoint,
}

/// Load `config/graph.*`, then apply `GRAPH__SECTION__KEY` environment overrides.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("config/graph").required(false))
        .add_source(config::Environment::with_prefix("GRAPH").separator("__"));

    finish(builder)
}

fn finish(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    let settings: Settings = builder.build()?.try_deserialize()?;

    if settings.source.endpoint_url.trim().is_empty() {
        return Err(ConfigError::MissingEndpoint);
    }

    Ok(settings)
}
