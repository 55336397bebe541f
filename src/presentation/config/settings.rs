use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub intake: IntakeSettings,
    pub context: ContextSettings,
    pub backend: BackendSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntakeSettings {
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContextSettings {
    pub preview_rows: usize,
    pub max_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub provider: BackendProvider,
    pub request_timeout_secs: u64,
    pub hosted: HostedBackendSettings,
    pub extractive: ExtractiveBackendSettings,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendProvider {
    Extractive,
    Hosted,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HostedBackendSettings {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractiveBackendSettings {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Settings {
    /// Layered load: `appsettings.{Environment}.toml`, then `APP`-prefixed
    /// environment variables (`APP__BACKEND__PROVIDER=hosted`).
    pub fn load(environment: &Environment) -> Result<Self, config::ConfigError> {
        let configuration = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        configuration.try_deserialize()
    }
}
