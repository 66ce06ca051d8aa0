use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File, FileFormat, Map, Source};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Settings read once at startup and passed to whatever needs them.
///
/// Keys are case-insensitive: environment and `.env` keys are lowercased
/// before they are merged.
#[derive(Deserialize)]
pub struct AppConfig {
    pub aws_access_key: String,
    pub aws_secret_key: String,
    pub bucket_name: String,
    aws_region: Option<String>,
    pub endpoint_url: Option<String>, // S3-compatible stores (MinIO etc.)
    force_path_style: Option<bool>,
    port: Option<u16>,
    bind_address: Option<String>,
    log_level: Option<String>,
    pub log_path: Option<String>,
    request_timeout_seconds: Option<u64>,
}

impl AppConfig {
    /// Load from an optional TOML file, then `.env`, then the process environment.
    /// Later sources win.
    pub fn load<P: AsRef<Path>>(config_file: Option<P>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path.as_ref()).format(FileFormat::Toml));
        }
        builder = builder
            .add_source(dotenv_source(
                File::new(".env", FileFormat::Ini).required(false),
            )?)
            .add_source(Environment::default());
        Self::from_builder(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("aws_access_key", &self.aws_access_key),
            ("aws_secret_key", &self.aws_secret_key),
            ("bucket_name", &self.bucket_name),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Message(format!("{name} must not be empty")));
            }
        }
        if self.request_timeout_seconds == Some(0) {
            return Err(ConfigError::Message(
                "request_timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_region(&self) -> String {
        self.aws_region
            .clone()
            .unwrap_or_else(|| "us-east-1".to_string())
    }

    pub fn get_force_path_style(&self) -> bool {
        self.force_path_style.unwrap_or(false)
    }

    pub fn get_port(&self) -> u16 {
        self.port.unwrap_or(8002)
    }

    pub fn get_bind_address(&self) -> &str {
        self.bind_address.as_deref().unwrap_or("0.0.0.0")
    }

    pub fn get_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }

    pub fn get_request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds.unwrap_or(30))
    }
}

/// Read `KEY=VALUE` lines and expose them as an environment source, so their
/// keys are lowercased the same way as process environment keys.
pub fn dotenv_source(
    file: impl Source + Send + Sync + 'static,
) -> Result<Environment, ConfigError> {
    let entries: Map<String, String> = config::Config::builder()
        .add_source(file)
        .build()?
        .try_deserialize()?;
    let entries = entries
        .into_iter()
        .map(|(key, value)| (key.to_lowercase(), value))
        .collect();
    Ok(Environment::default().source(Some(entries)))
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("aws_access_key", &self.aws_access_key)
            .field("aws_secret_key", &"***")
            .field("bucket_name", &self.bucket_name)
            .field("aws_region", &self.aws_region)
            .field("endpoint_url", &self.endpoint_url)
            .field("force_path_style", &self.force_path_style)
            .field("port", &self.port)
            .field("bind_address", &self.bind_address)
            .field("log_level", &self.log_level)
            .field("log_path", &self.log_path)
            .field("request_timeout_seconds", &self.request_timeout_seconds)
            .finish()
    }
}
