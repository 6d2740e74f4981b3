use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub publishing: PublishingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the telemetry API, e.g. `http://127.0.0.1:9000`.
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    5000
}

#[derive(Debug, Clone, Deserialize)]
pub struct PublishingConfig {
    /// How often /ws chart streams re-fetch and push a fresh series.
    pub refresh_interval_ms: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    /// Fixed UTC offset for bucket labels. Host local zone when omitted.
    pub utc_offset_minutes: Option<i32>,
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.upstream.base_url.is_empty(),
            "upstream.base_url must be non-empty"
        );
        anyhow::ensure!(
            self.upstream.base_url.starts_with("http://")
                || self.upstream.base_url.starts_with("https://"),
            "upstream.base_url must start with http:// or https://, got {}",
            self.upstream.base_url
        );
        anyhow::ensure!(
            self.upstream.timeout_ms > 0,
            "upstream.timeout_ms must be > 0, got {}",
            self.upstream.timeout_ms
        );
        anyhow::ensure!(
            self.publishing.refresh_interval_ms > 0,
            "publishing.refresh_interval_ms must be > 0, got {}",
            self.publishing.refresh_interval_ms
        );
        if let Some(offset) = self.display.utc_offset_minutes {
            anyhow::ensure!(
                (-1439..=1439).contains(&offset),
                "display.utc_offset_minutes must be within +/-1439, got {}",
                offset
            );
        }
        Ok(())
    }
}
