use serde::{Deserialize, Serialize};
use shared::QuickStats;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid YAML in config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid predictor URL {url}: {source}")]
    PredictorUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub predictor: PredictorConfig,
    pub documents: DocumentConfig,
    pub stats: QuickStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub frontend_dir: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PredictorConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DocumentConfig {
    pub max_size_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            frontend_dir: "frontend/dist".to_string(),
        }
    }
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_size_bytes: 10 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    /// Where the config file is looked up when `APP_CONFIG` is not set.
    pub fn default_path() -> PathBuf {
        match std::env::var("CARGO_MANIFEST_DIR") {
            Ok(manifest_dir) => Path::new(&manifest_dir).join("../config/app.yaml"),
            Err(_) => PathBuf::from("config/app.yaml"),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&config_str)
    }

    /// Reads the YAML file (falling back to defaults when it is missing),
    /// then applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("APP_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path());

        let mut config = if path.exists() {
            log::info!("Loading configuration from {}", path.display());
            Self::load_file(&path)?
        } else {
            log::warn!("Config file {} not found, using defaults", path.display());
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
        }
        if let Some(dir) = lookup("FRONTEND_DIR") {
            self.server.frontend_dir = dir;
        }
        if let Some(url) = lookup("PREDICTOR_URL") {
            self.predictor.url = Some(url).filter(|u| !u.trim().is_empty());
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.documents.max_size_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: "documents.max_size_bytes",
                value: "0".to_string(),
            });
        }
        self.predictor_base_url()?;
        Ok(())
    }

    /// Parsed predictor base URL, always ending in `/` so that joining
    /// endpoint names keeps any path prefix.
    pub fn predictor_base_url(&self) -> Result<Option<Url>, ConfigError> {
        let Some(raw) = self.predictor.url.as_deref() else {
            return Ok(None);
        };
        let normalized = if raw.ends_with('/') {
            raw.to_string()
        } else {
            format!("{}/", raw)
        };
        Url::parse(&normalized)
            .map(Some)
            .map_err(|source| ConfigError::PredictorUrl {
                url: raw.to_string(),
                source,
            })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn parses_repository_config() {
        let yaml = include_str!("../../config/app.yaml");
        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.predictor.url, None);
        assert_eq!(config.stats, QuickStats::default());
        assert_eq!(config.documents.max_size_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = AppConfig::from_yaml("server:\n  port: 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.documents, DocumentConfig::default());
    }

    #[test]
    fn defaults_match_repository_config() {
        let yaml = include_str!("../../config/app.yaml");
        assert_eq!(AppConfig::from_yaml(yaml).unwrap(), AppConfig::default());
        assert_eq!(AppConfig::from_yaml("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn environment_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            ("PORT", "9090"),
            ("PREDICTOR_URL", "http://model:8000/api"),
            ("HOST", "127.0.0.1"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        let base = config.predictor_base_url().unwrap().unwrap();
        assert_eq!(base.as_str(), "http://model:8000/api/");
        assert_eq!(base.join("predict").unwrap().as_str(), "http://model:8000/api/predict");
    }

    #[test]
    fn blank_predictor_url_means_unconfigured() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| (key == "PREDICTOR_URL").then(|| "  ".to_string()))
            .unwrap();
        assert_eq!(config.predictor_base_url().unwrap(), None);
    }

    #[test]
    fn rejects_bad_port_and_url() {
        let mut config = AppConfig::default();
        let err = config
            .apply_overrides(|key| (key == "PORT").then(|| "eighty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "PORT", .. }));

        config.predictor.url = Some("not a url".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::PredictorUrl { .. })));
    }
}
