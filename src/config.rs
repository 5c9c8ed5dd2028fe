use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dirs;
use crate::error::{EngineError, Result};

/// Environment variable that overrides the configured listen port.
pub const PORT_ENV: &str = "ML_ENGINE_PORT";

/// User-configurable settings for the ML Engine server and CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Host address for the HTTP server (default: 0.0.0.0)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port for the HTTP server (default: 5002)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Name reported by the health probe
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Path of the document sensitivity model artifact
    #[serde(default = "dirs::default_model_path")]
    pub model_path: PathBuf,

    /// Release tag reported alongside every prediction
    #[serde(default = "default_model_version")]
    pub model_version: String,

    /// Run the text normalizer on request text before scoring
    #[serde(default)]
    pub normalize_input: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5002
}

fn default_service_name() -> String {
    "ML Engine".to_string()
}

fn default_model_version() -> String {
    "1.0.0".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            service_name: default_service_name(),
            model_path: dirs::default_model_path(),
            model_version: default_model_version(),
            normalize_input: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default config file path, then apply
    /// environment overrides.
    /// Returns default config if the file does not exist.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&dirs::config_path())?;
        config.apply_port_override(std::env::var(PORT_ENV).ok().as_deref())?;
        Ok(config)
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save the current configuration to the default config file path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&dirs::config_path())
    }

    /// Save the current configuration to an explicit file path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Replace the port with the value of `ML_ENGINE_PORT`, when set.
    pub fn apply_port_override(&mut self, value: Option<&str>) -> Result<()> {
        if let Some(raw) = value {
            self.port = raw.trim().parse().map_err(|_| {
                EngineError::Config(format!("{PORT_ENV} is not a valid port: {raw:?}"))
            })?;
        }
        Ok(())
    }

    /// Returns the server bind address string (e.g., "0.0.0.0:5002").
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5002);
        assert_eq!(config.service_name, "ML Engine");
        assert_eq!(config.model_version, "1.0.0");
        assert!(!config.normalize_input);
        assert_eq!(config.model_path, dirs::default_model_path());
    }

    #[test]
    fn test_bind_address() {
        let config = EngineConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:5002");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let toml_str = r#"
            port = 8080
            normalize_input = true
            model_path = "/srv/models/doc.json"
        "#;
        let config: EngineConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(config.normalize_input);
        assert_eq!(config.model_path, PathBuf::from("/srv/models/doc.json"));
        assert_eq!(config.service_name, "ML Engine");
    }

    #[test]
    fn test_port_override() {
        let mut config = EngineConfig::default();
        config.apply_port_override(Some("6000")).unwrap();
        assert_eq!(config.port, 6000);

        config.apply_port_override(None).unwrap();
        assert_eq!(config.port, 6000);

        let err = config.apply_port_override(Some("not-a-port")).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
        assert_eq!(config.port, 6000);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.port, 5002);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = EngineConfig {
            host: "127.0.0.1".to_string(),
            port: 9999,
            service_name: "Staging ML Engine".to_string(),
            model_path: dir.path().join("model.json"),
            model_version: "2.1.0".to_string(),
            normalize_input: true,
        };
        config.save_to(&path).unwrap();

        let loaded = EngineConfig::load_from(&path).unwrap();
        assert_eq!(loaded.host, "127.0.0.1");
        assert_eq!(loaded.port, 9999);
        assert_eq!(loaded.service_name, "Staging ML Engine");
        assert_eq!(loaded.model_version, "2.1.0");
        assert!(loaded.normalize_input);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = \"eleven\"").unwrap();
        assert!(matches!(
            EngineConfig::load_from(&path),
            Err(EngineError::TomlDe(_))
        ));
    }
}
