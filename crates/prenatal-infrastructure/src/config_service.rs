//! Configuration service implementation.
//!
//! Loads the optional `config.toml` and overlays the environment on top of
//! it. A missing file is normal; a malformed one is reported and ignored so
//! the assistant still starts in demo mode.

use std::path::PathBuf;

use prenatal_core::config::{AssistantConfig, ConfigFile};

use crate::paths::AssistantPaths;
use crate::storage::{AtomicTomlError, AtomicTomlFile};

#[derive(Debug, Clone)]
pub struct ConfigService {
    config_path: Option<PathBuf>,
}

impl ConfigService {
    /// Service reading the default config file location.
    pub fn new(paths: &AssistantPaths) -> Self {
        let config_path = match paths.config_file() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("[ConfigService] No config directory: {}", e);
                None
            }
        };
        Self { config_path }
    }

    /// Service reading an explicit config file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: Some(path),
        }
    }

    /// Reads the config file, if any.
    pub fn load_file(&self) -> Result<ConfigFile, AtomicTomlError> {
        match &self.config_path {
            Some(path) => Ok(AtomicTomlFile::<ConfigFile>::new(path.clone())
                .load()?
                .unwrap_or_default()),
            None => Ok(ConfigFile::default()),
        }
    }

    /// Resolves the configuration from the file and the process environment.
    pub fn load(&self) -> AssistantConfig {
        self.load_with(|key| std::env::var(key).ok())
    }

    /// Like [`load`](Self::load) with a custom environment lookup.
    pub fn load_with<F>(&self, lookup: F) -> AssistantConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = self.load_file().unwrap_or_else(|e| {
            tracing::warn!("[ConfigService] Ignoring unreadable config file: {}", e);
            ConfigFile::default()
        });

        let config = file.apply_env(lookup).into_config();
        tracing::info!(
            "[ConfigService] mode={} gateway_configured={}",
            config.mode,
            config.gateway.is_some()
        );
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prenatal_core::config::env_keys;
    use prenatal_core::conversation::AssistantMode;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_demo_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(&AssistantPaths::new(Some(temp_dir.path().to_path_buf())));
        let config = service.load_with(|_| None);
        assert_eq!(config, AssistantConfig::demo());
    }

    #[test]
    fn test_file_values_are_used() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
demo_mode = false
demo_delay_ms = 0
endpoint_url = "https://example.supabase.co"
anon_key = "anon"
"#,
        )
        .unwrap();

        let config = ConfigService::with_path(path).load_with(|_| None);
        assert_eq!(config.mode, AssistantMode::Remote);
        assert_eq!(config.demo_delay, Duration::ZERO);
        assert!(config.gateway.is_some());
    }

    #[test]
    fn test_environment_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "demo_mode = false\n").unwrap();

        let config = ConfigService::with_path(path).load_with(|key| {
            (key == env_keys::DEMO_MODE).then(|| "true".to_string())
        });
        assert!(config.is_demo_mode());
    }

    #[test]
    fn test_function_name_from_environment() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "endpoint_url = \"https://example.supabase.co\"\nanon_key = \"anon\"\nfunction_name = \"from-file\"\n",
        )
        .unwrap();

        let config = ConfigService::with_path(path).load_with(|key| {
            (key == env_keys::FUNCTION).then(|| "prenatal-chat".to_string())
        });
        assert_eq!(
            config.gateway.unwrap().function_url(),
            "https://example.supabase.co/functions/v1/prenatal-chat"
        );
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "demo_mode = \"maybe\"\n").unwrap();

        let config = ConfigService::with_path(path).load_with(|_| None);
        assert!(config.is_demo_mode());
    }
}
