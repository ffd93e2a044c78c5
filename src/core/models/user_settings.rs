use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::global_constants;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSettings {
    #[serde(default = "default_upload_endpoint_url")]
    pub upload_endpoint_url: String,
    #[serde(default = "default_api_key")]
    pub api_key: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

fn default_upload_endpoint_url() -> String {
    global_constants::DEFAULT_UPLOAD_ENDPOINT_URL.to_string()
}

fn default_api_key() -> String {
    global_constants::DEFAULT_API_KEY.to_string()
}

fn default_request_timeout_seconds() -> u64 {
    global_constants::DEFAULT_REQUEST_TIMEOUT_SECONDS
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            upload_endpoint_url: default_upload_endpoint_url(),
            api_key: default_api_key(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl UserSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        Self::load_from_path(&settings_path)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!(
                "[SETTINGS] No settings file found at {:?}, using defaults",
                settings_path
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: UserSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!(
            "[SETTINGS] Upload endpoint: {}",
            settings.upload_endpoint_url
        );

        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn uses_placeholder_api_key(&self) -> bool {
        self.api_key == global_constants::DEFAULT_API_KEY
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::APPLICATION_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_settings_default_values() {
        let settings = UserSettings::default();

        assert_eq!(settings.upload_endpoint_url, "https://xxxxx/api/1/upload");
        assert_eq!(settings.api_key, global_constants::DEFAULT_API_KEY);
        assert_eq!(settings.request_timeout(), Duration::from_secs(30));
        assert!(settings.uses_placeholder_api_key());
    }

    #[test]
    fn test_load_from_missing_path_returns_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let missing = temp_dir.path().join("nope.json");

        let settings = UserSettings::load_from_path(&missing).unwrap();

        assert_eq!(settings, UserSettings::default());
        assert!(!missing.exists());
    }

    #[test]
    fn test_load_from_path_reads_values() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{
                "upload_endpoint_url": "https://img.example.com/api/1/upload",
                "api_key": "abc123",
                "request_timeout_seconds": 5
            }"#,
        )
        .unwrap();

        let settings = UserSettings::load_from_path(&path).unwrap();

        assert_eq!(settings.upload_endpoint_url, "https://img.example.com/api/1/upload");
        assert_eq!(settings.api_key, "abc123");
        assert_eq!(settings.request_timeout_seconds, 5);
        assert!(!settings.uses_placeholder_api_key());
    }

    #[test]
    fn test_deserialization_with_missing_fields_uses_defaults() {
        let json = r#"{ "api_key": "only-key" }"#;

        let settings: UserSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.api_key, "only-key");
        assert_eq!(settings.upload_endpoint_url, global_constants::DEFAULT_UPLOAD_ENDPOINT_URL);
        assert_eq!(settings.request_timeout_seconds, 30);
    }

    #[test]
    fn test_load_from_path_rejects_malformed_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(UserSettings::load_from_path(&path).is_err());
    }
}
