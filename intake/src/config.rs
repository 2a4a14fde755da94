use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct IntakeConfig {
    pub imap: Option<ImapConfig>,
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImapConfig {
    pub host: String,
    #[serde(default = "default_imap_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    #[serde(default = "default_imap_folder")]
    pub folder: String,
}

/// Lowercase substrings required in subject / sender; empty means no constraint
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FilterConfig {
    #[serde(default)]
    pub subject_keyword: String,
    #[serde(default)]
    pub sender_keyword: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    #[serde(default = "default_attachments_dir")]
    pub attachments_dir: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            attachments_dir: default_attachments_dir(),
            output_path: default_output_path(),
        }
    }
}

fn default_imap_port() -> u16 {
    993
}

fn default_imap_folder() -> String {
    "INBOX".to_string()
}

fn default_attachments_dir() -> PathBuf {
    PathBuf::from("storage/attachments")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("storage/applicants.csv")
}

const DEFAULT_CONFIG: &str = r#"
# [imap]
# host = "imap.example.com"
# port = 993
# username = "hr@example.com"
# password = "app-password"
# folder = "INBOX"

[filter]
# Case-insensitive substrings; leave empty to accept every message
subject_keyword = ""
sender_keyword = ""

[storage]
attachments_dir = "storage/attachments"
output_path = "storage/applicants.csv"
"#;

impl IntakeConfig {
    /// Load the TOML config (writing a default one on first run), then apply
    /// `INTAKE_*` environment overrides such as `INTAKE_IMAP__PASSWORD`.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ConfigError::Message(format!("Failed to create config directory: {e}"))
                })?;
            }
        }

        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .add_source(
                Environment::with_prefix("INTAKE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: IntakeConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("applicant-intake").join("intake.toml")
    } else {
        PathBuf::from("intake.toml")
    }
}
