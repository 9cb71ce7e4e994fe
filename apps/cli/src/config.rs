use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use hours_app::HoursSettings;
use hours_notion::{DEFAULT_BASE_URL, DEFAULT_NOTION_VERSION, NotionConfig, PropertyNames};
use serde::{Deserialize, Serialize};
use tracing::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const TOKEN_VAR: &str = "NOTION_TOKEN";
const DATABASE_VAR: &str = "NOTION_DATABASE_ID";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub host: String,
    pub port: u16,
    pub hours: HoursSettings,
    pub notion: NotionSettings,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            hours: HoursSettings::default(),
            notion: NotionSettings::default(),
        }
    }
}

/// Non-secret Notion settings. The token and database id come from the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionSettings {
    pub base_url: String,
    pub version: String,
    pub page_size: u32,
    pub timeout_secs: u64,
    pub properties: PropertyNames,
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_NOTION_VERSION.to_string(),
            page_size: 100,
            timeout_secs: 30,
            properties: PropertyNames::default(),
        }
    }
}

impl NotionSettings {
    pub fn to_client_config(&self, secrets: NotionSecrets) -> NotionConfig {
        NotionConfig {
            base_url: self.base_url.clone(),
            token: secrets.token,
            database_id: secrets.database_id,
            notion_version: self.version.clone(),
            page_size: self.page_size,
            timeout: Duration::from_secs(self.timeout_secs),
            properties: self.properties.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NotionSecrets {
    pub token: String,
    pub database_id: String,
}

impl NotionSecrets {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| {
                    warn!("environment variable {key} not set");
                    format!("missing environment variable {key}")
                })
        };
        Ok(Self {
            token: required(TOKEN_VAR)?,
            database_id: required(DATABASE_VAR)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: CliConfig,
    pub file: PathBuf,
    pub created: bool,
}

pub fn load_or_create(path: &Path) -> Result<ConfigLoad, String> {
    if path.exists() {
        let contents = fs::read_to_string(path)
            .map_err(|err| format!("read config {}: {}", path.display(), err))?;
        let config: CliConfig = toml::from_str(&contents)
            .map_err(|err| format!("parse config {}: {}", path.display(), err))?;
        return Ok(ConfigLoad {
            config,
            file: path.to_path_buf(),
            created: false,
        });
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|err| format!("create config dir {}: {}", dir.display(), err))?;
    }
    let config = CliConfig::default();
    let contents =
        toml::to_string_pretty(&config).map_err(|err| format!("serialize config: {}", err))?;
    fs::write(path, contents).map_err(|err| format!("write config {}: {}", path.display(), err))?;

    Ok(ConfigLoad {
        config,
        file: path.to_path_buf(),
        created: true,
    })
}
