use std::path::{Path, PathBuf};
use std::time::Duration;

use paddock_api::ApiConfig;
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

const CONFIG_DIR: &str = "paddock";
const CONFIG_FILE: &str = "shell.json";
const API_URL_ENV: &str = "PADDOCK_API_URL";
const API_TOKEN_ENV: &str = "PADDOCK_API_TOKEN";

/// Errors emitted while reading the shell configuration.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk shape of `shell.json`. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api_url: Option<String>,
    api_token: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Values taken from the process environment.
#[derive(Debug, Clone, Default)]
pub(crate) struct EnvOverrides {
    pub(crate) api_url: Option<String>,
    pub(crate) api_token: Option<String>,
}

impl EnvOverrides {
    pub(crate) fn from_env() -> Self {
        Self {
            api_url: std::env::var(API_URL_ENV).ok(),
            api_token: std::env::var(API_TOKEN_ENV).ok(),
        }
    }
}

/// Resolved shell configuration.
#[derive(Debug, Clone, Default)]
pub(crate) struct ShellConfig {
    pub(crate) api: ApiConfig,
    /// Bearer credential used to start a session, if any.
    pub(crate) token: Option<SecretString>,
}

/// How the configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigStatus {
    Loaded,
    Missing,
    /// The file exists but could not be read; defaults are in effect.
    Invalid,
}

/// Result of loading the configuration, never fatal.
#[derive(Debug, Clone)]
pub(crate) struct ConfigLoad {
    pub(crate) config: ShellConfig,
    pub(crate) status: ConfigStatus,
    pub(crate) path: PathBuf,
}

/// Return the path to the shell configuration file.
pub(crate) fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join(CONFIG_DIR)
            .join(CONFIG_FILE);
    }
    std::env::temp_dir().join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Load the configuration from its default location and the environment.
pub(crate) fn load() -> ConfigLoad {
    load_from(&config_path(), EnvOverrides::from_env())
}

/// Load the configuration from `path`, falling back to defaults on error.
pub(crate) fn load_from(path: &Path, env: EnvOverrides) -> ConfigLoad {
    let (file, status) = match read_config_file(path) {
        Ok(Some(file)) => (file, ConfigStatus::Loaded),
        Ok(None) => (ConfigFile::default(), ConfigStatus::Missing),
        Err(err) => {
            log::warn!("failed to load shell config, using defaults: {err}");
            (ConfigFile::default(), ConfigStatus::Invalid)
        },
    };

    ConfigLoad {
        config: resolve(file, env),
        status,
        path: path.to_path_buf(),
    }
}

fn read_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(None);
        },
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        },
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Merge file values over defaults, then environment values over both.
fn resolve(file: ConfigFile, env: EnvOverrides) -> ShellConfig {
    let defaults = ApiConfig::default();

    let base_url = non_blank(env.api_url)
        .or(non_blank(file.api_url))
        .unwrap_or(defaults.base_url);
    let timeout = file
        .request_timeout_secs
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
        .unwrap_or(defaults.timeout);
    let token = non_blank(env.api_token)
        .or(non_blank(file.api_token))
        .map(SecretString::from);

    ShellConfig {
        api: ApiConfig { base_url, timeout },
        token,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
