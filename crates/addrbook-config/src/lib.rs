use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use addrbook_core::DEFAULT_PAGE_SIZE;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "addrbook";
const CONFIG_FILENAME: &str = "config.toml";

pub const MAX_PAGE_SIZE: usize = 100;
pub const DEFAULT_SUGGESTION_CUTOFF: f64 = 0.6;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub page_size: usize,
    pub suggestion_cutoff: f64,
    pub book_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            suggestion_cutoff: DEFAULT_SUGGESTION_CUTOFF,
            book_path: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid page_size value: {0}")]
    InvalidPageSize(i64),
    #[error("invalid suggestion_cutoff value: {0}")]
    InvalidSuggestionCutoff(f64),
    #[error("invalid book_path value: {0}")]
    InvalidBookPath(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    page_size: Option<i64>,
    suggestion_cutoff: Option<f64>,
    book_path: Option<PathBuf>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(page_size) = parsed.page_size {
        if !(1..=MAX_PAGE_SIZE as i64).contains(&page_size) {
            return Err(ConfigError::InvalidPageSize(page_size));
        }
        config.page_size = page_size as usize;
    }

    if let Some(cutoff) = parsed.suggestion_cutoff {
        if !(cutoff > 0.0 && cutoff <= 1.0) {
            return Err(ConfigError::InvalidSuggestionCutoff(cutoff));
        }
        config.suggestion_cutoff = cutoff;
    }

    if let Some(path) = parsed.book_path {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidBookPath(path));
        }
        config.book_path = Some(path);
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
