use crate::language::Language;
use crate::tab::Tab;
use common::logging;
use directories::ProjectDirs;
use log::LevelFilter;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs, io};
use thiserror::Error;

const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub language: Language,
    pub log_format: String,
    pub log_level: LevelFilter,
    pub default_tab: Tab,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            log_format: logging::DEFAULT_FORMAT.to_string(),
            log_level: LevelFilter::Info,
            default_tab: Tab::default(),
        }
    }
}

impl Serialize for Config {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Config", 4)?;
        state.serialize_field("language", self.language.locale())?;
        state.serialize_field("log_format", &self.log_format)?;
        state.serialize_field("log_level", &self.log_level.to_string())?;
        // Stored by raw key, which stays stable across releases
        state.serialize_field("default_tab", self.default_tab.localization_key())?;
        state.end()
    }
}

impl Config {
    pub fn from_file() -> Result<Self, ConfigError> {
        match Self::get_config_path() {
            Ok(path) => Self::load_or_create(&path),
            Err(_) => Ok(Config::default()),
        }
    }

    /// Reads the config at `path`, writing defaults only if the file does not exist.
    /// Any other read failure is returned and the file is left untouched.
    fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(data) => Self::from_toml(&data),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("Config not found at {}, creating default.", path.display());
                let config = Config::default();
                config.save_to_path(path)?;
                Ok(config)
            },
            Err(err) => Err(ConfigError::IOError(err)),
        }
    }

    pub fn from_toml(data: &str) -> Result<Self, ConfigError> {
        let dto: ConfigDto =
            toml::from_str(data).map_err(ConfigError::TomlDeserializationError)?;
        dto.into_config()
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string(&self).map_err(ConfigError::TomlSerializationError)
    }

    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let path = Self::get_config_path()?;
        self.save_to_path(&path)
    }

    fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let data = self.to_toml()?;

        if let Some(parent_path) = path.parent() {
            fs::create_dir_all(parent_path).map_err(ConfigError::IOError)?;
        }
        fs::write(path, data).map_err(ConfigError::IOError)?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf, ConfigError> {
        let dirs = ProjectDirs::from("dev", "xairaven", "tabbar");
        match dirs {
            None => Ok(Self::get_current_directory()?),
            Some(value) => Ok(value.config_dir().join(CONFIG_FILENAME)),
        }
    }

    fn get_current_directory() -> Result<PathBuf, ConfigError> {
        let mut current_dir = env::current_dir().map_err(ConfigError::IOError)?;
        current_dir.push(CONFIG_FILENAME);
        Ok(current_dir)
    }
}

#[derive(Deserialize)]
struct ConfigDto {
    language: String,
    log_format: String,
    log_level: String,
    default_tab: String,
}

impl ConfigDto {
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let config = Config {
            language: Language::from_str(self.language.trim())
                .map_err(|_| ConfigError::UnknownLanguage(self.language.clone()))?,
            log_format: self.log_format,
            log_level: LevelFilter::from_str(self.log_level.trim())
                .map_err(|_| ConfigError::UnknownLogLevel)?,
            default_tab: Tab::from_str(self.default_tab.trim())
                .map_err(|_| ConfigError::UnknownTab(self.default_tab.clone()))?,
        };

        Ok(config)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error.")]
    IOError(#[from] std::io::Error),

    #[error("TOML Serialization Error.")]
    TomlSerializationError(#[from] toml::ser::Error),

    #[error("TOML Deserialization Error.")]
    TomlDeserializationError(#[from] toml::de::Error),

    #[error("Unknown language.")]
    UnknownLanguage(String),

    #[error("Unknown log level.")]
    UnknownLogLevel,

    #[error("Unknown tab.")]
    UnknownTab(String),
}

impl ConfigError {
    pub fn additional_info(&self) -> Option<String> {
        match self {
            ConfigError::IOError(err) => Some(err.to_string()),
            ConfigError::TomlSerializationError(err) => Some(err.to_string()),
            ConfigError::TomlDeserializationError(err) => Some(err.to_string()),
            ConfigError::UnknownLanguage(value) | ConfigError::UnknownTab(value) => {
                Some(format!("Got \"{value}\""))
            },
            ConfigError::UnknownLogLevel => None,
        }
    }
}
