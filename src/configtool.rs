//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-30
// Version : 1.1.0
// License : Mulan PSL v2
//
// Config Tools

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use dirs::config_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::passgen::{ClassRequirement, GenerationSpec};

pub const APP_DIR: &str = "tkpass";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error on {path}: {source}")]
    IoError { path: PathBuf, source: io::Error },

    #[error("JSON error in {path}: {source}")]
    JsonError { path: PathBuf, source: serde_json::Error },

    #[error("Could not determine configuration directory")]
    ConfigDirError,

    #[error("Word list {path} contains no words")]
    EmptyWordList { path: PathBuf },
}

/// Defaults for random password generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordSettings {
    pub length: usize,
    pub lowercase: ClassRequirement,
    pub uppercase: ClassRequirement,
    pub digits: ClassRequirement,
    pub special: ClassRequirement,
    /// These characters never appear in a generated password.
    pub banned_characters: Vec<char>,
    /// Word list used by `password --passphrase`; the built-in list when unset.
    pub sentence_wordlist: Option<PathBuf>,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            length: 16,
            lowercase: ClassRequirement::Fill,
            uppercase: ClassRequirement::Fill,
            digits: ClassRequirement::Fill,
            special: ClassRequirement::Fill,
            banned_characters: Vec::new(),
            sentence_wordlist: None,
        }
    }
}

impl PasswordSettings {
    pub fn to_spec(&self) -> GenerationSpec {
        GenerationSpec {
            lowercase: self.lowercase,
            uppercase: self.uppercase,
            digits: self.digits,
            special: self.special,
            total_length: Some(self.length),
            banned: self.banned_characters.iter().copied().collect::<HashSet<char>>(),
        }
    }
}

/// Defaults for passphrase generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassphraseSettings {
    pub wordlist: Option<PathBuf>,
    pub separator: String,
    pub word_count: usize,
}

impl Default for PassphraseSettings {
    fn default() -> Self {
        Self {
            wordlist: None,
            separator: "-".to_string(),
            word_count: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Copy every generated result to the clipboard.
    pub auto_copy_generated: bool,
    /// Every file in this directory is loaded as a dictionary by `check`.
    pub dictionary_directory: Option<PathBuf>,
    /// Destination of `-o` when no file is given.
    pub default_outfile: PathBuf,
    pub default_generation_count: usize,
    pub password: PasswordSettings,
    pub passphrase: PassphraseSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_copy_generated: false,
            dictionary_directory: None,
            default_outfile: PathBuf::from("outfile_tkp.txt"),
            default_generation_count: 1,
            password: PasswordSettings::default(),
            passphrase: PassphraseSettings::default(),
        }
    }
}

impl Settings {
    /// Reads settings from a JSON file. Fields missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::JsonError {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let data = serde_json::to_string_pretty(self).map_err(|source| ConfigError::JsonError {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, data).map_err(|source| ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The configured dictionary directory, or `{config dir}/tkpass/dictionaries`.
    pub fn dictionary_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.dictionary_directory {
            Some(dir) => Ok(dir.clone()),
            None => Ok(get_config_dir()?.join("dictionaries")),
        }
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join(APP_DIR)),
        None => Err(ConfigError::ConfigDirError),
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// 加载配置文件
///
/// An explicit path must exist. Without one, the default location is tried
/// and a missing file just means defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading settings");
            Settings::from_file(path)
        }
        None => {
            let path = default_config_path()?;
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading settings");
                Settings::from_file(&path)
            } else {
                tracing::debug!("no configuration file, using defaults");
                Ok(Settings::default())
            }
        }
    }
}
