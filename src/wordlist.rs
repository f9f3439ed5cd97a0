//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-13
// Version : 1.1.0
// License : Mulan PSL v2
//
// Word lists

use std::fs;
use std::path::{Path, PathBuf};

use crate::configtool::ConfigError;

// 引入编译生成的单词列表
include!(concat!(env!("OUT_DIR"), "/word_data.rs"));

/// A word list together with the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedWordList {
    pub name: String,
    pub words: Vec<String>,
}

pub fn default_wordlist() -> Vec<String> {
    WORDS.iter().map(|w| w.to_string()).collect()
}

/// One word per line; blank lines and surrounding whitespace are dropped.
pub fn parse_wordlist(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

pub fn load_wordlist(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_wordlist(&content);
    if words.is_empty() {
        return Err(ConfigError::EmptyWordList { path: path.to_path_buf() });
    }
    tracing::debug!(path = %path.display(), words = words.len(), "word list loaded");
    Ok(words)
}

/// The file at `path`, or the built-in list.
pub fn wordlist_or_default(path: Option<&Path>) -> Result<Vec<String>, ConfigError> {
    match path {
        Some(path) => load_wordlist(path),
        None => Ok(default_wordlist()),
    }
}

/// Loads a file as a dictionary named after its file stem.
pub fn load_named(path: &Path) -> Result<NamedWordList, ConfigError> {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(NamedWordList {
        name,
        words: load_wordlist(path)?,
    })
}

/// Every regular file in `dir`, sorted by name. A missing directory yields nothing.
pub fn load_dictionaries(dir: &Path) -> Result<Vec<NamedWordList>, ConfigError> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "dictionary directory not found");
        return Ok(Vec::new());
    }
    let entries = fs::read_dir(dir).map_err(|source| ConfigError::IoError {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    let mut dictionaries = Vec::with_capacity(files.len());
    for file in files {
        match load_named(&file) {
            Ok(dictionary) => dictionaries.push(dictionary),
            Err(ConfigError::EmptyWordList { path }) => {
                tracing::warn!(path = %path.display(), "skipping empty dictionary");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(dictionaries)
}
