//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-16
// Version : 1.1.0
// License : Mulan PSL v2
//
// Export results to a file

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes `content` to `path`.
///
/// When the file already exists `confirm_overwrite` is asked first; a `false`
/// answer leaves the file untouched and returns `Ok(false)`.
pub fn export_file<F>(content: &str, path: &Path, confirm_overwrite: F) -> Result<bool>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    if path.exists() && !confirm_overwrite(path)? {
        tracing::info!(path = %path.display(), "export cancelled, file kept");
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Unable to create directory {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Unable to write the file {}", path.display()))?;
    tracing::info!(path = %path.display(), "file successfully written");
    Ok(true)
}
