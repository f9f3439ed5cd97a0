//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-31
// Version : 1.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use anyhow::{Context, Result};
use arboard::Clipboard;

/// 复制到剪贴板
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut ctx = Clipboard::new()
        .context("The clipboard does not exist or cannot be reached")?;
    ctx.set_text(text)
        .context("Failed to write to the clipboard")?;
    tracing::debug!(chars = text.chars().count(), "copied to clipboard");
    Ok(())
}

/// 读取剪贴板
pub fn read_clipboard() -> Result<String> {
    let mut ctx = Clipboard::new()
        .context("The clipboard does not exist or cannot be reached")?;
    ctx.get_text()
        .context("Failed to read text from the clipboard")
}
