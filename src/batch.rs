//  _____ _  ______
// |_   _| |/ /  _ \ __ _ ___ ___
//   | | | ' /| |_) / _` / __/ __|
//   | | | . \|  __/ (_| \__ \__ \
//   |_| |_|\_\_|   \__,_|___/___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 1.1.0
// License : Mulan PSL v2
//
// Batch driver

use crate::error::GenerationError;

/// Runs `unit` `count` times, in order, and joins the outputs with `"\n"`.
///
/// There is no trailing line break. The first failing unit aborts the batch.
pub fn repeat<F>(count: usize, mut unit: F) -> Result<String, GenerationError>
where
    F: FnMut() -> Result<String, GenerationError>,
{
    if count == 0 {
        return Err(GenerationError::InvalidCount { count });
    }
    let mut outputs = Vec::with_capacity(count);
    for _ in 0..count {
        outputs.push(unit()?);
    }
    tracing::debug!(count, "batch generated");
    Ok(outputs.join("\n"))
}
