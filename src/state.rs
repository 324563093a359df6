use std::fs;
use std::path::Path;

use crate::error::{BotError, Result};

/// Reads the permalink of the last announced post. A missing or unreadable
/// file means nothing has been announced yet.
pub fn load(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn store(path: &Path, permalink: &str) -> Result<()> {
    fs::write(path, permalink)
        .map_err(|err| BotError::State(format!("couldn't write {}: {}", path.display(), err)))
}
