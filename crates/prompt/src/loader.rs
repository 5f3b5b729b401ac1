//! Reading and writing prompt record files.

use crate::types::{PromptFile, PromptRecord};
use promptops_core::{AppError, AppResult};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Load one record from a YAML record file.
///
/// # Arguments
/// * `path` - Record file (e.g., `prompts/bug_to_user_story_v2.yml`)
/// * `key` - Top-level record name inside the file
///
/// # Example
/// ```no_run
/// use promptops_prompt::load_record;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let record = load_record(Path::new("prompts/bug_to_user_story_v2.yml"), "bug_to_user_story_v2")?;
/// println!("Version: {:?}", record.version);
/// # Ok(())
/// # }
/// ```
pub fn load_record(path: &Path, key: &str) -> AppResult<PromptRecord> {
    let mut file = load_records(path)?;

    file.remove(key)
        .ok_or_else(|| AppError::FileLoad(format!("Key '{}' not found in {:?}", key, path)))
}

/// Load every record in a YAML record file.
pub fn load_records(path: &Path) -> AppResult<PromptFile> {
    tracing::debug!("Loading prompt records from: {:?}", path);

    if !path.exists() {
        return Err(AppError::FileLoad(format!("File not found: {:?}", path)));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::FileLoad(format!("Failed to read {:?}: {}", path, e)))?;

    let file: PromptFile = serde_yaml::from_str(&contents)
        .map_err(|e| AppError::FileLoad(format!("Failed to parse YAML {:?}: {}", path, e)))?;

    tracing::info!("Loaded {} record(s) from {:?}", file.len(), path);

    Ok(file)
}

/// Write records to a YAML file, replacing whatever was there.
///
/// The content lands in a temporary file in the target directory first and
/// is then persisted over the target, so readers never observe a partial
/// file. The temporary file is removed if any step fails.
pub fn save_records(path: &Path, file: &PromptFile) -> AppResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let yaml = serde_yaml::to_string(file)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(yaml.as_bytes())?;
    tmp.persist(path).map_err(|e| AppError::Io(e.error))?;

    tracing::info!("Wrote {} record(s) to {:?}", file.len(), path);

    Ok(())
}
