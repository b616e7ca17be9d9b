use crate::error::{AdamantError, Result};
use std::fs;
use std::path::Path;

const GIT_DIR: &str = ".git";

/// Immediate subdirectories of `dir`, in whatever order the OS yields them.
///
/// Symlinks to directories count as directories. The `.git` metadata
/// directory is never listed. A name that is not valid UTF-8 is an error,
/// since it could not be reported or queried faithfully.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().into_string().map_err(|raw| {
            AdamantError::Parse(format!(
                "Directory name is not valid UTF-8: {}",
                raw.to_string_lossy()
            ))
        })?;
        if name == GIT_DIR {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}
