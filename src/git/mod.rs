pub mod history;
pub mod repo;

pub use history::{GitHistory, HistoryQuery};
pub use repo::{RepositoryHandle, SyncAction, SyncReport};

use crate::error::{AdamantError, Result};
use std::ffi::OsStr;
use std::process::Command;
use tracing::{trace, warn};

/// Runs `git` with `args` and returns its stdout. A non-zero exit is an error
/// carrying git's stderr.
pub(crate) fn run_git<I, S>(args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|a| a.as_ref().to_string_lossy().into_owned())
        .collect();

    trace!(cmd = %format!("git {}", args.join(" ")), "running git command");

    let output = Command::new("git").args(&args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            warn!("git not found in PATH");
            AdamantError::GitNotInstalled
        } else {
            AdamantError::Io(e)
        }
    })?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(AdamantError::CommandFailed { args, stderr })
    }
}
