use super::run_git;
use crate::error::{AdamantError, Result};
use crate::model::RepositoryDescriptor;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    Cloned,
    Updated,
}

#[derive(Debug, Clone)]
pub struct SyncReport {
    pub action: SyncAction,
    pub head: String,
}

/// A local working copy kept in step with one remote branch.
///
/// The handle only hands out its root path; nothing here changes the process
/// working directory.
pub struct RepositoryHandle {
    descriptor: RepositoryDescriptor,
    root: PathBuf,
}

impl RepositoryHandle {
    /// Clone the remote if the working copy is absent, otherwise fetch and
    /// pull. Any git failure is returned as-is, with no retry.
    pub fn ensure(descriptor: RepositoryDescriptor) -> Result<(Self, SyncReport)> {
        let root = descriptor.working_copy();

        let action = if root.exists() {
            // Refuse to pull into something that is not a repository.
            gix::open(&root).map_err(|_| AdamantError::NotAWorkingCopy(root.clone()))?;
            update(&root, &descriptor.branch)?;
            SyncAction::Updated
        } else {
            clone(&descriptor, &root)?;
            SyncAction::Cloned
        };

        let head = head_commit(&root)?;
        info!(
            path = %root.display(),
            head = %head,
            action = ?action,
            "working copy ready"
        );

        let handle = Self { descriptor, root };
        Ok((handle, SyncReport { action, head }))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> &str {
        &self.descriptor.repo_name
    }
}

fn clone(descriptor: &RepositoryDescriptor, root: &Path) -> Result<()> {
    if let Some(parent) = root.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let url = descriptor.remote_url();
    info!(url = %url, path = %root.display(), branch = %descriptor.branch, "cloning repository");
    run_git([
        OsStr::new("clone"),
        OsStr::new("--branch"),
        OsStr::new(&descriptor.branch),
        OsStr::new(&url),
        root.as_os_str(),
    ])?;
    Ok(())
}

fn update(root: &Path, branch: &str) -> Result<()> {
    info!(path = %root.display(), branch, "updating repository");
    run_git([
        OsStr::new("-C"),
        root.as_os_str(),
        OsStr::new("fetch"),
        OsStr::new("--all"),
    ])?;
    let out = run_git([
        OsStr::new("-C"),
        root.as_os_str(),
        OsStr::new("pull"),
        OsStr::new("origin"),
        OsStr::new(branch),
    ])?;
    debug!(output = %out.trim(), "pull finished");
    Ok(())
}

/// HEAD commit id of the working copy, read with gix.
pub fn head_commit(root: &Path) -> Result<String> {
    let repo = gix::open(root)?;
    let mut head = repo.head()?;
    let commit = head.peel_to_commit_in_place()?;
    Ok(commit.id.to_string())
}
