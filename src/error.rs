use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdamantError>;

#[derive(Error, Debug)]
pub enum AdamantError {
    #[error("git executable not found in PATH")]
    GitNotInstalled,
    #[error("git {} failed: {stderr}", args.join(" "))]
    CommandFailed { args: Vec<String>, stderr: String },
    #[error("{0} exists but is not a git working copy")]
    NotAWorkingCopy(PathBuf),
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Chart error: {0}")]
    Chart(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

// gix errors are large; they are boxed on the way in.
impl From<gix::open::Error> for AdamantError {
    fn from(err: gix::open::Error) -> Self {
        AdamantError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for AdamantError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        AdamantError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for AdamantError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        AdamantError::HeadPeel(Box::new(err))
    }
}
