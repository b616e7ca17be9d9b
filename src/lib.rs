//! Keep a local working copy of a remote git repository and chart which of a
//! directory's subdirectories saw the most commits or line churn over a
//! trailing calendar window.

pub mod activity;
pub mod chart;
pub mod cli;
pub mod error;
pub mod git;
pub mod listing;
pub mod model;
pub mod report;
pub mod window;

pub use error::{AdamantError, Result};
