use super::metric::Metric;
use crate::error::Result;
use crate::git::HistoryQuery;
use crate::listing::list_subdirectories;
use crate::model::ActivityRecord;
use crate::window::DateWindow;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

/// Measures every immediate subdirectory of `directory` (relative to `repo`).
/// Queries run one after another; the first failure aborts the run.
pub fn aggregate<M: Metric>(
    history: &dyn HistoryQuery,
    repo: &Path,
    directory: &str,
    window: &DateWindow,
) -> Result<ActivityRecord<M::Value>> {
    let names = list_subdirectories(&repo.join(directory))?;

    let pb = ProgressBar::new(names.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut record = ActivityRecord::new();
    for name in names {
        pb.set_message(name.clone());
        let value = M::measure(history, repo, &pathspec(directory, &name), window)?;
        record.insert(name, value);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(record)
}

/// Path of `name` under `directory`, as git expects it relative to the root.
pub fn pathspec(directory: &str, name: &str) -> PathBuf {
    let dir = directory.trim_end_matches('/');
    if dir.is_empty() || dir == "." {
        PathBuf::from(name)
    } else {
        Path::new(dir).join(name)
    }
}
