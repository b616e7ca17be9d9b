use super::run_git;
use crate::error::{AdamantError, Result};
use crate::model::LineStats;
use crate::window::DateWindow;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;

/// Read-only history queries scoped to one path inside a working copy.
///
/// `path` is relative to `repo`. Both queries follow renames and cover the
/// whole of every day in `window`.
pub trait HistoryQuery {
    /// Number of commits touching `path` within `window`.
    fn commit_count(&self, repo: &Path, path: &Path, window: &DateWindow) -> Result<u64>;

    /// Summed inserted and deleted lines under `path` within `window`.
    fn line_stats(&self, repo: &Path, path: &Path, window: &DateWindow) -> Result<LineStats>;
}

/// [`HistoryQuery`] backed by the `git` executable.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitHistory;

impl GitHistory {
    pub fn new() -> Self {
        Self
    }

    fn log(&self, repo: &Path, path: &Path, window: &DateWindow, format: &[&str]) -> Result<String> {
        let after = window.after_arg();
        let before = window.before_arg();
        // Directory names are matched literally, never as globs or `:(magic)`.
        let mut args: Vec<&OsStr> = vec![
            OsStr::new("--literal-pathspecs"),
            OsStr::new("-C"),
            repo.as_os_str(),
            OsStr::new("log"),
        ];
        args.extend(format.iter().map(OsStr::new));
        args.extend([
            OsStr::new("--follow"),
            OsStr::new(&after),
            OsStr::new(&before),
            OsStr::new("--"),
            path.as_os_str(),
        ]);
        run_git(args)
    }
}

impl HistoryQuery for GitHistory {
    fn commit_count(&self, repo: &Path, path: &Path, window: &DateWindow) -> Result<u64> {
        let out = self.log(repo, path, window, &["--oneline"])?;
        let count = count_commits(&out);
        debug!(path = %path.display(), commits = count, "counted commits");
        Ok(count)
    }

    fn line_stats(&self, repo: &Path, path: &Path, window: &DateWindow) -> Result<LineStats> {
        let out = self.log(repo, path, window, &["--numstat", "--format="])?;
        let stats = parse_numstat(&out)?;
        debug!(
            path = %path.display(),
            insertions = stats.insertions,
            deletions = stats.deletions,
            "summed line stats"
        );
        Ok(stats)
    }
}

/// One commit per non-empty `--oneline` row.
pub fn count_commits(output: &str) -> u64 {
    output.lines().filter(|l| !l.trim().is_empty()).count() as u64
}

/// Sums `--numstat` rows (`added<TAB>deleted<TAB>path`). Empty output means no
/// commits matched and yields zero; binary rows (`-`) count as zero.
pub fn parse_numstat(output: &str) -> Result<LineStats> {
    let mut stats = LineStats::default();
    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut cols = line.split('\t');
        let (Some(added), Some(deleted)) = (cols.next(), cols.next()) else {
            return Err(AdamantError::Parse(format!("Unexpected numstat row: {line}")));
        };
        stats.insertions += parse_count(added, line)?;
        stats.deletions += parse_count(deleted, line)?;
    }
    Ok(stats)
}

fn parse_count(field: &str, line: &str) -> Result<u64> {
    if field == "-" {
        return Ok(0);
    }
    field
        .parse::<u64>()
        .map_err(|e| AdamantError::Parse(format!("Invalid line count '{field}' in '{line}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_log_counts_zero() {
        assert_eq!(count_commits(""), 0);
        assert_eq!(count_commits("\n"), 0);
    }

    #[test]
    fn counts_oneline_rows() {
        let out = "a1b2c3d fix scheduler\n9f8e7d6 add api\nffffff0 initial\n";
        assert_eq!(count_commits(out), 3);
    }

    #[test]
    fn empty_numstat_is_zero() {
        assert_eq!(parse_numstat("").unwrap(), LineStats::default());
        assert_eq!(parse_numstat("\n\n").unwrap(), LineStats::default());
    }

    #[test]
    fn sums_numstat_rows_across_commits() {
        let out = "\n10\t2\tnova/api/a.py\n3\t0\tnova/api/b.py\n\n\n1\t7\tnova/api/a.py\n";
        assert_eq!(
            parse_numstat(out).unwrap(),
            LineStats {
                insertions: 14,
                deletions: 9
            }
        );
    }

    #[test]
    fn binary_rows_count_as_zero() {
        let out = "-\t-\tlogo.png\n4\t1\treadme.txt\n";
        assert_eq!(
            parse_numstat(out).unwrap(),
            LineStats {
                insertions: 4,
                deletions: 1
            }
        );
    }

    #[test]
    fn malformed_numstat_is_an_error() {
        assert!(matches!(parse_numstat("garbage"), Err(AdamantError::Parse(_))));
        assert!(matches!(parse_numstat("x\t1\tfile"), Err(AdamantError::Parse(_))));
    }
}
