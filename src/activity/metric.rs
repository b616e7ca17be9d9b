use crate::error::Result;
use crate::git::HistoryQuery;
use crate::model::LineStats;
use crate::window::DateWindow;
use plotters::style::RGBColor;
use serde::Serialize;
use std::path::Path;

/// One bar series; series are stacked in order, first at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: &'static str,
    pub color: RGBColor,
    pub values: Vec<u64>,
}

/// What a pipeline measures per subdirectory and how it is charted.
pub trait Metric {
    type Value: Copy + Default + Serialize;

    /// Short name used in output documents.
    const NAME: &'static str;
    /// Artifact file stem, prefixed with the repository name.
    const FILE_SUFFIX: &'static str;
    const Y_DESC: &'static str;

    fn measure(
        history: &dyn HistoryQuery,
        repo: &Path,
        path: &Path,
        window: &DateWindow,
    ) -> Result<Self::Value>;

    /// Scalar the ranking sorts on.
    fn key(value: &Self::Value) -> u64;

    fn series(values: &[Self::Value]) -> Vec<Series>;

    fn title(directory: &str, window: &DateWindow) -> String;
}

pub struct CommitCount;

impl Metric for CommitCount {
    type Value = u64;

    const NAME: &'static str = "commits";
    const FILE_SUFFIX: &'static str = "num_commits";
    const Y_DESC: &'static str = "Number of Commits";

    fn measure(
        history: &dyn HistoryQuery,
        repo: &Path,
        path: &Path,
        window: &DateWindow,
    ) -> Result<u64> {
        history.commit_count(repo, path, window)
    }

    fn key(value: &u64) -> u64 {
        *value
    }

    fn series(values: &[u64]) -> Vec<Series> {
        vec![Series {
            label: "Commits",
            color: RGBColor(31, 119, 180),
            values: values.to_vec(),
        }]
    }

    fn title(directory: &str, window: &DateWindow) -> String {
        format!(
            "Number of Commits for each {}/ subdirectory ({} to {})",
            directory,
            window.since(),
            window.until()
        )
    }
}

pub struct LineChurn;

impl Metric for LineChurn {
    type Value = LineStats;

    const NAME: &'static str = "churn";
    const FILE_SUFFIX: &'static str = "churn_num";
    const Y_DESC: &'static str = "Lines Changed";

    fn measure(
        history: &dyn HistoryQuery,
        repo: &Path,
        path: &Path,
        window: &DateWindow,
    ) -> Result<LineStats> {
        history.line_stats(repo, path, window)
    }

    fn key(value: &LineStats) -> u64 {
        value.total()
    }

    fn series(values: &[LineStats]) -> Vec<Series> {
        vec![
            Series {
                label: "Deletions",
                color: RGBColor(214, 39, 40),
                values: values.iter().map(|v| v.deletions).collect(),
            },
            Series {
                label: "Insertions",
                color: RGBColor(44, 160, 44),
                values: values.iter().map(|v| v.insertions).collect(),
            },
        ]
    }

    fn title(directory: &str, window: &DateWindow) -> String {
        format!(
            "Code Churn for each {}/ subdirectory ({} to {})",
            directory,
            window.since(),
            window.until()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn churn_key_sums_both_sides() {
        let v = LineStats {
            insertions: 7,
            deletions: 5,
        };
        assert_eq!(LineChurn::key(&v), 12);
    }

    #[test]
    fn churn_stacks_insertions_on_deletions() {
        let values = [
            LineStats {
                insertions: 10,
                deletions: 4,
            },
            LineStats::default(),
        ];
        let series = LineChurn::series(&values);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "Deletions");
        assert_eq!(series[0].values, vec![4, 0]);
        assert_eq!(series[1].label, "Insertions");
        assert_eq!(series[1].values, vec![10, 0]);
    }

    #[test]
    fn commit_count_is_a_single_series() {
        let series = CommitCount::series(&[20, 5]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].values, vec![20, 5]);
    }
}
