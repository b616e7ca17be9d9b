pub mod aggregate;
pub mod metric;
pub mod rank;

pub use aggregate::aggregate;
pub use metric::{CommitCount, LineChurn, Metric, Series};
pub use rank::{rank, TOP_N};

use crate::chart::{render, ChartRequest};
use crate::error::Result;
use crate::git::HistoryQuery;
use crate::model::RankedEntry;
use crate::window::DateWindow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of one aggregate, rank and render pass.
#[derive(Debug, Clone)]
pub struct Analysis<V> {
    pub ranked: Vec<RankedEntry<V>>,
    pub chart: PathBuf,
}

/// Runs the whole pipeline for metric `M` over the subdirectories of
/// `directory`, writing the chart into `output_dir`.
pub fn analyze<M: Metric>(
    history: &dyn HistoryQuery,
    repo_root: &Path,
    repo_name: &str,
    directory: &str,
    window: &DateWindow,
    output_dir: &Path,
) -> Result<Analysis<M::Value>> {
    let record = aggregate::<M>(history, repo_root, directory, window)?;
    info!(
        metric = M::NAME,
        directory,
        subdirectories = record.len(),
        "aggregated activity"
    );

    let ranked = rank::<M>(record);

    let names: Vec<&str> = ranked.iter().map(|e| e.name.as_str()).collect();
    let values: Vec<M::Value> = ranked.iter().map(|e| e.value).collect();
    let request = ChartRequest {
        title: M::title(directory, window),
        x_desc: "Modules",
        y_desc: M::Y_DESC,
        names: &names,
        series: M::series(&values),
    };
    let chart = render(&request, output_dir, repo_name, M::FILE_SUFFIX)?;

    Ok(Analysis { ranked, chart })
}
