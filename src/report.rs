use crate::activity::{analyze, Analysis, Metric};
use crate::cli::CommonArgs;
use crate::git::{GitHistory, RepositoryHandle};
use crate::model::{ActivityOutput, RankedEntry, SCHEMA_VERSION};
use crate::window::DateWindow;
use anyhow::Context;
use chrono::Utc;
use console::style;
use std::fmt::Display;

/// `commits` and `churn` subcommands: sync, analyze, then print.
pub fn exec<M>(common: CommonArgs, json: bool, directory: Option<String>) -> anyhow::Result<()>
where
    M: Metric,
    M::Value: Display,
{
    let (repo, _) = RepositoryHandle::ensure(common.descriptor())
        .context("Failed to prepare working copy")?;

    let directory = directory.unwrap_or_else(|| ".".to_string());
    let window = DateWindow::compute(common.window_offset());

    let analysis = analyze::<M>(
        &GitHistory::new(),
        repo.root(),
        repo.name(),
        &directory,
        &window,
        &common.images_dir,
    )
    .with_context(|| format!("Failed to analyze {} activity in '{}'", M::NAME, directory))?;

    if json {
        output_json::<M>(&analysis, repo.name(), &directory, &window)?;
    } else {
        output_table::<M>(&analysis, &window);
    }

    Ok(())
}

fn output_json<M: Metric>(
    analysis: &Analysis<M::Value>,
    repository: &str,
    directory: &str,
    window: &DateWindow,
) -> anyhow::Result<()> {
    let output = ActivityOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository: repository.to_string(),
        directory: directory.to_string(),
        metric: M::NAME.to_string(),
        since: window.since(),
        until: window.until(),
        chart: analysis.chart.to_string_lossy().to_string(),
        entries: analysis.ranked.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_table<M>(analysis: &Analysis<M::Value>, window: &DateWindow)
where
    M: Metric,
    M::Value: Display,
{
    println!(
        "{} {} to {}",
        style(M::Y_DESC).bold(),
        window.since(),
        window.until()
    );
    println!("{:<40} {:>24}", style("Module").bold(), style("Value").bold());
    println!("{}", "─".repeat(65));
    for RankedEntry { name, value } in &analysis.ranked {
        println!("{:<40} {:>24}", name, value.to_string());
    }
    if analysis.ranked.is_empty() {
        println!("(no subdirectories)");
    }
    println!("\nChart written to {}", style(analysis.chart.display()).cyan());
}
