use crate::activity::{CommitCount, LineChurn};
use crate::git::{RepositoryHandle, SyncAction};
use crate::model::RepositoryDescriptor;
use crate::window::WindowOffset;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adamant")]
#[command(about = "Track a remote git repository and chart per-directory commit and churn activity")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, global = true, default_value = "https://github.com", help = "Remote host prefix or local directory")]
    pub base_url: String,

    #[arg(long, global = true, default_value = "openstack", help = "Repository owner")]
    pub owner: String,

    #[arg(long, global = true, default_value = "nova", help = "Repository name")]
    pub repo: String,

    #[arg(long, global = true, default_value = "master", help = "Branch to clone and pull")]
    pub branch: String,

    #[arg(long, global = true, default_value = ".repos", help = "Directory holding working copies")]
    pub repos_dir: PathBuf,

    #[arg(long, global = true, default_value = ".images", help = "Directory charts are written to")]
    pub images_dir: PathBuf,

    #[arg(long, global = true, default_value_t = 0, help = "Trailing window, years")]
    pub years: u32,

    #[arg(long, global = true, default_value_t = 6, help = "Trailing window, months")]
    pub months: u32,

    #[arg(long, global = true, default_value_t = 0, help = "Trailing window, days")]
    pub days: u32,
}

impl CommonArgs {
    pub fn descriptor(&self) -> RepositoryDescriptor {
        RepositoryDescriptor {
            base_url: self.base_url.clone(),
            owner: self.owner.clone(),
            repo_name: self.repo.clone(),
            branch: self.branch.clone(),
            local_path: self.repos_dir.clone(),
        }
    }

    pub fn window_offset(&self) -> WindowOffset {
        WindowOffset::new(self.years, self.months, self.days)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clone or update the working copy
    Sync,
    /// Chart commit counts per subdirectory
    Commits {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "Directory whose subdirectories are ranked, relative to the repository root")]
        directory: Option<String>,
    },
    /// Chart inserted and deleted lines per subdirectory
    Churn {
        #[arg(long, help = "Output as JSON")]
        json: bool,

        #[arg(help = "Directory whose subdirectories are ranked, relative to the repository root")]
        directory: Option<String>,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Sync => sync(&self.common),
            Commands::Commits { json, directory } => {
                crate::report::exec::<CommitCount>(self.common, json, directory)
            }
            Commands::Churn { json, directory } => {
                crate::report::exec::<LineChurn>(self.common, json, directory)
            }
        }
    }
}

fn sync(common: &CommonArgs) -> Result<()> {
    let (repo, report) =
        RepositoryHandle::ensure(common.descriptor()).context("Failed to prepare working copy")?;
    let verb = match report.action {
        SyncAction::Cloned => "Cloned",
        SyncAction::Updated => "Updated",
    };
    println!(
        "{} {} at {}",
        style(verb).green().bold(),
        repo.root().display(),
        style(&report.head).dim()
    );
    Ok(())
}
