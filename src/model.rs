use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

pub const SCHEMA_VERSION: u32 = 1;

/// Identifies one remote repository and where its working copy lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    pub base_url: String,
    pub owner: String,
    pub repo_name: String,
    pub branch: String,
    /// Directory holding working copies; the copy itself is `local_path/repo_name`.
    pub local_path: PathBuf,
}

impl RepositoryDescriptor {
    pub fn remote_url(&self) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.owner,
            self.repo_name
        )
    }

    pub fn working_copy(&self) -> PathBuf {
        self.local_path.join(&self.repo_name)
    }
}

/// Summed `--numstat` totals for one path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    pub insertions: u64,
    pub deletions: u64,
}

impl LineStats {
    pub fn total(&self) -> u64 {
        self.insertions + self.deletions
    }
}

impl fmt::Display for LineStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} / -{}", self.insertions, self.deletions)
    }
}

/// Metric value per subdirectory name, built fresh on every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord<V> {
    pub entries: HashMap<String, V>,
}

impl<V> ActivityRecord<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: String, value: V) {
        self.entries.insert(name, value);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for ActivityRecord<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(String, V)> for ActivityRecord<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry<V> {
    pub name: String,
    pub value: V,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityOutput<V> {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository: String,
    pub directory: String,
    pub metric: String,
    pub since: String,
    pub until: String,
    pub chart: String,
    pub entries: Vec<RankedEntry<V>>,
}
