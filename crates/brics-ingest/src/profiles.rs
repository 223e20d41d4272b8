//! Profile and extension row loading.
//!
//! A profile export contains every element of every profile in an
//! implementation guide. Resource rows are selected by the `Profile` column
//! (prefix for the guide, suffix for the resource) and extension rows by the
//! `Id` column prefix.

use std::path::{Path, PathBuf};

use brics_model::{ProfileRow, columns};
use tracing::info;

use crate::error::Result;
use crate::table::{CsvTable, read_csv_table};

/// All element rows of a profile export.
#[derive(Debug, Clone)]
pub struct ProfileTable {
    path: PathBuf,
    rows: Vec<ProfileRow>,
}

impl ProfileTable {
    /// Read a profile export. The `Profile` and `Path` columns are required.
    pub fn read(path: &Path) -> Result<Self> {
        let table = read_csv_table(path)?;
        table.require_column(columns::PROFILE, path)?;
        table.require_column(columns::PATH, path)?;
        Ok(Self::from_csv(path, &table))
    }

    fn from_csv(path: &Path, table: &CsvTable) -> Self {
        let rows = table.records().map(ProfileRow::from_pairs).collect();
        Self {
            path: path.to_path_buf(),
            rows,
        }
    }

    /// Build a table from rows already in memory.
    pub fn from_rows(path: impl Into<PathBuf>, rows: Vec<ProfileRow>) -> Self {
        Self {
            path: path.into(),
            rows,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn rows(&self) -> &[ProfileRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose `Profile` starts with `prefix` (e.g. `us-core`).
    pub fn with_profile_prefix(&self, prefix: &str) -> Vec<ProfileRow> {
        info!(
            path = %self.path.display(),
            prefix,
            "selecting profile rows"
        );
        self.rows
            .iter()
            .filter(|row| row.get(columns::PROFILE).is_some_and(|p| p.starts_with(prefix)))
            .cloned()
            .collect()
    }

    /// Rows whose `Id` starts with `prefix` (e.g. `Extension`).
    pub fn extensions(&self, prefix: &str) -> Vec<ProfileRow> {
        info!(
            path = %self.path.display(),
            prefix,
            "selecting extension rows"
        );
        self.rows
            .iter()
            .filter(|row| row.get(columns::ID).is_some_and(|id| id.starts_with(prefix)))
            .cloned()
            .collect()
    }
}

/// Load profile rows whose `Profile` starts with `prefix`.
pub fn load_profiles(path: &Path, prefix: &str) -> Result<Vec<ProfileRow>> {
    Ok(ProfileTable::read(path)?.with_profile_prefix(prefix))
}

/// Load extension rows whose `Id` starts with `prefix`.
pub fn load_extensions(path: &Path, prefix: &str) -> Result<Vec<ProfileRow>> {
    let table = read_csv_table(path)?;
    table.require_column(columns::ID, path)?;
    table.require_column(columns::PROFILE, path)?;
    Ok(ProfileTable::from_csv(path, &table).extensions(prefix))
}

/// Rows of a single resource: `Profile` ends with `resource` (e.g. `patient`).
pub fn filter_resource(rows: &[ProfileRow], resource: &str) -> Vec<ProfileRow> {
    info!(resource, "filtering rows by resource");
    rows.iter()
        .filter(|row| row.get(columns::PROFILE).is_some_and(|p| p.ends_with(resource)))
        .cloned()
        .collect()
}
