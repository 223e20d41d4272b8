//! CSV output of the merged template.

use std::fs;
use std::path::{Path, PathBuf};

use brics_model::Template;
use tracing::info;

use crate::error::{OutputError, Result};

/// Suffix appended to the resource name to form the output file name.
pub const OUTPUT_SUFFIX: &str = "_des.csv";

/// `<dir>/<resource>_des.csv`
pub fn output_path(dir: &Path, resource: &str) -> PathBuf {
    dir.join(format!("{resource}{OUTPUT_SUFFIX}"))
}

/// Write `template` as CSV to `path`, creating parent directories as needed.
///
/// The header row is always written, followed by one record per row.
pub fn write_csv(template: &Template, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let csv_error = |source| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(template.columns()).map_err(csv_error)?;
    for row in template.rows() {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = template.len(), "wrote data element file");
    Ok(())
}
