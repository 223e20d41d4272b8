use std::path::PathBuf;

/// Input locations and row selection for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertInputs {
    pub profiles: PathBuf,
    pub extensions: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub profile_prefix: String,
    pub resource: String,
    pub extension_prefix: String,
}

/// Counts and output location of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertResult {
    pub resource: String,
    pub resource_rows: usize,
    pub extension_rows: usize,
    pub rows_with_values: usize,
    pub relevant_extensions: usize,
    pub template_rows: usize,
    pub output_path: PathBuf,
}
