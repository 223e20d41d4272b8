//! BRICS data-element output.
//!
//! Mapped rows are merged into the import template (see
//! [`merge_with_template`]) and the result is written as CSV to
//! `<output dir>/<resource>_des.csv`.

mod error;
mod merge;
mod writer;

pub use error::{OutputError, Result};
pub use merge::{mapped_columns, merge_with_template};
pub use writer::{OUTPUT_SUFFIX, output_path, write_csv};
