//! Input table loading for the FHIR to BRICS converter.
//!
//! # Features
//!
//! - **CSV Loading**: Read UTF-8 CSV files into header-aligned string rows
//! - **Profile Selection**: Filter profile exports by profile prefix and resource suffix
//! - **Extension Selection**: Filter extension definitions by `Id` prefix
//! - **Template Loading**: Read the BRICS data-element import template
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use brics_ingest::{filter_resource, load_extensions, load_profiles, read_template};
//!
//! let profiles_path = Path::new("fhir_to_brics/templates/all-profiles.csv");
//!
//! let profiles = load_profiles(profiles_path, "us-core")?;
//! let patient = filter_resource(&profiles, "patient");
//! let extensions = load_extensions(profiles_path, "Extension")?;
//! let template = read_template(Path::new("fhir_to_brics/templates/ImportUDETemplate.csv"))?;
//! ```

mod error;
mod profiles;
mod table;
mod template;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use table::{CsvTable, read_csv_table, validate_encoding};

// === Profile Rows ===
pub use profiles::{ProfileTable, filter_resource, load_extensions, load_profiles};

// === Template ===
pub use template::read_template;
