//! Mapping of FHIR profile rows onto BRICS data-element rows.
//!
//! Text fields are composed from profile columns according to a
//! [`FieldMappings`](brics_model::FieldMappings); permissible values come from
//! the row's value-set binding via a
//! [`ValueSetResolver`](brics_terminology::ValueSetResolver). Sliced rows are
//! expanded with their matching extension elements.

mod combine;
mod extensions;
mod mapper;

pub use combine::{combine_columns, text_fields};
pub use extensions::{matching_extensions, relevant_extensions};
pub use mapper::{MappingResult, RowMapper};
