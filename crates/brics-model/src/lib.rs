pub mod columns;
pub mod error;
pub mod mapped;
pub mod mapping;
pub mod profile;
pub mod template;
pub mod terminology;

pub use error::{ModelError, Result};
pub use mapped::MappedRow;
pub use mapping::{DEFAULT_PREFIX, DEFAULT_SEPARATOR, FieldMapping, FieldMappings};
pub use profile::{ProfileRow, extension_variable_name, variable_name};
pub use template::Template;
pub use terminology::PermissibleValues;
