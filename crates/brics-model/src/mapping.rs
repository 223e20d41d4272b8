//! Field mappings from profile export columns to BRICS template columns.
//!
//! Each BRICS text field is assembled from one or more profile columns. The
//! default mapping mirrors the layout of the US Core profile export; a
//! replacement can be loaded from TOML:
//!
//! ```toml
//! prefix = "FHIR"
//! separator = " | "
//!
//! [[field]]
//! target = "short description"
//! columns = ["Path", "Slice Name", "Must Support?", "Short"]
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::error::{ModelError, Result};

/// Label placed before every rendered source column.
pub const DEFAULT_PREFIX: &str = "FHIR";

/// Separator between rendered source columns.
pub const DEFAULT_SEPARATOR: &str = " | ";

/// One BRICS template column and the profile columns that feed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    pub target: String,
    pub columns: Vec<String>,
}

impl FieldMapping {
    pub fn new(target: &str, columns: &[&str]) -> Self {
        Self {
            target: target.to_string(),
            columns: columns.iter().map(|column| (*column).to_string()).collect(),
        }
    }
}

/// Ordered set of field mappings plus rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMappings {
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(rename = "field", default)]
    pub fields: Vec<FieldMapping>,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for FieldMappings {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            separator: default_separator(),
            fields: vec![
                FieldMapping::new(
                    columns::SHORT_DESCRIPTION,
                    &[
                        columns::PATH,
                        columns::SLICE_NAME,
                        columns::MUST_SUPPORT,
                        columns::SHORT,
                    ],
                ),
                FieldMapping::new(
                    columns::DEFINITION_FIELD,
                    &[
                        columns::DEFINITION,
                        columns::COMMENTS,
                        columns::REQUIREMENTS,
                        columns::MEANING_WHEN_MISSING,
                    ],
                ),
                FieldMapping::new(
                    columns::GUIDELINES,
                    &[columns::BINDING_STRENGTH, columns::BINDING_DESCRIPTION],
                ),
                FieldMapping::new(columns::NOTES, &[columns::IS_MODIFIER, columns::IS_SUMMARY]),
                FieldMapping::new(columns::REFERENCES, &[columns::BINDING_VALUE_SET]),
            ],
        }
    }
}

impl FieldMappings {
    /// Parse and validate mappings from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mappings: Self = toml::from_str(source)?;
        mappings.validate()?;
        Ok(mappings)
    }

    /// Load mappings from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Target column names in mapping order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.target.as_str())
    }

    /// Reject empty, duplicated, or reserved targets.
    pub fn validate(&self) -> Result<()> {
        if self.fields.is_empty() {
            return Err(ModelError::InvalidMapping(
                "at least one [[field]] is required".to_string(),
            ));
        }
        let mut seen = BTreeSet::new();
        for field in &self.fields {
            let target = field.target.trim();
            if target.is_empty() {
                return Err(ModelError::InvalidMapping("empty target column".to_string()));
            }
            if columns::RESERVED_TARGETS.contains(&target) {
                return Err(ModelError::InvalidMapping(format!(
                    "'{target}' is filled automatically and cannot be mapped"
                )));
            }
            if !seen.insert(target) {
                return Err(ModelError::InvalidMapping(format!(
                    "duplicate target column '{target}'"
                )));
            }
            if field.columns.is_empty() {
                return Err(ModelError::InvalidMapping(format!(
                    "target '{target}' has no source columns"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mapping_is_valid() {
        let mappings = FieldMappings::default();
        mappings.validate().expect("default mapping");
        assert_eq!(
            mappings.targets().collect::<Vec<_>>(),
            vec![
                "short description",
                "definition",
                "guidelines/instructions",
                "notes",
                "references"
            ]
        );
    }

    #[test]
    fn toml_defaults_prefix_and_separator() {
        let mappings = FieldMappings::from_toml_str(
            r#"
            [[field]]
            target = "notes"
            columns = ["Short"]
            "#,
        )
        .expect("parse mappings");
        assert_eq!(mappings.prefix, "FHIR");
        assert_eq!(mappings.separator, " | ");
        assert_eq!(mappings.fields, vec![FieldMapping::new("notes", &["Short"])]);
    }

    #[test]
    fn reserved_target_is_rejected() {
        let result = FieldMappings::from_toml_str(
            r#"
            [[field]]
            target = "variable name"
            columns = ["Path"]
            "#,
        );
        assert!(matches!(result, Err(ModelError::InvalidMapping(_))));
    }

    #[test]
    fn duplicate_target_is_rejected() {
        let result = FieldMappings::from_toml_str(
            r#"
            [[field]]
            target = "notes"
            columns = ["Short"]

            [[field]]
            target = "notes"
            columns = ["Path"]
            "#,
        );
        assert!(matches!(result, Err(ModelError::InvalidMapping(_))));
    }
}
