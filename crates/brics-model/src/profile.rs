//! FHIR profile element rows.
//!
//! A [`ProfileRow`] is one line of a tabular profile export such as
//! `all-profiles.csv`. Every column of the export is kept by header name so
//! that field mappings can reference any of them. A cell that is empty or
//! holds only whitespace is a missing value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::columns;

/// One FHIR element definition from a profile or extension export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRow {
    values: BTreeMap<String, String>,
}

impl ProfileRow {
    /// Build a row from `(column, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Value of `column`, or `None` when the column is absent, empty or
    /// whitespace-only.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    /// Set a column value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.values.insert(column.into(), value.into());
    }

    pub fn id(&self) -> &str {
        self.get(columns::ID).unwrap_or_default()
    }

    pub fn path(&self) -> &str {
        self.get(columns::PATH).unwrap_or_default()
    }

    pub fn slice_name(&self) -> Option<&str> {
        self.get(columns::SLICE_NAME)
    }

    pub fn profile(&self) -> &str {
        self.get(columns::PROFILE).unwrap_or_default()
    }

    /// Binding URI used to resolve permissible values.
    pub fn binding_value_set(&self) -> Option<&str> {
        self.get(columns::BINDING_VALUE_SET)
    }

    /// True when this row is the `value[x]` element of an extension.
    pub fn is_extension_value(&self) -> bool {
        self.id().ends_with(columns::EXTENSION_VALUE_SUFFIX)
    }

    /// Hierarchical BRICS variable name for this element.
    pub fn variable_name(&self) -> String {
        variable_name(self.path(), self.slice_name())
    }
}

/// Combine an element path and optional slice name into a variable name.
///
/// `Patient.extension` + `race` becomes `Patient.extension:race`. Without a
/// slice the trailing separator is stripped, so `Patient.gender` is returned
/// unchanged.
pub fn variable_name(path: &str, slice_name: Option<&str>) -> String {
    let combined = format!("{path}:{}", slice_name.unwrap_or_default());
    combined.trim_end_matches(':').to_string()
}

/// Variable name for a row derived from an extension of `parent`.
pub fn extension_variable_name(parent: &str, extension_id: &str) -> String {
    format!("{parent}.{extension_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_cells_are_missing() {
        let row = ProfileRow::from_pairs([("Path", "Patient.name"), ("Slice Name", "  ")]);
        assert_eq!(row.get("Path"), Some("Patient.name"));
        assert_eq!(row.slice_name(), None);
        assert_eq!(row.get("Short"), None);
    }

    #[test]
    fn variable_name_with_slice() {
        assert_eq!(
            variable_name("Patient.extension", Some("race")),
            "Patient.extension:race"
        );
    }

    #[test]
    fn variable_name_strips_trailing_colon() {
        assert_eq!(variable_name("Patient.gender", None), "Patient.gender");
        assert_eq!(variable_name("Patient.gender:", None), "Patient.gender");
    }

    #[test]
    fn extension_value_detection() {
        let row = ProfileRow::from_pairs([("Id", "Extension.value[x]")]);
        assert!(row.is_extension_value());
        let row = ProfileRow::from_pairs([("Id", "Extension.url")]);
        assert!(!row.is_extension_value());
    }
}
