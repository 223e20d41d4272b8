//! Permissible values resolved from a FHIR value set.

use serde::{Deserialize, Serialize};

/// Separator used when rendering codes and descriptions into a template cell.
pub const VALUE_SEPARATOR: &str = "|";

/// Parallel code / description lists in value-set traversal order.
///
/// The two lists always have the same length; entries are only added in pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissibleValues {
    codes: Vec<String>,
    descriptions: Vec<String>,
}

impl PermissibleValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one code with its display text.
    pub fn push(&mut self, code: impl Into<String>, description: impl Into<String>) {
        self.codes.push(code.into());
        self.descriptions.push(description.into());
    }

    /// Splice all entries of `other` after the current ones.
    pub fn extend(&mut self, other: PermissibleValues) {
        self.codes.extend(other.codes);
        self.descriptions.extend(other.descriptions);
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.codes
            .iter()
            .map(String::as_str)
            .zip(self.descriptions.iter().map(String::as_str))
    }

    /// Codes rendered as a pipe-delimited cell.
    pub fn joined_codes(&self) -> String {
        self.codes.join(VALUE_SEPARATOR)
    }

    /// Descriptions rendered as a pipe-delimited cell.
    pub fn joined_descriptions(&self) -> String {
        self.descriptions.join(VALUE_SEPARATOR)
    }
}

impl FromIterator<(String, String)> for PermissibleValues {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut values = Self::new();
        for (code, description) in iter {
            values.push(code, description);
        }
        values
    }
}
