use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::terminology::PermissibleValues;

/// A BRICS data-element record produced from one profile or extension row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedRow {
    pub variable_name: String,
    /// Composite text fields keyed by template column, in mapping order.
    pub fields: Vec<(String, String)>,
    pub permissible_values: Option<PermissibleValues>,
}

impl MappedRow {
    /// Template columns this row populates.
    pub fn columns(&self) -> Vec<&str> {
        let mut names = Vec::with_capacity(self.fields.len() + 3);
        names.push(columns::VARIABLE_NAME);
        names.extend(self.fields.iter().map(|(target, _)| target.as_str()));
        if self.permissible_values.is_some() {
            names.push(columns::PERMISSIBLE_VALUES);
            names.push(columns::PERMISSIBLE_VALUE_DESCRIPTIONS);
        }
        names
    }

    /// Rendered value for a template column, `None` when not populated.
    pub fn value(&self, column: &str) -> Option<Cow<'_, str>> {
        match column {
            columns::VARIABLE_NAME => Some(Cow::Borrowed(self.variable_name.as_str())),
            columns::PERMISSIBLE_VALUES => self
                .permissible_values
                .as_ref()
                .map(|values| Cow::Owned(values.joined_codes())),
            columns::PERMISSIBLE_VALUE_DESCRIPTIONS => self
                .permissible_values
                .as_ref()
                .map(|values| Cow::Owned(values.joined_descriptions())),
            _ => self
                .fields
                .iter()
                .find(|(target, _)| target == column)
                .map(|(_, text)| Cow::Borrowed(text.as_str())),
        }
    }

    /// Text of a composite field.
    pub fn field(&self, target: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == target)
            .map(|(_, text)| text.as_str())
    }
}
