//! Merging mapped rows into the data-element template.

use std::borrow::Cow;
use std::collections::BTreeSet;

use brics_model::{MappedRow, Template};
use tracing::debug;

use crate::error::{OutputError, Result};

/// Union of the template columns populated by `rows`, in first-seen order.
pub fn mapped_columns(rows: &[MappedRow]) -> Vec<&str> {
    let mut seen = BTreeSet::new();
    let mut columns = Vec::new();
    for column in rows.iter().flat_map(MappedRow::columns) {
        if seen.insert(column) {
            columns.push(column);
        }
    }
    columns
}

/// Append `rows` to a copy of `template`, aligning cells by header name.
///
/// Every column populated by a mapped row must already exist in the template
/// header; the first one that does not is reported as
/// [`OutputError::ColumnMismatch`] and nothing is merged. Existing template
/// rows are kept ahead of the mapped rows. Template columns a mapped row does
/// not populate are left empty.
pub fn merge_with_template(template: &Template, rows: &[MappedRow]) -> Result<Template> {
    if let Some(column) = mapped_columns(rows)
        .into_iter()
        .find(|column| !template.has_column(column))
    {
        return Err(OutputError::ColumnMismatch {
            column: column.to_string(),
        });
    }

    let mut merged = template.clone();
    for row in rows {
        let cells = template
            .columns()
            .iter()
            .map(|column| row.value(column).map(Cow::into_owned).unwrap_or_default())
            .collect();
        merged.push_row(cells);
    }
    debug!(
        template_rows = template.len(),
        mapped_rows = rows.len(),
        "merged mapped rows into template"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brics_model::PermissibleValues;

    fn template() -> Template {
        Template::new(
            [
                "variable name",
                "title",
                "short description",
                "permissible values",
                "permissible value descriptions",
            ]
            .map(str::to_string)
            .to_vec(),
        )
    }

    fn row(name: &str, values: Option<PermissibleValues>) -> MappedRow {
        MappedRow {
            variable_name: name.to_string(),
            fields: vec![("short description".to_string(), format!("FHIR Path: {name}"))],
            permissible_values: values,
        }
    }

    #[test]
    fn cells_align_by_header() {
        let values = PermissibleValues::from_iter([
            ("male".to_string(), "Male".to_string()),
            ("female".to_string(), "Female".to_string()),
        ]);
        let merged = merge_with_template(
            &template(),
            &[row("Patient.gender", Some(values)), row("Patient.name", None)],
        )
        .expect("merge");

        assert_eq!(merged.len(), 2);
        assert_eq!(
            merged.rows()[0],
            vec![
                "Patient.gender",
                "",
                "FHIR Path: Patient.gender",
                "male|female",
                "Male|Female"
            ]
        );
        assert_eq!(merged.rows()[1][3], "");
    }

    #[test]
    fn unknown_column_is_rejected() {
        let mut mapped = row("Patient.gender", None);
        mapped
            .fields
            .push(("guidelines/instructions".to_string(), String::new()));

        let error = merge_with_template(&template(), &[mapped]).unwrap_err();
        assert!(matches!(
            error,
            OutputError::ColumnMismatch { ref column } if column == "guidelines/instructions"
        ));
    }

    #[test]
    fn no_rows_keeps_template() {
        let merged = merge_with_template(&template(), &[]).expect("merge");
        assert_eq!(merged, template());
    }

    #[test]
    fn mapped_columns_are_deduplicated() {
        let rows = [row("a", None), row("b", None)];
        let columns = mapped_columns(&rows);
        assert_eq!(columns, vec!["variable name", "short description"]);
    }
}
