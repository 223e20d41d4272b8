//! Composite text field rendering.

use brics_model::{FieldMappings, ProfileRow};

/// Render `"<prefix> <column>: <value>"` for every non-missing column, joined
/// by `separator`.
///
/// Missing values (absent columns or blank cells) are skipped rather than
/// rendered as empty entries, so a field whose sources are all missing is an
/// empty string.
pub fn combine_columns<S: AsRef<str>>(
    row: &ProfileRow,
    columns: &[S],
    prefix: &str,
    separator: &str,
) -> String {
    columns
        .iter()
        .filter_map(|column| {
            let column = column.as_ref();
            row.get(column)
                .map(|value| format!("{prefix} {column}: {value}"))
        })
        .collect::<Vec<_>>()
        .join(separator)
}

/// Render every mapped field of `row`, in mapping order.
pub fn text_fields(row: &ProfileRow, mappings: &FieldMappings) -> Vec<(String, String)> {
    mappings
        .fields
        .iter()
        .map(|field| {
            (
                field.target.clone(),
                combine_columns(row, &field.columns, &mappings.prefix, &mappings.separator),
            )
        })
        .collect()
}
