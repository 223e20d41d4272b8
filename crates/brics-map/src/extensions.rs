//! Extension row selection.

use brics_model::ProfileRow;

/// Extension `value[x]` rows whose profile ends with `slice_name`.
pub fn matching_extensions<'a>(
    slice_name: &str,
    extensions: &'a [ProfileRow],
) -> Vec<&'a ProfileRow> {
    extensions
        .iter()
        .filter(|row| row.profile().ends_with(slice_name) && row.is_extension_value())
        .collect()
}

/// All extension rows relevant to `resources`.
///
/// For each resource row with a slice name, every extension row whose profile
/// ends with that slice name (ignoring case) is listed. Rows may repeat when
/// several resource rows share a slice name.
pub fn relevant_extensions<'a>(
    resources: &[ProfileRow],
    extensions: &'a [ProfileRow],
) -> Vec<&'a ProfileRow> {
    resources
        .iter()
        .filter_map(ProfileRow::slice_name)
        .flat_map(move |slice_name| {
            let suffix = slice_name.to_lowercase();
            extensions
                .iter()
                .filter(move |row| row.profile().to_lowercase().ends_with(&suffix))
        })
        .collect()
}
