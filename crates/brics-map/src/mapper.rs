//! Profile row to BRICS data-element mapping.
//!
//! Every resource row produces one [`MappedRow`]. A row that carries a slice
//! name (a US Core extension slot such as `Patient.extension:race`) is
//! followed by one additional row per matching extension `value[x]` element.
//! Extension rows reuse the parent's text fields but resolve their own
//! binding, and their variable name is `<parent>.<extension Id>`.

use brics_model::{
    FieldMappings, MappedRow, PermissibleValues, ProfileRow, extension_variable_name,
};
use brics_terminology::{ValueSetResolver, ValueSetSource};
use tracing::{debug, info, info_span};

use crate::combine::text_fields;
use crate::extensions::matching_extensions;

/// Mapped rows plus counts for reporting.
#[derive(Debug, Clone, Default)]
pub struct MappingResult {
    pub rows: Vec<MappedRow>,
    /// Rows produced directly from resource rows.
    pub resource_rows: usize,
    /// Rows produced by extension expansion.
    pub extension_rows: usize,
}

impl MappingResult {
    /// Number of rows that received permissible values.
    pub fn rows_with_values(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.permissible_values.is_some())
            .count()
    }
}

/// Maps profile rows using a field mapping and a value-set resolver.
#[derive(Debug, Clone)]
pub struct RowMapper<S> {
    mappings: FieldMappings,
    resolver: ValueSetResolver<S>,
}

impl<S: ValueSetSource> RowMapper<S> {
    pub fn new(mappings: FieldMappings, resolver: ValueSetResolver<S>) -> Self {
        Self { mappings, resolver }
    }

    pub fn mappings(&self) -> &FieldMappings {
        &self.mappings
    }

    /// Permissible values for the row's binding, if it has one and it resolves.
    pub fn permissible_values(&self, row: &ProfileRow) -> Option<PermissibleValues> {
        let uri = row.binding_value_set()?;
        let values = self.resolver.resolve(uri);
        if values.is_none() {
            debug!(uri, variable = %row.variable_name(), "no permissible values");
        }
        values
    }

    /// Map one resource row.
    pub fn map_row(&self, row: &ProfileRow) -> MappedRow {
        MappedRow {
            variable_name: row.variable_name(),
            fields: text_fields(row, &self.mappings),
            permissible_values: self.permissible_values(row),
        }
    }

    /// Rows derived from the extensions matching `parent`'s slice name.
    ///
    /// Returns nothing when `parent` has no slice name or no extension
    /// matches.
    pub fn expand_extensions(
        &self,
        parent: &ProfileRow,
        extensions: &[ProfileRow],
    ) -> Vec<MappedRow> {
        let Some(slice_name) = parent.slice_name() else {
            return Vec::new();
        };
        info!(slice_name, "processing extension rows");

        let matches = matching_extensions(slice_name, extensions);
        if matches.is_empty() {
            info!(slice_name, "no matching extensions found");
            return Vec::new();
        }

        let parent_name = parent.variable_name();
        let parent_fields = text_fields(parent, &self.mappings);
        matches
            .into_iter()
            .map(|extension| MappedRow {
                variable_name: extension_variable_name(&parent_name, extension.id()),
                fields: parent_fields.clone(),
                permissible_values: self.permissible_values(extension),
            })
            .collect()
    }

    /// Map all resource rows, each followed by its extension rows.
    pub fn process(&self, resources: &[ProfileRow], extensions: &[ProfileRow]) -> MappingResult {
        let span = info_span!("map", resource_rows = resources.len());
        let _guard = span.enter();
        info!("processing resource rows");

        let mut result = MappingResult::default();
        for row in resources {
            result.rows.push(self.map_row(row));
            result.resource_rows += 1;

            let expanded = self.expand_extensions(row, extensions);
            result.extension_rows += expanded.len();
            result.rows.extend(expanded);
        }

        info!(
            rows = result.rows.len(),
            extension_rows = result.extension_rows,
            "resource rows mapped"
        );
        result
    }
}
