//! Conversion pipeline stages.
//!
//! `ingest` loads and filters the input tables, `map` turns resource rows into
//! BRICS rows and `output` merges them into the template and writes the CSV.
//! [`convert`] runs all three inside `info_span!`s.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use brics_ingest::{filter_resource, load_extensions, load_profiles, read_template};
use brics_map::{MappingResult, RowMapper, relevant_extensions};
use brics_model::{FieldMappings, ProfileRow, Template};
use brics_output::{merge_with_template, output_path, write_csv};
use brics_terminology::{ValueSetResolver, ValueSetSource};

use crate::types::{ConvertInputs, ConvertResult};

/// Filtered input tables.
#[derive(Debug, Clone)]
pub struct IngestResult {
    pub resources: Vec<ProfileRow>,
    pub extensions: Vec<ProfileRow>,
    pub template: Template,
}

/// Field mappings from `path`, or the built-in defaults.
pub fn load_mappings(path: Option<&Path>) -> Result<FieldMappings> {
    match path {
        Some(path) => FieldMappings::from_path(path)
            .with_context(|| format!("load field mappings from {}", path.display())),
        None => Ok(FieldMappings::default()),
    }
}

pub fn ingest(inputs: &ConvertInputs) -> Result<IngestResult> {
    let profiles = load_profiles(&inputs.profiles, &inputs.profile_prefix)
        .with_context(|| format!("load profiles from {}", inputs.profiles.display()))?;
    let resources = filter_resource(&profiles, &inputs.resource);
    let extensions = load_extensions(&inputs.extensions, &inputs.extension_prefix)
        .with_context(|| format!("load extensions from {}", inputs.extensions.display()))?;
    let template = read_template(&inputs.template)
        .with_context(|| format!("load template from {}", inputs.template.display()))?;

    info!(
        profile_rows = profiles.len(),
        resource_rows = resources.len(),
        extension_rows = extensions.len(),
        "inputs loaded"
    );
    Ok(IngestResult {
        resources,
        extensions,
        template,
    })
}

pub fn map<S: ValueSetSource>(mapper: &RowMapper<S>, ingested: &IngestResult) -> MappingResult {
    mapper.process(&ingested.resources, &ingested.extensions)
}

/// Merge mapped rows into the template and write `<resource>_des.csv`.
pub fn output(
    inputs: &ConvertInputs,
    template: &Template,
    mapped: &MappingResult,
) -> Result<PathBuf> {
    let merged = merge_with_template(template, &mapped.rows).context("merge with template")?;
    let path = output_path(&inputs.output_dir, &inputs.resource);
    write_csv(&merged, &path).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Run the whole conversion.
pub fn convert<S: ValueSetSource>(
    inputs: &ConvertInputs,
    mappings: FieldMappings,
    resolver: ValueSetResolver<S>,
) -> Result<ConvertResult> {
    let span = info_span!("convert", resource = %inputs.resource);
    let _guard = span.enter();

    let ingested = {
        let _stage = info_span!("ingest").entered();
        ingest(inputs)?
    };
    let relevant = relevant_extensions(&ingested.resources, &ingested.extensions).len();

    let mapper = RowMapper::new(mappings, resolver);
    let mapped = map(&mapper, &ingested);

    let output_path = {
        let _stage = info_span!("output").entered();
        output(inputs, &ingested.template, &mapped)?
    };

    Ok(ConvertResult {
        resource: inputs.resource.clone(),
        resource_rows: mapped.resource_rows,
        extension_rows: mapped.extension_rows,
        rows_with_values: mapped.rows_with_values(),
        relevant_extensions: relevant,
        template_rows: ingested.template.len(),
        output_path,
    })
}
