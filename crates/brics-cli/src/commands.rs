use std::time::Duration;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use brics_cli::pipeline::{convert, load_mappings};
use brics_cli::types::{ConvertInputs, ConvertResult};
use brics_model::PermissibleValues;
use brics_terminology::{ClientConfig, TerminologyClient, ValueSetResolver};

use crate::cli::{ConvertArgs, MappingsArgs, TerminologyArgs, ValuesetArgs};
use crate::summary::{apply_table_style, header_cell};

fn resolver(args: &TerminologyArgs) -> Result<ValueSetResolver<TerminologyClient>> {
    let config = ClientConfig::default()
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_nlm_api_key(args.nlm_api_key.clone());
    let client = TerminologyClient::new(config).context("create HTTP client")?;
    Ok(ValueSetResolver::new(client))
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let inputs = ConvertInputs {
        extensions: args
            .extensions
            .clone()
            .unwrap_or_else(|| args.profiles.clone()),
        profiles: args.profiles.clone(),
        template: args.template.clone(),
        output_dir: args.output_dir.clone(),
        profile_prefix: args.profile_prefix.clone(),
        resource: args.resource.clone(),
        extension_prefix: args.extension_prefix.clone(),
    };
    let mappings = load_mappings(args.mappings.as_deref())?;
    info!(
        profile_prefix = %inputs.profile_prefix,
        resource = %inputs.resource,
        extension_prefix = %inputs.extension_prefix,
        nlm = args.terminology.nlm_api_key.is_some(),
        "starting conversion"
    );
    convert(&inputs, mappings, resolver(&args.terminology)?)
}

pub fn run_valueset(args: &ValuesetArgs) -> Result<()> {
    match resolver(&args.terminology)?.resolve(&args.uri) {
        Some(values) => println!("{}", values_table(&values)),
        None => println!("{}: no permissible values", args.uri),
    }
    Ok(())
}

pub fn run_mappings(args: &MappingsArgs) -> Result<()> {
    let mappings = load_mappings(args.mappings.as_deref())?;
    println!("Prefix: {:?}", mappings.prefix);
    println!("Separator: {:?}", mappings.separator);
    let mut table = Table::new();
    table.set_header(vec![header_cell("Target column"), header_cell("Source columns")]);
    apply_table_style(&mut table);
    for field in &mappings.fields {
        table.add_row(vec![field.target.clone(), field.columns.join(", ")]);
    }
    println!("{table}");
    Ok(())
}

fn values_table(values: &PermissibleValues) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Description")]);
    apply_table_style(&mut table);
    for (code, description) in values.iter() {
        table.add_row(vec![code, description]);
    }
    table
}
