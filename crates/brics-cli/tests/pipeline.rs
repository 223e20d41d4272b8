//! Integration tests for the conversion pipeline.

use std::fs;
use std::path::Path;

use brics_cli::pipeline::{convert, ingest, load_mappings};
use brics_cli::types::ConvertInputs;
use brics_model::FieldMappings;
use brics_terminology::{ValueSet, ValueSetResolver, ValueSetSource};

const PROFILES: &str = "\
Id,Path,Slice Name,Short,Definition,Binding Strength,Binding Value Set,Profile
Patient,Patient,,Information about an individual,Demographics.,,,us-core-patient
Patient.extension:race,Patient.extension,race,US Core Race Extension,Race.,,,us-core-patient
Patient.gender,Patient.gender,,male | female,Administrative gender.,required,http://hl7.org/fhir/ValueSet/administrative-gender,us-core-patient
Encounter.class,Encounter.class,,Classification,,,,us-core-encounter
Extension.value[x],Extension.value[x],,Value,,,urn:race,us-core-race
Extension.url,Extension.url,,URL,,,,us-core-race
";

const TEMPLATE: &str = "variable name,title,short description,definition,guidelines/instructions,notes,references,permissible values,permissible value descriptions\n";

struct Fixed;

impl ValueSetSource for Fixed {
    fn fetch_valueset(&self, uri: &str) -> Option<ValueSet> {
        let concepts = match uri {
            "http://hl7.org/fhir/ValueSet/administrative-gender" => {
                r#"[{"code":"male","display":"Male"},{"code":"female","display":"Female"}]"#
            }
            "urn:race" => {
                r#"[{"code":"2106-3","display":"White"},{"code":"2054-5","display":"Black"}]"#
            }
            _ => return None,
        };
        ValueSet::from_json(&format!(
            r#"{{"compose":{{"include":[{{"concept":{concepts}}}]}}}}"#
        ))
        .ok()
    }
}

fn inputs(dir: &Path, template: &str) -> ConvertInputs {
    let profiles = dir.join("all-profiles.csv");
    fs::write(&profiles, PROFILES).unwrap();
    let template_path = dir.join("ImportUDETemplate.csv");
    fs::write(&template_path, template).unwrap();
    ConvertInputs {
        extensions: profiles.clone(),
        profiles,
        template: template_path,
        output_dir: dir.join("output"),
        profile_prefix: "us-core".to_string(),
        resource: "patient".to_string(),
        extension_prefix: "Extension".to_string(),
    }
}

#[test]
fn test_ingest_filters_resource_and_extensions() {
    let dir = tempfile::tempdir().unwrap();
    let ingested = ingest(&inputs(dir.path(), TEMPLATE)).unwrap();

    assert_eq!(ingested.resources.len(), 3);
    assert_eq!(ingested.extensions.len(), 2);
    assert_eq!(ingested.template.columns().len(), 9);
    assert!(ingested.template.is_empty());
}

#[test]
fn test_convert_writes_resource_file() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = inputs(dir.path(), TEMPLATE);

    let result = convert(&inputs, FieldMappings::default(), ValueSetResolver::new(Fixed)).unwrap();

    assert_eq!(result.resource_rows, 3);
    assert_eq!(result.extension_rows, 1);
    assert_eq!(result.relevant_extensions, 2);
    assert_eq!(result.rows_with_values, 2);
    assert_eq!(result.output_path, dir.path().join("output").join("patient_des.csv"));

    let written = fs::read_to_string(&result.output_path).unwrap();
    insta::assert_snapshot!(written.trim_end(), @r"
    variable name,title,short description,definition,guidelines/instructions,notes,references,permissible values,permissible value descriptions
    Patient,,FHIR Path: Patient | FHIR Short: Information about an individual,FHIR Definition: Demographics.,,,,,
    Patient.extension:race,,FHIR Path: Patient.extension | FHIR Slice Name: race | FHIR Short: US Core Race Extension,FHIR Definition: Race.,,,,,
    Patient.extension:race.Extension.value[x],,FHIR Path: Patient.extension | FHIR Slice Name: race | FHIR Short: US Core Race Extension,FHIR Definition: Race.,,,,2106-3|2054-5,White|Black
    Patient.gender,,FHIR Path: Patient.gender | FHIR Short: male | female,FHIR Definition: Administrative gender.,FHIR Binding Strength: required,,FHIR Binding Value Set: http://hl7.org/fhir/ValueSet/administrative-gender,male|female,Male|Female
    ");
}

#[test]
fn test_template_mismatch_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = inputs(
        dir.path(),
        "variable name,short description,definition,permissible values,permissible value descriptions\n",
    );

    let error = convert(&inputs, FieldMappings::default(), ValueSetResolver::new(Fixed)).unwrap_err();

    assert!(format!("{error:#}").contains("'guidelines/instructions' is not present"));
    assert!(!inputs.output_dir.join("patient_des.csv").exists());
}

#[test]
fn test_missing_profiles_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut inputs = inputs(dir.path(), TEMPLATE);
    inputs.profiles = dir.path().join("missing.csv");

    let error = convert(&inputs, FieldMappings::default(), ValueSetResolver::new(Fixed)).unwrap_err();
    assert!(format!("{error:#}").contains("load profiles from"));
}

#[test]
fn test_load_mappings_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mappings.toml");
    fs::write(
        &path,
        "prefix = \"US Core\"\n\n[[field]]\ntarget = \"notes\"\ncolumns = [\"Short\"]\n",
    )
    .unwrap();

    let mappings = load_mappings(Some(&path)).unwrap();
    assert_eq!(mappings.prefix, "US Core");
    assert_eq!(mappings.fields.len(), 1);
    assert_eq!(load_mappings(None).unwrap(), FieldMappings::default());
}
