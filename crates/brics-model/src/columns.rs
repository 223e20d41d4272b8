//! Column names shared by the profile export and the BRICS import template.

// Profile export (all-profiles.csv)
pub const ID: &str = "Id";
pub const PATH: &str = "Path";
pub const SLICE_NAME: &str = "Slice Name";
pub const MUST_SUPPORT: &str = "Must Support?";
pub const SHORT: &str = "Short";
pub const DEFINITION: &str = "Definition";
pub const COMMENTS: &str = "Comments";
pub const REQUIREMENTS: &str = "Requirements";
pub const MEANING_WHEN_MISSING: &str = "Meaning When Missing";
pub const BINDING_STRENGTH: &str = "Binding Strength";
pub const BINDING_DESCRIPTION: &str = "Binding Description";
pub const BINDING_VALUE_SET: &str = "Binding Value Set";
pub const IS_MODIFIER: &str = "Is Modifier?";
pub const IS_SUMMARY: &str = "Is Summary?";
pub const PROFILE: &str = "Profile";

// BRICS data-element template (ImportUDETemplate.csv)
pub const VARIABLE_NAME: &str = "variable name";
pub const SHORT_DESCRIPTION: &str = "short description";
pub const DEFINITION_FIELD: &str = "definition";
pub const GUIDELINES: &str = "guidelines/instructions";
pub const NOTES: &str = "notes";
pub const REFERENCES: &str = "references";
pub const PERMISSIBLE_VALUES: &str = "permissible values";
pub const PERMISSIBLE_VALUE_DESCRIPTIONS: &str = "permissible value descriptions";

/// Template columns that are filled by the mapper itself and cannot be
/// targeted by a field mapping.
pub const RESERVED_TARGETS: [&str; 3] = [
    VARIABLE_NAME,
    PERMISSIBLE_VALUES,
    PERMISSIBLE_VALUE_DESCRIPTIONS,
];

/// Suffix identifying the value element of an extension definition.
pub const EXTENSION_VALUE_SUFFIX: &str = ".value[x]";
