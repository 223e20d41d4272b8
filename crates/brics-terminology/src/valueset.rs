//! The subset of the FHIR `ValueSet` resource used for flattening.
//!
//! Only `compose.include` is read. An include either lists concepts inline
//! or refers to other value sets by canonical URI:
//!
//! ```json
//! {
//!   "resourceType": "ValueSet",
//!   "compose": {
//!     "include": [
//!       { "system": "http://hl7.org/fhir/administrative-gender",
//!         "concept": [ { "code": "male", "display": "Male" } ] },
//!       { "valueSet": [ "http://hl7.org/fhir/ValueSet/data-absent-reason" ] }
//!     ]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compose: Option<Compose>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compose {
    #[serde(default)]
    pub include: Vec<Include>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Include {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub concept: Option<Vec<Concept>>,
    #[serde(
        rename = "valueSet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub value_set: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl ValueSet {
    /// Parse a value set from a JSON document.
    pub fn from_json(source: &str) -> serde_json::Result<Self> {
        serde_json::from_str(source)
    }

    /// `compose.include` entries, empty when the value set has no compose.
    pub fn includes(&self) -> &[Include] {
        self.compose
            .as_ref()
            .map(|compose| compose.include.as_slice())
            .unwrap_or_default()
    }
}
