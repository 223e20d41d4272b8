//! Value-set resolution for BRICS permissible values.
//!
//! A FHIR element binding names a value set by canonical URI. This crate
//! fetches that value set over HTTP (from a FHIR terminology server, or from
//! NLM VSAC when an API key is configured), walks `compose.include`, follows
//! nested value-set references and returns the codes and display texts as
//! parallel lists.
//!
//! Retrieval failures are logged and reported as "no value set"; they never
//! abort a conversion run.
//!
//! # Example
//!
//! ```no_run
//! use brics_terminology::{ClientConfig, TerminologyClient, ValueSetResolver};
//!
//! # fn main() -> brics_terminology::Result<()> {
//! let client = TerminologyClient::new(ClientConfig::default())?;
//! let resolver = ValueSetResolver::new(client);
//! if let Some(values) = resolver.resolve("http://hl7.org/fhir/ValueSet/administrative-gender") {
//!     println!("{}", values.joined_codes());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod resolver;
mod valueset;

pub use client::{
    ClientConfig, FHIR_JSON, NLM_HOST, REQUEST_TIMEOUT, TerminologyClient, ValueSetSource,
};
pub use error::{Result, TerminologyError};
pub use resolver::{MAX_NESTING_DEPTH, ValueSetResolver};
pub use valueset::{Compose, Concept, Include, ValueSet};
