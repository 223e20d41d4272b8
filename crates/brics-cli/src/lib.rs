//! CLI library components for the FHIR to BRICS converter.

#![allow(missing_docs)]

pub mod logging;
pub mod pipeline;
pub mod types;
