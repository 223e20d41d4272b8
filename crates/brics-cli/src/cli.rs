//! CLI argument definitions for the FHIR to BRICS converter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "brics",
    version,
    about = "Convert FHIR profile exports into BRICS data-element import files",
    long_about = "Convert a tabular FHIR profile export (e.g. US Core) into a BRICS\n\
                  data-element import CSV.\n\n\
                  Value-set bindings are resolved over HTTP against FHIR terminology\n\
                  servers, or NLM VSAC when a UMLS API key is configured."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one resource's profile rows into a BRICS import file.
    Convert(ConvertArgs),

    /// Resolve a single value set and print its permissible values.
    Valueset(ValuesetArgs),

    /// Print the effective field mapping.
    Mappings(MappingsArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Keep profile rows whose Profile starts with this prefix.
    #[arg(
        long = "profile-prefix",
        env = "PROFILE_STARTSWITH",
        default_value = "us-core"
    )]
    pub profile_prefix: String,

    /// Keep profile rows whose Profile ends with this resource name.
    #[arg(long = "resource", env = "RESOURCE_NAME", default_value = "patient")]
    pub resource: String,

    /// Keep extension rows whose Id starts with this prefix.
    #[arg(
        long = "extension-prefix",
        env = "EXTENSION_ID_STARTSWITH",
        default_value = "Extension"
    )]
    pub extension_prefix: String,

    #[command(flatten)]
    pub terminology: TerminologyArgs,

    /// Profile export CSV.
    #[arg(
        long = "profiles",
        value_name = "CSV",
        default_value = "fhir_to_brics/templates/all-profiles.csv"
    )]
    pub profiles: PathBuf,

    /// Extension definitions CSV (default: same file as --profiles).
    #[arg(long = "extensions", value_name = "CSV")]
    pub extensions: Option<PathBuf>,

    /// BRICS data-element import template CSV.
    #[arg(
        long = "template",
        value_name = "CSV",
        default_value = "fhir_to_brics/templates/ImportUDETemplate.csv"
    )]
    pub template: PathBuf,

    /// Directory receiving <RESOURCE>_des.csv.
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        default_value = "fhir_to_brics/output"
    )]
    pub output_dir: PathBuf,

    /// TOML file overriding the built-in field mapping.
    #[arg(long = "mappings", value_name = "TOML")]
    pub mappings: Option<PathBuf>,
}

/// Value-set retrieval options.
#[derive(Parser)]
pub struct TerminologyArgs {
    /// UMLS API key for authenticated NLM VSAC requests.
    #[arg(long = "nlm-api-key", env = "UMLS_API_KEY", hide_env_values = true)]
    pub nlm_api_key: Option<String>,

    /// Per-request HTTP timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 10)]
    pub timeout_secs: u64,
}

#[derive(Parser)]
pub struct ValuesetArgs {
    /// Canonical value-set URI.
    #[arg(value_name = "URI")]
    pub uri: String,

    #[command(flatten)]
    pub terminology: TerminologyArgs,
}

#[derive(Parser)]
pub struct MappingsArgs {
    /// TOML file overriding the built-in field mapping.
    #[arg(long = "mappings", value_name = "TOML")]
    pub mappings: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
