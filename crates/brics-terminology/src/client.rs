//! HTTP retrieval of value sets from FHIR terminology servers and NLM VSAC.
//!
//! URIs on the NLM host are fetched with basic authentication (user `apikey`,
//! password = UMLS API key) when a key is configured; everything else is a
//! plain GET asking for FHIR JSON.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::ACCEPT;
use tracing::{debug, error, info};

use crate::error::{Result, TerminologyError};
use crate::valueset::ValueSet;

/// Host of the NLM Value Set Authority Center FHIR service.
pub const NLM_HOST: &str = "cts.nlm.nih.gov";

/// Media type requested from FHIR servers.
pub const FHIR_JSON: &str = "application/fhir+json";

/// HTTP request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Basic-auth user name expected by the NLM service.
const NLM_USER: &str = "apikey";

/// Something that can look up a value set by canonical URI.
///
/// Implementations swallow their own failures: a value set that cannot be
/// retrieved or decoded is reported as `None`.
pub trait ValueSetSource {
    fn fetch_valueset(&self, uri: &str) -> Option<ValueSet>;
}

impl<S: ValueSetSource + ?Sized> ValueSetSource for &S {
    fn fetch_valueset(&self, uri: &str) -> Option<ValueSet> {
        (**self).fetch_valueset(uri)
    }
}

/// Connection settings for [`TerminologyClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    /// UMLS API key enabling authenticated NLM requests.
    pub nlm_api_key: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: REQUEST_TIMEOUT,
            nlm_api_key: None,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the NLM API key; blank keys are ignored.
    #[must_use]
    pub fn with_nlm_api_key(mut self, key: Option<String>) -> Self {
        self.nlm_api_key = key.filter(|k| !k.trim().is_empty());
        self
    }
}

/// Blocking client for FHIR and NLM value-set endpoints.
#[derive(Debug, Clone)]
pub struct TerminologyClient {
    client: Client,
    nlm_api_key: Option<String>,
}

impl TerminologyClient {
    /// Create a new client.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(TerminologyError::Client)?;

        Ok(Self {
            client,
            nlm_api_key: config.nlm_api_key,
        })
    }

    /// True when `uri` will be sent to NLM with authentication.
    pub fn is_nlm(&self, uri: &str) -> bool {
        uri.contains(NLM_HOST) && self.nlm_api_key.is_some()
    }

    /// Fetch from a FHIR terminology server.
    pub fn fetch_fhir(&self, uri: &str) -> Result<ValueSet> {
        info!(uri, "fetching FHIR value set");
        let request = self.client.get(uri).header(ACCEPT, FHIR_JSON);
        self.send(uri, request)
    }

    /// Fetch from NLM VSAC with basic authentication.
    pub fn fetch_nlm(&self, uri: &str, api_key: &str) -> Result<ValueSet> {
        info!(uri, "fetching NLM value set");
        let request = self
            .client
            .get(uri)
            .header(ACCEPT, FHIR_JSON)
            .basic_auth(NLM_USER, Some(api_key));
        let valueset = self.send(uri, request)?;
        info!(uri, "fetched NLM value set");
        Ok(valueset)
    }

    /// Fetch a value set, choosing NLM or FHIR by URI.
    pub fn try_fetch(&self, uri: &str) -> Result<ValueSet> {
        match self.nlm_api_key.as_deref() {
            Some(key) if uri.contains(NLM_HOST) => self.fetch_nlm(uri, key),
            _ => self.fetch_fhir(uri),
        }
    }

    fn send(&self, uri: &str, request: RequestBuilder) -> Result<ValueSet> {
        let response = request.send().map_err(|source| TerminologyError::Network {
            uri: uri.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TerminologyError::Status {
                uri: uri.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| TerminologyError::Network {
            uri: uri.to_string(),
            source,
        })?;
        debug!(uri, bytes = body.len(), "received value set");

        ValueSet::from_json(&body).map_err(|source| TerminologyError::Decode {
            uri: uri.to_string(),
            source,
        })
    }
}

impl ValueSetSource for TerminologyClient {
    fn fetch_valueset(&self, uri: &str) -> Option<ValueSet> {
        match self.try_fetch(uri) {
            Ok(valueset) => Some(valueset),
            Err(err) => {
                error!(uri, error = %err, "failed to fetch value set");
                None
            }
        }
    }
}
