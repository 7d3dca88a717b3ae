use crate::schemas::{Patient, PatientDirectory};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Request timeout for the directory endpoint.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Ways a patient fetch can settle short of a patient list.
///
/// Failure status codes are collapsed into a single fixed-message
/// variant; callers only learn that the fetch failed, not which code
/// the endpoint picked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to fetch patients")]
    Status,
    #[error("{0}")]
    Transport(String),
    #[error("Unknown error")]
    Unknown,
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let text = err.to_string();
        if text.is_empty() {
            FetchError::Unknown
        } else {
            FetchError::Transport(text)
        }
    }
}

/// HTTP client for the patient directory endpoint.
pub struct DirectoryClient {
    http: Client,
    base_url: String,
}

impl DirectoryClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        // Fall back to the default client if the builder fails
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the patient collection. One GET request, no retries; every
    /// failure settles as a `FetchError`.
    pub fn fetch_patients(&self) -> Result<Vec<Patient>, FetchError> {
        let url = format!("{}/api/patients", self.base_url.trim_end_matches('/'));
        debug!(%url, "requesting patient directory");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            // Failure bodies are not parsed
            return interpret_response(status, &[]);
        }

        let body = response.bytes()?;
        interpret_response(status, &body)
    }
}

/// Turn a settled HTTP exchange into the loader result.
///
/// Kept pure so the error taxonomy is testable without a live server.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> Result<Vec<Patient>, FetchError> {
    if !status.is_success() {
        return Err(FetchError::Status);
    }

    let directory: PatientDirectory =
        serde_json::from_slice(body).map_err(|err| FetchError::Transport(err.to_string()))?;
    debug!(count = directory.patients.len(), "patient directory fetched");
    Ok(directory.patients)
}
