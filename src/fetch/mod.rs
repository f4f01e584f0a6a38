pub mod launch;
pub mod payload;
pub mod weather;

use std::sync::Arc;

use kvstore::KVDb;
use thiserror::Error;

use crate::constants::{defaults, REMOTE_DEFAULTS};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Tls(#[from] native_tls::Error),
    #[error("request failed: {0}")]
    Http(#[from] ureq::Error),
    #[error("could not decode response: {0}")]
    Decode(#[from] std::io::Error),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

pub fn http_agent() -> Result<ureq::Agent, FetchError> {
    Ok(ureq::AgentBuilder::new()
        .tls_connector(Arc::new(native_tls::TlsConnector::new()?))
        .timeout(defaults::API_REQUEST_TIMEOUT)
        .build())
}

/// Endpoint base URL: the kvstore override if one is set, otherwise the
/// compiled-in default.
pub fn base_url(kvs: &KVDb, key: &str) -> String {
    match kvs.get(key) {
        Ok(Some(base_url)) => base_url,
        _ => REMOTE_DEFAULTS.get(key).unwrap().to_string(),
    }
}
