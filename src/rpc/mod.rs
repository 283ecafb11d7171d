//! JSON-RPC provider setup
//!
//! Builds the alloy provider shared by the wallet and contract
//! implementations that talk to a node.

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::client::ClientBuilder;
use alloy::transports::http::Http;
use alloy::transports::TransportError;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Provider error code for a request the user declined
pub const USER_REJECTED_CODE: i64 = 4001;

/// Provider setup errors
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid RPC URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Node endpoint configuration
#[derive(Debug, Clone)]
pub struct RpcConfig {
    /// Node endpoint
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8545".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Connect an HTTP provider with the configured timeout
pub fn connect(config: &RpcConfig) -> Result<DynProvider, ProviderError> {
    let url: Url = config.url.parse().map_err(|source| ProviderError::InvalidUrl {
        url: config.url.clone(),
        source,
    })?;
    let http = reqwest::Client::builder().timeout(config.timeout).build()?;

    let client = ClientBuilder::default().transport(Http::with_client(http, url), false);
    tracing::debug!(url = %config.url, "Connected JSON-RPC provider");
    Ok(ProviderBuilder::new().connect_client(client).erased())
}

/// JSON-RPC error code carried by a transport error, if any
pub fn error_code(err: &TransportError) -> Option<i64> {
    err.as_error_resp().map(|payload| payload.code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::rpc::json_rpc::ErrorPayload;

    #[test]
    fn test_connect_default() {
        assert!(connect(&RpcConfig::default()).is_ok());
    }

    #[test]
    fn test_connect_invalid_url() {
        let config = RpcConfig {
            url: "not a url".to_string(),
            ..RpcConfig::default()
        };
        assert!(matches!(
            connect(&config),
            Err(ProviderError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_error_code() {
        let payload: ErrorPayload =
            serde_json::from_str(r#"{"code":4001,"message":"User rejected the request."}"#)
                .unwrap();
        let err = TransportError::ErrorResp(payload);
        assert_eq!(error_code(&err), Some(USER_REJECTED_CODE));
    }
}
