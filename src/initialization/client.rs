//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{user_agent, Config};
use crate::error_handling::InitializationError;
use crate::geoip::ApiClient;

/// Initializes the HTTP client.
///
/// Creates a `reqwest::Client` configured with:
/// - The timeout from `config` (applies to the whole request)
/// - A `whoip/<version>` User-Agent
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(user_agent())
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the geolocation API client for `config`.
pub fn init_api_client(config: &Config) -> Result<ApiClient, InitializationError> {
    let client = init_client(config)?;
    Ok(ApiClient::from_config(client, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_default_config() {
        assert!(init_client(&Config::default()).is_ok());
    }

    #[test]
    fn test_init_api_client_uses_endpoint() {
        let config = Config {
            endpoint: "http://localhost:1/{ip}".to_string(),
            ..Default::default()
        };
        let api = init_api_client(&config).expect("client should build");
        let target = "4.4.4.4".parse().unwrap();
        assert_eq!(api.url_for(&target), "http://localhost:1/4.4.4.4");
    }
}
