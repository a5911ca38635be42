//! IP address lookup against the remote geolocation API.
//!
//! `GeoLookup` is the seam between the output driver and the network so the
//! fan-out can be exercised with in-process fakes.

use std::future::Future;
use std::sync::Arc;

use log::debug;

use super::types::GeoRecord;
use crate::app::Target;
use crate::config::{Config, FIELDS_PLACEHOLDER, IP_PLACEHOLDER};
use crate::error_handling::LookupError;

/// Something that can geolocate a single target.
pub trait GeoLookup: Send + Sync + 'static {
    /// Looks up one target. A `status: fail` answer is `Ok`.
    fn lookup(&self, target: &Target) -> impl Future<Output = Result<GeoRecord, LookupError>> + Send;
}

/// HTTP client for the geolocation API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Arc<reqwest::Client>,
    endpoint: String,
    fields: String,
}

impl ApiClient {
    pub fn new(
        client: Arc<reqwest::Client>,
        endpoint: impl Into<String>,
        fields: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            fields: fields.into(),
        }
    }

    /// Creates a client for the endpoint and field mask in `config`.
    pub fn from_config(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self::new(client, config.endpoint.clone(), config.fields.clone())
    }

    /// Request URL for a target. The port, if any, is not sent.
    pub fn url_for(&self, target: &Target) -> String {
        self.endpoint
            .replace(IP_PLACEHOLDER, &target.addr().to_string())
            .replace(FIELDS_PLACEHOLDER, &self.fields)
    }
}

impl GeoLookup for ApiClient {
    fn lookup(&self, target: &Target) -> impl Future<Output = Result<GeoRecord, LookupError>> + Send {
        let url = self.url_for(target);
        let client = Arc::clone(&self.client);
        let target = target.to_string();

        async move {
            debug!("Looking up {target} via {url}");

            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|source| LookupError::Network {
                    target: target.clone(),
                    source,
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(LookupError::Status { target, status });
            }

            let body = response
                .text()
                .await
                .map_err(|source| LookupError::Network {
                    target: target.clone(),
                    source,
                })?;

            let record: GeoRecord = serde_json::from_str(&body)
                .map_err(|source| LookupError::Parse {
                    target: target.clone(),
                    source,
                })?;

            debug!("Received {} fields for {target}", record.len());
            Ok(record)
        }
    }
}
