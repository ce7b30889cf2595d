//! Client configuration
//!
//! Both fields are optional so the struct can be embedded in a host application's own config
//! file. An empty config talks to the public PsychonautWiki endpoint with the transport's default
//! timeout.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::Error;

pub(crate) const DEFAULT_ENDPOINT: &str = "https://api.psychonautwiki.org";

/// Configuration for a [`Client`](crate::Client)
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
#[serde(default)]
pub struct ClientConfig {
    /// The GraphQL endpoint to POST to (default: https://api.psychonautwiki.org)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// The HTTP timeout for each request, e.g. `30s`
    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Config for a non-default endpoint, used to point the client at a mock server
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(endpoint.into()),
            timeout: None,
        }
    }

    /// Resolve the endpoint to POST to
    pub fn endpoint(&self) -> Result<Url, Error> {
        let endpoint = self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT);
        Ok(Url::parse(endpoint)?)
    }
}
